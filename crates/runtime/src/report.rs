//! Input and output records exchanged with the hosting collaborator.

use advisor_core::board::Division;
use advisor_core::planner::Priority;
use advisor_core::roster::Member;
use advisor_content::RewardTier;
use serde::{Deserialize, Serialize};

// ============================================================================
// Inputs
// ============================================================================

/// The open decision as reported by the collaborator: the member on trial
/// and the explicitly offered `(action code, description)` pairs.
/// Interrogation is implicit and must not be listed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionInput {
    pub member: String,
    pub choices: Vec<(String, String)>,
}

impl DecisionInput {
    pub fn new(member: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            choices: Vec::new(),
        }
    }

    pub fn with_choice(
        mut self,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.choices.push((code.into(), description.into()));
        self
    }
}

// ============================================================================
// Outputs
// ============================================================================

/// One strategic goal, ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalReport {
    pub text: String,
    pub priority: Priority,
    /// Display tag, currently the priority tier name.
    pub tag: String,
}

/// One scored choice. `completes_goal` overrides the numeric score with
/// the distinguished goal-completing indicator at render time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceReport {
    pub code: String,
    pub description: String,
    pub score: i32,
    pub completes_goal: bool,
}

/// Reward annotation for one member currently on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardOverlay {
    pub member: Member,
    pub division: Division,
    pub text: String,
    pub tier: RewardTier,
    /// Whether the member already sits in their configured target division.
    pub on_target: bool,
}

/// Everything the rendering collaborator needs for one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    pub profile: String,
    pub goals: Vec<GoalReport>,
    pub choices: Vec<ChoiceReport>,
    pub imprisoned_count: usize,
    pub rewards: Vec<RewardOverlay>,
}
