//! The advisory session driven once per game tick.

use advisor_core::board::{BoardSnapshot, BoardState};
use advisor_core::decision::{DecisionContext, OfferedChoice};
use advisor_core::goal::{GoalAssignments, MemberGoal};
use advisor_core::matcher::goal_completes;
use advisor_core::planner::{plan_goals, StrategicGoal};
use advisor_core::roster::Member;
use advisor_core::scoring::score_choice;
use advisor_core::strategy::{AffinityRules, Catalog, ScoreWeights, WeightKind, WeightOverrides};
use tracing::{debug, info};

use crate::error::SessionError;
use crate::report::{ChoiceReport, DecisionInput, GoalReport, RewardOverlay, TickReport};

/// Holds the player's configuration across ticks and runs the advisory
/// pipeline on demand.
///
/// The session recomputes from scratch on every [`AdvisorSession::advise`]
/// call; the cached report exists so a caller that knows nothing changed
/// can skip the call entirely. Configuration setters drop the cache.
pub struct AdvisorSession {
    catalog: Catalog,
    profile: String,
    assignments: GoalAssignments,
    overrides: WeightOverrides,
    affinity: AffinityRules,
    weights: ScoreWeights,
    cached: Option<TickReport>,
}

impl AdvisorSession {
    /// Creates a session over the built-in strategy catalog, starting on
    /// the "Custom" profile with no goals configured.
    pub fn new() -> Self {
        Self::with_catalog(advisor_content::catalog())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            profile: Catalog::CUSTOM.to_string(),
            assignments: GoalAssignments::new(),
            overrides: WeightOverrides::new(),
            affinity: AffinityRules::default(),
            weights: ScoreWeights::new(),
            cached: None,
        }
    }

    pub fn active_profile(&self) -> &str {
        &self.profile
    }

    /// All selectable profile names.
    pub fn profile_names(&self) -> Vec<&'static str> {
        self.catalog.names()
    }

    /// Activates a strategy profile by name.
    ///
    /// Named profiles replace the whole goal configuration; "Custom" keeps
    /// the current per-member goals and clears strategy-level overrides.
    pub fn set_strategy(&mut self, name: &str) -> Result<(), SessionError> {
        let (assignments, overrides, affinity) = self
            .catalog
            .activate(name, &self.assignments)
            .ok_or_else(|| SessionError::UnknownStrategy(name.to_string()))?;

        info!(profile = name, "strategy activated");
        self.profile = name.to_string();
        self.assignments = assignments;
        self.overrides = overrides;
        self.affinity = affinity;
        self.cached = None;
        Ok(())
    }

    /// Sets one member's goal from its collaborator string form.
    ///
    /// This is the "Custom" editing path; the string parses with the usual
    /// leniency and the active profile name is left as-is.
    pub fn set_member_goal(&mut self, member: Member, goal: &str) {
        self.assignments.insert(member, MemberGoal::parse(goal));
        self.cached = None;
    }

    /// Sets one global score weight.
    pub fn set_weight(&mut self, kind: WeightKind, value: i32) {
        self.weights.set(kind, value);
        self.cached = None;
    }

    /// Replaces the whole global weight table (e.g. from a loaded file).
    pub fn set_weights(&mut self, weights: ScoreWeights) {
        self.weights = weights;
        self.cached = None;
    }

    /// Sets the affinity rule lists from their comma-separated string form.
    ///
    /// Only meaningful alongside relationship-aware scoring; named profiles
    /// overwrite this on activation.
    pub fn set_affinity(&mut self, opposed: &str, allied: &str) {
        self.affinity = AffinityRules::parse(opposed, allied);
        self.cached = None;
    }

    /// The report from the most recent [`AdvisorSession::advise`] call,
    /// if configuration has not changed since.
    pub fn cached_report(&self) -> Option<&TickReport> {
        self.cached.as_ref()
    }

    /// Runs the full advisory pipeline for one tick.
    pub fn advise(
        &mut self,
        snapshot: &BoardSnapshot,
        decision: Option<&DecisionInput>,
    ) -> TickReport {
        let board = snapshot.normalize();
        debug!(
            members = board.members().count(),
            imprisoned = board.imprisoned_count(),
            "board normalized"
        );

        let goals = plan_goals(&board, &self.assignments);
        debug!(goals = goals.len(), "goals planned");

        let choices = decision
            .map(|input| self.score_decision(input, &board, &goals))
            .unwrap_or_default();

        let report = TickReport {
            profile: self.profile.clone(),
            goals: goals
                .iter()
                .map(|goal| GoalReport {
                    text: goal.text(),
                    priority: goal.priority,
                    tag: goal.priority.to_string(),
                })
                .collect(),
            choices,
            imprisoned_count: board.imprisoned_count(),
            rewards: self.reward_overlays(&board),
        };

        self.cached = Some(report.clone());
        report
    }

    fn score_decision(
        &self,
        input: &DecisionInput,
        board: &BoardState,
        goals: &[StrategicGoal],
    ) -> Vec<ChoiceReport> {
        let Some(member) = Member::parse(&input.member) else {
            debug!(member = %input.member, "decision member not on the roster, skipping");
            return Vec::new();
        };

        let mut decision = DecisionContext::new(member);
        for (code, description) in &input.choices {
            decision.push_choice(OfferedChoice::new(code.clone(), description.clone()));
        }

        // Interrogation is always implicitly on offer.
        let mut offered = vec![OfferedChoice::interrogate()];
        offered.extend_from_slice(decision.choices());

        offered
            .iter()
            .map(|choice| {
                let score = score_choice(
                    choice,
                    &decision,
                    board,
                    &self.assignments,
                    &self.weights,
                    &self.overrides,
                    &self.affinity,
                );
                let completes_goal = goals
                    .iter()
                    .any(|goal| goal_completes(goal, choice, member, board));
                ChoiceReport {
                    code: choice.code.clone(),
                    description: choice.description.clone(),
                    score,
                    completes_goal,
                }
            })
            .collect()
    }

    fn reward_overlays(&self, board: &BoardState) -> Vec<RewardOverlay> {
        board
            .members()
            .filter_map(|state| {
                let info = advisor_content::reward_for(state.member, state.division)?;
                let goal = self
                    .assignments
                    .get(&state.member)
                    .copied()
                    .unwrap_or(MemberGoal::NONE);
                Some(RewardOverlay {
                    member: state.member,
                    division: state.division,
                    text: info.text.to_string(),
                    tier: info.tier,
                    on_target: goal.division.is_active() && goal.division == state.division,
                })
            })
            .collect()
    }
}

impl Default for AdvisorSession {
    fn default() -> Self {
        Self::new()
    }
}
