//! Per-member goal configuration.
//!
//! A goal is a desired `(division, leadership)` pair configured by the
//! player, either by hand or by activating a strategy profile. The string
//! form (`"Research"`, `"Research (Leader)"`, `"None"`) is the collaborator
//! interface; everything past the parse boundary works with typed values.

use std::collections::BTreeMap;

use crate::board::Division;
use crate::roster::Member;

/// Suffix marking the primary-leader variant of a goal string.
const LEADER_SUFFIX: &str = "(Leader)";

/// A desired placement for one member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberGoal {
    pub division: Division,
    pub is_primary_leader: bool,
}

impl MemberGoal {
    /// The "no goal for this member" value.
    pub const NONE: MemberGoal = MemberGoal {
        division: Division::None,
        is_primary_leader: false,
    };

    pub fn new(division: Division, is_primary_leader: bool) -> Self {
        Self {
            division,
            is_primary_leader,
        }
    }

    /// Parses a goal configuration string.
    ///
    /// Accepts `"{Division}"`, `"{Division} (Leader)"`, and the literal
    /// `"None"`. Malformed strings yield [`MemberGoal::NONE`] silently; a
    /// `(Leader)` marker on an unparseable division is discarded with it.
    pub fn parse(raw: &str) -> MemberGoal {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "None" {
            return MemberGoal::NONE;
        }

        let is_leader = trimmed.ends_with(LEADER_SUFFIX);
        let division_name = trimmed.trim_end_matches(LEADER_SUFFIX).trim();
        let division = Division::parse_lenient(division_name);
        if !division.is_active() {
            return MemberGoal::NONE;
        }
        MemberGoal::new(division, is_leader)
    }

    /// Whether this goal tracks nothing.
    pub fn is_none(&self) -> bool {
        !self.division.is_active()
    }
}

/// The full per-member goal configuration.
///
/// Always an explicit map over the fixed roster; members without an entry
/// are treated as [`MemberGoal::NONE`].
pub type GoalAssignments = BTreeMap<Member, MemberGoal>;

/// Convenience lookup that treats missing entries as "no goal".
pub fn goal_for(assignments: &GoalAssignments, member: Member) -> MemberGoal {
    assignments.get(&member).copied().unwrap_or(MemberGoal::NONE)
}
