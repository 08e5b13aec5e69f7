//! Goal accomplishment matching.
//!
//! Decides whether performing an offered action realizes a strategic goal.
//! Dispatch is keyed on the goal's structured [`GoalKind`], never on its
//! display text; only effect facts the collaborator genuinely delivers as
//! free text (the "moves to {division}" effect) are matched in the
//! description.

use crate::board::BoardState;
use crate::decision::{ActionCode, OfferedChoice};
use crate::planner::{GoalKind, StrategicGoal};
use crate::roster::Member;

/// Phrase fallback for rank increases on codes the scorer does not know.
const RANKS_UP_PHRASE: &str = "ranks up";

/// Returns whether performing `choice` on the decided member realizes `goal`.
///
/// A match promotes the choice's displayed score to the distinguished
/// "goal-completing" indicator in the report layer.
pub fn goal_completes(
    goal: &StrategicGoal,
    choice: &OfferedChoice,
    decided: Member,
    board: &BoardState,
) -> bool {
    match goal.kind {
        GoalKind::RankUp { member, .. } | GoalKind::RankUpToLead { member, .. } => {
            decided == member && denotes_rank_increase(choice)
        }
        GoalKind::LeaderBlocked { blocker, .. } => {
            decided == blocker && choice.action() == Some(ActionCode::Interrogate)
        }
        GoalKind::EstablishLeader { division } => {
            denotes_rank_increase(choice)
                && board
                    .member(decided)
                    .is_some_and(|state| state.division == division)
        }
        GoalKind::Move { member, division }
        | GoalKind::Place { member, division }
        | GoalKind::MoveToLead { member, division }
        | GoalKind::PlaceToLead { member, division } => {
            choice.description.contains(&member.to_string())
                && choice
                    .description
                    .contains(&format!("moves to {division}"))
        }
        GoalKind::LeaderOptimal { .. } | GoalKind::BoardOptimal => false,
    }
}

/// Whether the choice raises a member's rank: structurally via its action
/// code, or as a description fallback for unrecognized codes.
fn denotes_rank_increase(choice: &OfferedChoice) -> bool {
    match choice.action() {
        Some(action) if action.is_rank_increase() => true,
        Some(ActionCode::Unknown) => choice.description.contains(RANKS_UP_PHRASE),
        _ => false,
    }
}
