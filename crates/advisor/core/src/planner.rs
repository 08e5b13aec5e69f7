//! Strategic goal derivation.
//!
//! Given a normalized board and the active goal assignments, the planner
//! emits an ordered list of [`StrategicGoal`] records describing every
//! corrective or confirmatory step toward the configuration. Goals carry a
//! structured [`GoalKind`]; display text is generated from the structure,
//! and the accomplishment matcher dispatches on the tag, never on text.

use std::fmt;

use crate::board::{BoardState, Division, Rank};
use crate::goal::GoalAssignments;
use crate::roster::Member;

// ============================================================================
// Priority
// ============================================================================

/// Display tier of a goal. Sort order is declaration order:
/// problems first, confirmations last.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    Critical,
    Major,
    Minor,
    Optimal,
}

// ============================================================================
// Goal Kinds
// ============================================================================

/// Structured shape of one strategic goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoalKind {
    /// A division currently has no leader at all.
    EstablishLeader { division: Division },
    /// The configured primary leader already leads their division.
    LeaderOptimal { member: Member, division: Division },
    /// Someone else holds the leadership the configured primary needs.
    LeaderBlocked {
        blocker: Member,
        member: Member,
        division: Division,
    },
    /// The primary is on the board but in the wrong division.
    MoveToLead { member: Member, division: Division },
    /// The primary is in place and needs rank to take leadership.
    RankUpToLead { member: Member, division: Division },
    /// The primary is absent from the board entirely.
    PlaceToLead { member: Member, division: Division },
    /// A subordinate is absent from the board.
    Place { member: Member, division: Division },
    /// A subordinate is on the board but in the wrong division.
    Move { member: Member, division: Division },
    /// A subordinate is in place but below Captain.
    RankUp { member: Member, division: Division },
    /// Placeholder when nothing else was emitted.
    BoardOptimal,
}

impl GoalKind {
    /// The priority tier this goal shape always carries.
    pub fn priority(&self) -> Priority {
        match self {
            GoalKind::LeaderBlocked { .. } => Priority::Critical,
            GoalKind::EstablishLeader { .. }
            | GoalKind::MoveToLead { .. }
            | GoalKind::RankUpToLead { .. }
            | GoalKind::PlaceToLead { .. } => Priority::Major,
            GoalKind::Place { .. } | GoalKind::Move { .. } | GoalKind::RankUp { .. } => {
                Priority::Minor
            }
            GoalKind::LeaderOptimal { .. } | GoalKind::BoardOptimal => Priority::Optimal,
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalKind::EstablishLeader { division } => {
                write!(f, "Establish a leader for {division}")
            }
            GoalKind::LeaderOptimal { member, division } => {
                write!(f, "{member} is leading {division}.")
            }
            GoalKind::LeaderBlocked {
                blocker,
                member,
                division,
            } => {
                write!(
                    f,
                    "Problem: {blocker} is blocking {member} from leading {division}."
                )
            }
            GoalKind::MoveToLead { member, division } => {
                write!(f, "Move {member} to {division} to become leader")
            }
            GoalKind::RankUpToLead { member, division } => {
                write!(f, "Rank up {member} to become leader of {division}")
            }
            GoalKind::PlaceToLead { member, division } => {
                write!(f, "Place {member} in {division} to become leader")
            }
            GoalKind::Place { member, division } => {
                write!(f, "Place {member} in {division}")
            }
            GoalKind::Move { member, division } => {
                write!(f, "Move {member} to {division}")
            }
            GoalKind::RankUp { member, division } => {
                write!(f, "Rank up {member} in {division}")
            }
            GoalKind::BoardOptimal => {
                write!(f, "No strategy configured or board is optimal.")
            }
        }
    }
}

/// One derived goal: structured kind plus its display tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategicGoal {
    pub kind: GoalKind,
    pub priority: Priority,
}

impl StrategicGoal {
    fn new(kind: GoalKind) -> Self {
        Self {
            priority: kind.priority(),
            kind,
        }
    }

    /// Display text, generated from the structured kind.
    pub fn text(&self) -> String {
        self.kind.to_string()
    }
}

// ============================================================================
// Planner
// ============================================================================

/// Derives the ordered goal list for one tick.
///
/// Pure function: identical `(board, assignments)` inputs always produce
/// the identical ordered list. The final ordering is a stable sort by
/// [`Priority`]; ties keep emission order.
pub fn plan_goals(board: &BoardState, assignments: &GoalAssignments) -> Vec<StrategicGoal> {
    let mut goals = Vec::new();

    // Divisions with nobody credited as leader.
    for division in Division::ACTIVE {
        if board.leader_of(division).is_none() {
            goals.push(StrategicGoal::new(GoalKind::EstablishLeader { division }));
        }
    }

    for division in target_divisions(assignments) {
        let primary = primary_for(assignments, division);
        let current_leader = board.leader_of(division);
        let mut leader_is_optimal = false;

        if let Some(primary) = primary {
            if current_leader == Some(primary) {
                leader_is_optimal = true;
                goals.push(StrategicGoal::new(GoalKind::LeaderOptimal {
                    member: primary,
                    division,
                }));
            } else {
                if let Some(blocker) = current_leader {
                    goals.push(StrategicGoal::new(GoalKind::LeaderBlocked {
                        blocker,
                        member: primary,
                        division,
                    }));
                }
                let corrective = match board.member(primary) {
                    Some(state) if state.division != division => {
                        GoalKind::MoveToLead {
                            member: primary,
                            division,
                        }
                    }
                    Some(_) => GoalKind::RankUpToLead {
                        member: primary,
                        division,
                    },
                    None => GoalKind::PlaceToLead {
                        member: primary,
                        division,
                    },
                };
                goals.push(StrategicGoal::new(corrective));
            }
        }

        for (member, goal) in assignments {
            if goal.division != division || goal.is_primary_leader {
                continue;
            }
            let kind = match board.member(*member) {
                None => GoalKind::Place {
                    member: *member,
                    division,
                },
                Some(state) if state.division != division => GoalKind::Move {
                    member: *member,
                    division,
                },
                Some(state) if state.rank < Rank::Captain && !leader_is_optimal => {
                    GoalKind::RankUp {
                        member: *member,
                        division,
                    }
                }
                Some(_) => continue,
            };
            goals.push(StrategicGoal::new(kind));
        }
    }

    if goals.is_empty() {
        goals.push(StrategicGoal::new(GoalKind::BoardOptimal));
    }

    goals.sort_by_key(|goal| goal.priority);
    goals
}

/// Divisions referenced by any configured goal, in first-seen order.
fn target_divisions(assignments: &GoalAssignments) -> Vec<Division> {
    let mut divisions = Vec::new();
    for goal in assignments.values() {
        if goal.division.is_active() && !divisions.contains(&goal.division) {
            divisions.push(goal.division);
        }
    }
    divisions
}

/// The member configured as primary leader of `division`, if any.
///
/// Nothing prevents two members from both being marked primary for the
/// same division; the first in roster order wins and the rest are treated
/// as unconfigured for that slot.
fn primary_for(assignments: &GoalAssignments, division: Division) -> Option<Member> {
    assignments
        .iter()
        .find(|(_, goal)| goal.division == division && goal.is_primary_leader)
        .map(|(member, _)| *member)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::RawMemberEntry;
    use crate::goal::MemberGoal;

    fn entry(name: &str, rank: &str, job: &str) -> RawMemberEntry {
        RawMemberEntry::new(name, rank, job)
    }

    fn board(entries: &[RawMemberEntry], leaders: &[&str]) -> BoardState {
        let leaders: Vec<String> = leaders.iter().map(|l| l.to_string()).collect();
        BoardState::build(entries, &leaders, &[])
    }

    /// Full board with a leader in every division, so leaderless-division
    /// goals stay out of the way of the case under test.
    fn led_board() -> BoardState {
        board(
            &[
                entry("Leo", "Captain", "Transportation"),
                entry("Hillock", "Captain", "Fortification"),
                entry("Aisling", "Captain", "Research"),
                entry("Rin", "Captain", "Intervention"),
            ],
            &["Leo", "Hillock", "Aisling", "Rin"],
        )
    }

    fn assignments(pairs: &[(Member, &str)]) -> GoalAssignments {
        pairs
            .iter()
            .map(|(member, goal)| (*member, MemberGoal::parse(goal)))
            .collect()
    }

    #[test]
    fn leaderless_division_emits_establish_goal() {
        // Scenario: Research has no leader and no goals are configured.
        let board = board(
            &[
                entry("Leo", "Captain", "Transportation"),
                entry("Hillock", "Captain", "Fortification"),
                entry("Aisling", "Sergeant", "Research"),
                entry("Rin", "Captain", "Intervention"),
            ],
            &["Leo", "Hillock", "Rin"],
        );
        let goals = plan_goals(&board, &GoalAssignments::new());

        assert_eq!(goals.len(), 1);
        assert_eq!(
            goals[0].kind,
            GoalKind::EstablishLeader {
                division: Division::Research
            }
        );
        assert_eq!(goals[0].priority, Priority::Major);
        assert_eq!(goals[0].text(), "Establish a leader for Research");
    }

    #[test]
    fn optimal_leader_emits_confirmation_only() {
        let goals = plan_goals(
            &led_board(),
            &assignments(&[(Member::Aisling, "Research (Leader)")]),
        );

        assert_eq!(goals.len(), 1);
        assert_eq!(
            goals[0].kind,
            GoalKind::LeaderOptimal {
                member: Member::Aisling,
                division: Division::Research
            }
        );
        assert_eq!(goals[0].priority, Priority::Optimal);
        assert_eq!(goals[0].text(), "Aisling is leading Research.");
    }

    #[test]
    fn blocked_leader_emits_problem_and_corrective() {
        // Vorici leads Research while Aisling is configured as its primary.
        let board = board(
            &[
                entry("Leo", "Captain", "Transportation"),
                entry("Hillock", "Captain", "Fortification"),
                entry("Vorici", "Captain", "Research"),
                entry("Rin", "Captain", "Intervention"),
                entry("Aisling", "Lieutenant", "Research"),
            ],
            &["Leo", "Hillock", "Vorici", "Rin"],
        );
        let goals = plan_goals(&board, &assignments(&[(Member::Aisling, "Research (Leader)")]));

        assert_eq!(goals.len(), 2);
        assert_eq!(
            goals[0].kind,
            GoalKind::LeaderBlocked {
                blocker: Member::Vorici,
                member: Member::Aisling,
                division: Division::Research
            }
        );
        assert_eq!(goals[0].priority, Priority::Critical);
        assert_eq!(
            goals[0].text(),
            "Problem: Vorici is blocking Aisling from leading Research."
        );
        assert_eq!(
            goals[1].kind,
            GoalKind::RankUpToLead {
                member: Member::Aisling,
                division: Division::Research
            }
        );
        assert_eq!(goals[1].priority, Priority::Major);
    }

    #[test]
    fn corrective_goal_tracks_primary_board_presence() {
        let config = assignments(&[(Member::Aisling, "Research (Leader)")]);

        // In another division: move.
        let elsewhere = board(
            &[
                entry("Leo", "Captain", "Transportation"),
                entry("Hillock", "Captain", "Fortification"),
                entry("Vorici", "Captain", "Research"),
                entry("Rin", "Captain", "Intervention"),
                entry("Aisling", "Captain", "Fortification"),
            ],
            &["Leo", "Hillock", "Vorici", "Rin"],
        );
        let goals = plan_goals(&elsewhere, &config);
        assert!(goals.iter().any(|g| matches!(
            g.kind,
            GoalKind::MoveToLead {
                member: Member::Aisling,
                division: Division::Research
            }
        )));

        // Absent from the board: place.
        let absent = board(
            &[
                entry("Leo", "Captain", "Transportation"),
                entry("Hillock", "Captain", "Fortification"),
                entry("Vorici", "Captain", "Research"),
                entry("Rin", "Captain", "Intervention"),
            ],
            &["Leo", "Hillock", "Vorici", "Rin"],
        );
        let goals = plan_goals(&absent, &config);
        assert!(goals.iter().any(|g| matches!(
            g.kind,
            GoalKind::PlaceToLead {
                member: Member::Aisling,
                division: Division::Research
            }
        )));
    }

    #[test]
    fn subordinate_goals_cover_place_move_and_rank_up() {
        let board = board(
            &[
                entry("Leo", "Captain", "Transportation"),
                entry("Hillock", "Captain", "Fortification"),
                entry("Aisling", "Captain", "Research"),
                entry("Rin", "Captain", "Intervention"),
                entry("Vorici", "Sergeant", "Research"),
                entry("Guff", "Sergeant", "Transportation"),
            ],
            &["Leo", "Hillock", "Aisling", "Rin"],
        );
        let config = assignments(&[
            (Member::Vorici, "Research"),
            (Member::Guff, "Research"),
            (Member::Tora, "Research"),
        ]);
        let goals = plan_goals(&board, &config);

        // Aisling is not configured, so no optimal-leader suppression applies.
        assert!(goals.iter().any(|g| matches!(
            g.kind,
            GoalKind::RankUp {
                member: Member::Vorici,
                division: Division::Research
            }
        )));
        assert!(goals.iter().any(|g| matches!(
            g.kind,
            GoalKind::Move {
                member: Member::Guff,
                division: Division::Research
            }
        )));
        assert!(goals.iter().any(|g| matches!(
            g.kind,
            GoalKind::Place {
                member: Member::Tora,
                division: Division::Research
            }
        )));
    }

    #[test]
    fn optimal_leader_suppresses_subordinate_rank_up() {
        let board = board(
            &[
                entry("Leo", "Captain", "Transportation"),
                entry("Hillock", "Captain", "Fortification"),
                entry("Aisling", "Captain", "Research"),
                entry("Rin", "Captain", "Intervention"),
                entry("Vorici", "Sergeant", "Research"),
            ],
            &["Leo", "Hillock", "Aisling", "Rin"],
        );
        let config = assignments(&[
            (Member::Aisling, "Research (Leader)"),
            (Member::Vorici, "Research"),
        ]);
        let goals = plan_goals(&board, &config);

        assert!(goals.iter().any(|g| matches!(g.kind, GoalKind::LeaderOptimal { .. })));
        assert!(!goals.iter().any(|g| matches!(g.kind, GoalKind::RankUp { .. })));
    }

    #[test]
    fn captain_subordinate_in_place_emits_nothing() {
        let board = board(
            &[
                entry("Leo", "Captain", "Transportation"),
                entry("Hillock", "Captain", "Fortification"),
                entry("Aisling", "Captain", "Research"),
                entry("Rin", "Captain", "Intervention"),
                entry("Vorici", "Captain", "Research"),
            ],
            &["Leo", "Hillock", "Aisling", "Rin"],
        );
        let goals = plan_goals(&board, &assignments(&[(Member::Vorici, "Research")]));
        assert!(!goals.iter().any(|g| matches!(g.kind, GoalKind::RankUp { .. })));
    }

    #[test]
    fn empty_plan_emits_placeholder() {
        let goals = plan_goals(&led_board(), &GoalAssignments::new());
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].kind, GoalKind::BoardOptimal);
        assert_eq!(goals[0].priority, Priority::Optimal);
    }

    #[test]
    fn priority_ordering_law_holds() {
        let board = board(
            &[
                entry("Vorici", "Captain", "Research"),
                entry("Aisling", "Lieutenant", "Research"),
                entry("Guff", "Sergeant", "Transportation"),
            ],
            &["Vorici"],
        );
        let config = assignments(&[
            (Member::Aisling, "Research (Leader)"),
            (Member::Guff, "Research"),
        ]);
        let goals = plan_goals(&board, &config);

        let priorities: Vec<Priority> = goals.iter().map(|g| g.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);
        assert_eq!(goals.first().unwrap().priority, Priority::Critical);
    }

    #[test]
    fn planning_is_idempotent() {
        let board = board(
            &[
                entry("Vorici", "Captain", "Research"),
                entry("Aisling", "Lieutenant", "Research"),
            ],
            &["Vorici"],
        );
        let config = assignments(&[(Member::Aisling, "Research (Leader)")]);
        assert_eq!(plan_goals(&board, &config), plan_goals(&board, &config));
    }

    #[test]
    fn duplicate_primaries_resolve_to_roster_order() {
        let config = assignments(&[
            (Member::Vorici, "Research (Leader)"),
            (Member::Aisling, "Research (Leader)"),
        ]);
        let goals = plan_goals(&led_board(), &config);

        // Aisling precedes Vorici in roster order and wins the slot.
        assert!(goals.iter().any(|g| matches!(
            g.kind,
            GoalKind::LeaderOptimal {
                member: Member::Aisling,
                ..
            }
        )));
    }
}
