//! Deterministic goal-planning and choice-scoring rules for the syndicate board.
//!
//! `advisor-core` defines the canonical advisory rules (board normalization,
//! strategy activation, goal planning, choice scoring, goal matching) and
//! exposes pure APIs that can be reused by both the runtime and offline tools.
//! Every computation is a synchronous function over an immutable-for-the-tick
//! snapshot; acquisition of that snapshot and all rendering stay in
//! collaborator crates.
pub mod board;
pub mod decision;
pub mod goal;
pub mod matcher;
pub mod planner;
pub mod roster;
pub mod scoring;
pub mod strategy;

pub use board::{BoardSnapshot, BoardState, Division, MemberState, Rank, RawMemberEntry};
pub use decision::{ActionCode, DecisionContext, OfferedChoice, MAX_CHOICES};
pub use goal::{GoalAssignments, MemberGoal};
pub use matcher::goal_completes;
pub use planner::{plan_goals, GoalKind, Priority, StrategicGoal};
pub use roster::Member;
pub use scoring::{score_choice, PRISON_CAPACITY, SCORE_CALLER_ERROR};
pub use strategy::{
    AffinityRules, Catalog, ScoreWeights, StrategyDefinition, WeightKind, WeightOverrides,
};
