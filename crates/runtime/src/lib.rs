//! Per-tick orchestration of the advisory engine.
//!
//! The hosting collaborator polls the live game once per frame, hands this
//! crate a raw board snapshot (plus the open decision, if any), and renders
//! whatever the returned [`TickReport`] says. The session owns the active
//! strategy profile, goal configuration, and weight table, and drives the
//! pure `advisor-core` pipeline in its required order: board normalization,
//! goal planning, then choice scoring and goal matching.

mod error;
mod report;
mod session;

pub use error::SessionError;
pub use report::{ChoiceReport, DecisionInput, GoalReport, RewardOverlay, TickReport};
pub use session::AdvisorSession;
