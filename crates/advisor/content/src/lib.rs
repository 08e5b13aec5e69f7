//! Static advisory content and configuration loaders.
//!
//! This crate houses the data that never changes at runtime (the strategy
//! profile catalog and the per-member reward table) and provides loaders
//! for user configuration kept in TOML files (score weights, custom goal
//! assignments). Content is consumed by the runtime session and never
//! appears in board state.

pub mod rewards;
pub mod strategies;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use rewards::{reward_for, RewardInfo, RewardTier};
pub use strategies::{catalog, STRATEGIES};

#[cfg(feature = "loaders")]
pub use loaders::{GoalConfigLoader, WeightsLoader};
