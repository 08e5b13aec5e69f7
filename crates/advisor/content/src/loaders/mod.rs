//! Configuration loaders for externally persisted settings.
//!
//! Persistence itself belongs to the hosting collaborator; these loaders
//! only decode the TOML formats into engine types. String values inside a
//! well-formed file follow the same lenient rules as every other
//! collaborator input (unknown names are skipped, malformed goal strings
//! read as "no goal"), while unreadable or syntactically broken files are
//! reported as errors.

pub mod goals;
pub mod weights;

pub use goals::GoalConfigLoader;
pub use weights::WeightsLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
