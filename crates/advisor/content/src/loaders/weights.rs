//! Score weight configuration loader.

use std::collections::BTreeMap;
use std::path::Path;

use advisor_core::strategy::{ScoreWeights, WeightKind};
use serde::Deserialize;

use crate::loaders::{read_file, LoadResult};

/// On-disk format: a `[weights]` table keyed by weight name.
#[derive(Debug, Default, Deserialize)]
struct WeightsFile {
    #[serde(default)]
    weights: BTreeMap<String, i32>,
}

/// Loader for the global score weight table from TOML files.
pub struct WeightsLoader;

impl WeightsLoader {
    /// Load score weights from a TOML file.
    ///
    /// Unknown weight names are skipped; weights absent from the file keep
    /// their built-in defaults.
    pub fn load(path: &Path) -> LoadResult<ScoreWeights> {
        let content = read_file(path)?;
        Self::from_toml(&content)
    }

    /// Decode score weights from TOML text.
    pub fn from_toml(content: &str) -> LoadResult<ScoreWeights> {
        let file: WeightsFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weights TOML: {}", e))?;

        let mut weights = ScoreWeights::new();
        for (name, value) in file.weights {
            if let Ok(kind) = name.parse::<WeightKind>() {
                weights.set(kind, value);
            }
        }
        Ok(weights)
    }
}
