//! Custom goal assignment loader.

use std::collections::BTreeMap;
use std::path::Path;

use advisor_core::goal::{GoalAssignments, MemberGoal};
use advisor_core::roster::Member;
use serde::Deserialize;

use crate::loaders::{read_file, LoadResult};

/// On-disk format: a `[goals]` table keyed by member display name.
#[derive(Debug, Default, Deserialize)]
struct GoalConfigFile {
    #[serde(default)]
    goals: BTreeMap<String, String>,
}

/// Loader for hand-maintained ("Custom") goal assignments from TOML files.
pub struct GoalConfigLoader;

impl GoalConfigLoader {
    /// Load per-member goal assignments from a TOML file.
    ///
    /// Names outside the roster are skipped; goal strings parse with the
    /// usual leniency (malformed reads as "no goal").
    pub fn load(path: &Path) -> LoadResult<GoalAssignments> {
        let content = read_file(path)?;
        Self::from_toml(&content)
    }

    /// Decode goal assignments from TOML text.
    pub fn from_toml(content: &str) -> LoadResult<GoalAssignments> {
        let file: GoalConfigFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse goals TOML: {}", e))?;

        let mut assignments = GoalAssignments::new();
        for (name, goal) in file.goals {
            if let Some(member) = Member::parse(&name) {
                assignments.insert(member, MemberGoal::parse(&goal));
            }
        }
        Ok(assignments)
    }
}
