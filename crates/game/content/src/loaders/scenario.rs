//! Scenario loader.
//!
//! Loads actors, objects, obstacles and ability definitions from RON files.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    ///
    /// The file is also checked for id collisions so that a scenario that
    /// loads can always be turned into a world.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        scenario
            .build_world()
            .map_err(|e| anyhow::anyhow!("Invalid scenario: {}", e))?;

        Ok(scenario)
    }
}
