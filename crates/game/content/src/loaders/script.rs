//! Simulation script loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::ScriptStep;

/// Loader for simulation scripts from RON files.
///
/// RON format: `Vec<ScriptStep>`
pub struct ScriptLoader;

impl ScriptLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ScriptStep>> {
        let content = read_file(path)?;
        ron::from_str(&content).map_err(|e| anyhow::anyhow!("Failed to parse script RON: {}", e))
    }
}
