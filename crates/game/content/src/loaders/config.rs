//! Summoning configuration loader.

use std::path::Path;

use summon_core::SummonConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for summoning configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<SummonConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<SummonConfig> {
        let config: SummonConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(config.sight_distance.is_finite() && config.sight_distance > 0.0) {
            anyhow::bail!("sight_distance must be positive, got {}", config.sight_distance);
        }
        if !(config.follow_distance.is_finite() && config.follow_distance > 0.0) {
            anyhow::bail!(
                "follow_distance must be positive, got {}",
                config.follow_distance
            );
        }

        Ok(config)
    }
}
