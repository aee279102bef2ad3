//! Simulator configuration read from the environment.
use std::env;
use std::path::PathBuf;

use anyhow::Context;
use summon_content::ConfigLoader;
use summon_core::{RevivePolicy, SecurityLevel, SummonConfig};

/// Where the simulator finds its data, plus quick overrides.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub config_path: Option<PathBuf>,
    pub scenario_path: Option<PathBuf>,
    pub script_path: Option<PathBuf>,
    pub revive_policy: Option<RevivePolicy>,
    pub direct_summon_security: Option<SecurityLevel>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SUMMON_CONFIG` - TOML summoning configuration (default: built-in defaults)
    /// - `SUMMON_SCENARIO` - RON scenario file (required)
    /// - `SUMMON_SCRIPT` - RON script file (required)
    /// - `SUMMON_REVIVE_POLICY` - `never`, `when_controller_safe` or `always`
    /// - `SUMMON_DIRECT_SECURITY` - lowest security level pulled directly
    pub fn from_env() -> Self {
        Self {
            config_path: env::var_os("SUMMON_CONFIG").map(PathBuf::from),
            scenario_path: env::var_os("SUMMON_SCENARIO").map(PathBuf::from),
            script_path: env::var_os("SUMMON_SCRIPT").map(PathBuf::from),
            revive_policy: read_env("SUMMON_REVIVE_POLICY"),
            direct_summon_security: read_env("SUMMON_DIRECT_SECURITY"),
        }
    }

    /// Loads the TOML config, if any, and applies the overrides on top.
    pub fn summon_config(&self) -> anyhow::Result<SummonConfig> {
        let mut config = match &self.config_path {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SummonConfig::default(),
        };

        if let Some(policy) = self.revive_policy {
            config = config.with_revive_policy(policy);
        }
        if let Some(level) = self.direct_summon_security {
            config = config.with_direct_summon_security(level);
        }

        Ok(config)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
