//! Config oracle implementation for runtime.

use summon_core::{SummonConfig, env::ConfigOracle};

/// Runtime implementation of ConfigOracle that wraps SummonConfig
pub struct ConfigOracleImpl {
    config: SummonConfig,
}

impl ConfigOracleImpl {
    pub fn new(config: SummonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SummonConfig {
        self.config
    }
}

impl ConfigOracle for ConfigOracleImpl {
    fn summon_config(&self) -> SummonConfig {
        self.config
    }
}
