//! Runtime wrappers around static scenario content.
//!
//! These implementations expose `summon-core` oracle traits and bundle them
//! into an [`OracleManager`] so the runtime can build [`summon_core::Env`]
//! snapshots on demand. The data is immutable at runtime; dynamic state lives
//! in [`summon_core::WorldState`].
mod abilities;
mod config;
mod map;

use std::sync::Arc;

use summon_content::Scenario;
use summon_core::{Env, GameEnv, SummonConfig};

pub use abilities::AbilityOracleImpl;
pub use config::ConfigOracleImpl;
pub use map::MapOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) map: Arc<MapOracleImpl>,
    pub(crate) abilities: Arc<AbilityOracleImpl>,
    pub(crate) config: Arc<ConfigOracleImpl>,
}

impl OracleManager {
    pub fn new(
        map: Arc<MapOracleImpl>,
        abilities: Arc<AbilityOracleImpl>,
        config: Arc<ConfigOracleImpl>,
    ) -> Self {
        Self {
            map,
            abilities,
            config,
        }
    }

    /// Builds every oracle from a scenario's static data.
    pub fn from_scenario(scenario: &Scenario, config: SummonConfig) -> Self {
        Self::new(
            Arc::new(MapOracleImpl::new(scenario.obstacles.clone())),
            Arc::new(AbilityOracleImpl::new(scenario.abilities.iter().copied())),
            Arc::new(ConfigOracleImpl::new(config)),
        )
    }

    /// Converts oracle manager into GameEnv for summon-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(
            self.map.as_ref(),
            self.abilities.as_ref(),
            self.config.as_ref(),
        )
        .as_game_env()
    }

    pub fn config(&self) -> SummonConfig {
        self.config.config()
    }
}
