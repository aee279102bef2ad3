//! Configuration oracle for exposing summoning configuration to the actions.

use crate::config::SummonConfig;

/// Provides access to runtime configuration values.
pub trait ConfigOracle: Send + Sync {
    /// Returns the summoning settings in effect for this invocation.
    fn summon_config(&self) -> SummonConfig;
}
