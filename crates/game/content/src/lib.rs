//! Data-driven scenario definitions and loaders.
//!
//! This crate describes the worlds the summoning rules run against and loads
//! them from RON/TOML data files:
//! - Summoning configuration (data-driven via TOML)
//! - Scenarios: actors, objects, obstacles, ability definitions (RON)
//! - Scripts: ordered summon requests and world events (RON)
//!
//! Content is consumed by runtime oracles and by the simulator; obstacles and
//! ability definitions never appear in world state.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{Obstacle, Scenario, ScriptStep};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, ScenarioLoader, ScriptLoader};
