//! Host runtime for the summoning rules.
//!
//! This crate plays the part of the game server around `summon-core`: it owns
//! the [`WorldState`](summon_core::WorldState), serves the core oracle traits
//! from scenario data, and routes bot commands and world events to the right
//! action.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the dispatcher and builder
//! - [`api`] exposes the commands, events and errors clients interact with
//! - [`oracle`] provides the oracle adapters built from scenario content
pub mod api;
pub mod oracle;
pub mod runtime;

pub use api::{BotCommand, Result, RuntimeError, WorldEvent};
pub use oracle::{AbilityOracleImpl, ConfigOracleImpl, MapOracleImpl, OracleManager};
pub use runtime::{BotRuntime, RuntimeBuilder};
