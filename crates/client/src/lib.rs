//! Scripted simulator for the summoning rules.
//!
//! Loads a scenario and a script, replays the script against a
//! [`summon_runtime::BotRuntime`], and renders what the bot said.
pub mod config;
pub mod simulation;

pub use config::ClientConfig;
pub use simulation::{Simulation, StepOutcome};
