//! Unified error types surfaced by the runtime API.
//!
//! Wraps action failures and world setup errors so clients can bubble them up
//! with consistent context.
use summon_core::{ErrorSeverity, GameError, RitualJoinError, StateError, SummonError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("summon failed")]
    Summon(#[source] SummonError),

    #[error("ritual join refused")]
    RitualJoin(#[source] RitualJoinError),

    #[error("failed to build world state")]
    State(#[from] StateError),

    #[error("runtime requires a scenario before building")]
    MissingScenario,
}

impl RuntimeError {
    /// Severity of the underlying game error, if any.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Summon(error) => error.severity(),
            RuntimeError::RitualJoin(error) => error.severity(),
            RuntimeError::State(error) => error.severity(),
            RuntimeError::MissingScenario => ErrorSeverity::Fatal,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Summon(error) => error.error_code(),
            RuntimeError::RitualJoin(error) => error.error_code(),
            RuntimeError::State(error) => error.error_code(),
            RuntimeError::MissingScenario => "RUNTIME_MISSING_SCENARIO",
        }
    }
}
