//! State management errors.
//!
//! Errors raised while the host populates the world container.

use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Errors that occur while registering entities in [`WorldState`](crate::state::WorldState).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// An actor or object with the same id is already registered.
    #[error("entity {0} is already registered")]
    DuplicateEntity(EntityId),
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StateError::DuplicateEntity(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StateError::DuplicateEntity(_) => "STATE_DUPLICATE_ENTITY",
        }
    }
}
