//! Common error infrastructure for summon-core.
//!
//! This module provides shared types and traits used across all error types in summon-core.
//! Domain-specific errors (e.g., `PlacementError`, `SummonError`) are defined in their
//! respective modules alongside the actions they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each action has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Narration Is Separate**: Whether a failure is told to the controller is
//!   decided by the action, never by the error type

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Temporary conditions that may succeed on a later decision cycle
/// - **Validation**: The request does not apply (wrong target, wrong object)
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: The host failed to provide a required collaborator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry later or with another mechanism.
    ///
    /// Examples: no meeting stone nearby, hearthstone on cooldown, no room to land
    Recoverable,

    /// Validation error - the request should not be retried unchanged.
    ///
    /// Examples: controller targets someone else, object is not a ritual
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: transit flag raced between check and set
    Internal,

    /// Fatal error - cannot continue without host changes.
    ///
    /// Examples: missing required oracle
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug or host misconfiguration.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all summon-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
