//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (e.g. [`crate::env::OracleError`]) live next to the
//! code that raises them and implement [`BattleError`] so callers can decide
//! how loudly to report a failure without matching on every variant.
//!
//! # Design Principles
//!
//! - **Never abort a turn**: the decision engine always produces an action, so
//!   errors are classified and reported rather than propagated into the turn
//!   executor
//! - **Severity Classification**: errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: an expected outcome the caller handles, such as a
///   party with nobody left to send out
/// - **Internal**: inconsistent state that indicates a bug in a caller
/// - **Fatal**: nothing sensible can be chosen for this request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller moves on without an answer.
    ///
    /// Examples: every party member has fainted, so the battle ends
    Recoverable,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: a set move id missing from the move registry, encored move
    /// absent from the moveset
    Internal,

    /// Fatal error - the request cannot be answered.
    ///
    /// Examples: empty candidate list reaching the selector, no active
    /// combatant to decide for
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a logic error in a caller.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
