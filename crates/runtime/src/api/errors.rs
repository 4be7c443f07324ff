//! Unified error types surfaced by the runtime API.
//!
//! Decisions themselves never fail outward: every documented edge case has a
//! fallback action. These errors report the contract violations behind those
//! fallbacks and the few requests that cannot be answered at all.
use battle_core::{BattleError, ErrorSeverity, OracleError, ParticipantId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("weighted selection requested over an empty candidate list")]
    EmptyCandidates,

    #[error("{participant} has no combatant able to battle")]
    NoUsableCombatant { participant: ParticipantId },

    #[error("{participant} has no active combatant at party index {index}")]
    NoActiveCombatant {
        participant: ParticipantId,
        index: usize,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl BattleError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::NoUsableCombatant { .. } => ErrorSeverity::Recoverable,
            RuntimeError::EmptyCandidates | RuntimeError::NoActiveCombatant { .. } => {
                ErrorSeverity::Fatal
            }
            RuntimeError::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::EmptyCandidates => "RUNTIME_EMPTY_CANDIDATES",
            RuntimeError::NoUsableCombatant { .. } => "RUNTIME_NO_USABLE_COMBATANT",
            RuntimeError::NoActiveCombatant { .. } => "RUNTIME_NO_ACTIVE_COMBATANT",
            RuntimeError::Oracle(err) => err.error_code(),
        }
    }
}
