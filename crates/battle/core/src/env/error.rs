//! Oracle access errors.

use crate::error::{BattleError, ErrorSeverity};
use crate::items::{ItemCategory, ItemId};
use crate::moves::MoveId;

/// Errors that occur when resolving static battle data.
///
/// A set move or item id that the registry does not know means the battle
/// state and the content disagree; the decision engine logs these and
/// substitutes a safe default.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Move descriptor was not found by id.
    #[error("move {0} not found")]
    UnknownMove(MoveId),

    /// Item definition was not found in its category registry.
    #[error("{category} item {id} not found")]
    UnknownItem { category: ItemCategory, id: ItemId },
}

impl BattleError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            OracleError::UnknownMove(_) | OracleError::UnknownItem { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::UnknownMove(_) => "ORACLE_UNKNOWN_MOVE",
            OracleError::UnknownItem { .. } => "ORACLE_UNKNOWN_ITEM",
        }
    }
}
