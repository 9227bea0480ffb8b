//! Validation failure taxonomy
//!
//! Failures are data, never faults: the caller can always re-prompt the
//! player with the rendered message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::PieceId;

/// Fixed message reported for a loadout that passes every rule
pub const VALID_LOADOUT_MESSAGE: &str = "Loadout is valid.";

/// A rule violation found while scanning a loadout
///
/// Exactly one violation is ever reported; the first in scan order wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Attributes cannot be negative (piece {id}).")]
    NegativeAttribute { id: PieceId },

    #[error("The king must have 0 points in every attribute (piece {id}).")]
    KingAttributesNonZero { id: PieceId },

    #[error("A loadout must field exactly 1 king (found {count}).")]
    InvalidKingCount { count: usize },

    #[error("Spent points exceed the pool ({spent} > {pool}).")]
    BudgetExceeded { spent: i64, pool: i64 },
}

/// Validity flag plus message, the shape the request layer forwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub ok: bool,
    pub message: String,
}

impl From<Result<(), ValidationError>> for ValidationReport {
    fn from(outcome: Result<(), ValidationError>) -> Self {
        match outcome {
            Ok(()) => Self {
                ok: true,
                message: VALID_LOADOUT_MESSAGE.to_string(),
            },
            Err(err) => Self {
                ok: false,
                message: err.to_string(),
            },
        }
    }
}
