//! Loadout assembly and validation
//!
//! A loadout is a team of pieces plus a declared point budget. It can be
//! built in an invalid state; validation is a read-only single scan that
//! reports the first rule violation it meets.

use serde::{Deserialize, Serialize};

use crate::core::types::Piece;
use crate::loadout::validation::ValidationError;

/// A team of pieces plus the point budget for discretionary spending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loadout {
    pub points_pool: i32,
    pub pieces: Vec<Piece>,
}

impl Loadout {
    pub fn new(points_pool: i32, pieces: Vec<Piece>) -> Self {
        Self {
            points_pool,
            pieces,
        }
    }

    /// Total attribute points the pieces spend
    pub fn spent_points(&self) -> i64 {
        self.pieces.iter().map(|p| p.spent_points()).sum()
    }

    /// Check the loadout against the role and budget rules
    ///
    /// One linear scan accumulating the king count and spent points. A
    /// king with nonzero attributes fails from inside the scan, before
    /// the king-count closing check can run; the nonzero test also fires
    /// ahead of the per-piece negative check. After the scan: king count
    /// must be exactly 1, then spent must fit the pool.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut spent: i64 = 0;
        let mut kings = 0usize;

        for piece in &self.pieces {
            if piece.is_king() {
                kings += 1;
                if piece.atk != 0 || piece.def != 0 || piece.spd != 0 {
                    return Err(ValidationError::KingAttributesNonZero {
                        id: piece.id.clone(),
                    });
                }
            }
            if piece.atk < 0 || piece.def < 0 || piece.spd < 0 {
                return Err(ValidationError::NegativeAttribute {
                    id: piece.id.clone(),
                });
            }
            spent += piece.spent_points();
        }

        if kings != 1 {
            return Err(ValidationError::InvalidKingCount { count: kings });
        }
        if spent > self.points_pool as i64 {
            return Err(ValidationError::BudgetExceeded {
                spent,
                pool: self.points_pool as i64,
            });
        }
        Ok(())
    }
}
