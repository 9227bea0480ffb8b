//! Duel resolution - bounded 1v1 combat over a seeded random stream
//!
//! At most 3 rounds plus one tiebreak, O(1) rolls each: runtime is
//! constant, so there are no timeouts and no cancellation. Each duel
//! request gets its own engine instance.

pub mod constants;
pub mod engine;

pub use constants::*;
pub use engine::{DuelEngine, DuelOutcome, DUEL_SUMMARY};
