//! Loadout validation - role and budget rules for a team of pieces
//!
//! Stateless and pure: a loadout can be constructed in an invalid state,
//! and `validate` only reads it. The request layer turns the result into
//! a `ValidationReport` (ok + message) for the player.

pub mod roster;
pub mod validation;

pub use roster::Loadout;
pub use validation::{ValidationError, ValidationReport, VALID_LOADOUT_MESSAGE};
