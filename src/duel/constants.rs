//! Duel engine constants - all tunable values in one place

/// Uniform jitter applied to every roll, as a fraction of the base value
pub const JITTER_FACTOR: f64 = 0.10;

/// Full rounds fought before the duel falls through to the tiebreak
pub const MAX_ROUNDS: u32 = 3;

/// Damage per strike never drops below this, whatever the defense rolls
pub const MIN_DAMAGE: i32 = 1;

/// Divisor turning a defense roll into mitigated damage (integer floor)
pub const DEFENSE_DIVISOR: i32 = 2;
