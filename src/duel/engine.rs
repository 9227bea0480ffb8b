//! Seed-driven duel resolution
//!
//! One engine value owns one ChaCha8 stream, and a duel is a pure
//! function of the two pieces and that stream. Draw order is part of the
//! contract: initiative for `a` then `b`, attacker-atk then defender-def
//! per strike, tiebreak for `a` then `b`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{Piece, PieceId};
use crate::duel::constants::{DEFENSE_DIVISOR, JITTER_FACTOR, MAX_ROUNDS, MIN_DAMAGE};

/// Fixed summary attached to every duel outcome
pub const DUEL_SUMMARY: &str = "Prototype duel: 3 rounds plus tiebreak.";

/// Result of a resolved duel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelOutcome {
    pub winner_id: PieceId,
    pub details: String,
}

impl DuelOutcome {
    pub fn new(winner_id: PieceId) -> Self {
        Self {
            winner_id,
            details: DUEL_SUMMARY.to_string(),
        }
    }
}

/// Bounded-round duel resolver bound to one seeded random stream
///
/// Construct one engine per duel request. A shared engine would
/// interleave draws across concurrent duels and lose reproducibility.
pub struct DuelEngine {
    seed: u64,
    rng: ChaCha8Rng,
}

impl DuelEngine {
    /// Engine seeded for reproducible runs; `None` draws a fresh seed
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The concrete seed this engine runs on, for replays
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Jittered roll: base +/- 10%, rounded to nearest, never below 0
    fn roll(&mut self, base: i32) -> i32 {
        let jitter = base as f64 * JITTER_FACTOR;
        let value = base as f64 + self.rng.gen_range(-jitter..=jitter);
        (value.round() as i64).max(0) as i32
    }

    /// Damage of one strike: jittered atk minus half the jittered def
    ///
    /// Both rolls are fresh every strike, never cached across exchanges.
    fn strike(&mut self, attacker: &Piece, defender: &Piece) -> i32 {
        let atk = self.roll(attacker.atk);
        let def = self.roll(defender.def);
        (atk - def / DEFENSE_DIVISOR).max(MIN_DAMAGE)
    }

    /// Resolve a duel between `a` and `b`, returning the winner's id
    ///
    /// Initiative is rolled once and holds for every exchange of the
    /// duel; ties on initiative and on the tiebreak both favor `a`. The
    /// caller must reject kings before constructing the engine - the
    /// duel itself is total and never fails.
    pub fn duel(&mut self, a: &Piece, b: &Piece) -> PieceId {
        let a_initiative = self.roll(a.spd);
        let b_initiative = self.roll(b.spd);
        let (first, second) = if a_initiative >= b_initiative {
            (a, b)
        } else {
            (b, a)
        };
        tracing::debug!(
            seed = self.seed,
            first = %first.id,
            a_initiative,
            b_initiative,
            "initiative rolled"
        );

        // Working copies: the callers' pieces stay untouched
        let mut first_hp = first.hp;
        let mut second_hp = second.hp;
        for round in 1..=MAX_ROUNDS {
            let damage = self.strike(first, second);
            second_hp -= damage;
            tracing::debug!(round, attacker = %first.id, damage, remaining = second_hp, "strike");
            if second_hp <= 0 {
                return first.id.clone();
            }

            let damage = self.strike(second, first);
            first_hp -= damage;
            tracing::debug!(round, attacker = %second.id, damage, remaining = first_hp, "strike");
            if first_hp <= 0 {
                return second.id.clone();
            }
        }

        // Both still standing: one jittered roll over the combined
        // attributes decides it.
        let a_score = self.roll(a.atk + a.def + a.spd);
        let b_score = self.roll(b.atk + b.def + b.spd);
        tracing::debug!(a_score, b_score, "tiebreak");
        if a_score >= b_score {
            a.id.clone()
        } else {
            b.id.clone()
        }
    }
}
