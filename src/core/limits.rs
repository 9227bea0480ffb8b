//! Request-layer range limits - all boundary values in one place
//!
//! The core itself only re-checks non-negativity and the king rule;
//! everything here is enforced by the collaborator layer (the runner)
//! before a piece ever reaches validation or a duel.

use std::ops::RangeInclusive;

/// Starting health assigned to a piece when the request omits hp
pub const DEFAULT_HP: i32 = 100;

/// Points pool a loadout may declare
pub const POOL_RANGE: RangeInclusive<i32> = 0..=500;

/// Health a request piece may carry
pub const HP_RANGE: RangeInclusive<i32> = 1..=500;

/// Any single combat attribute (atk, def, spd) on a request piece
pub const ATTRIBUTE_RANGE: RangeInclusive<i32> = 0..=200;
