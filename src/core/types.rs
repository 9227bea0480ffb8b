//! Core type definitions shared by the loadout and duel modules

use serde::{Deserialize, Serialize};

use crate::core::limits::DEFAULT_HP;

/// Caller-supplied identifier for a piece
///
/// Uniqueness is the caller's concern; the core never checks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub String);

impl PieceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed set of piece roles
///
/// Serialized lowercase, so an unknown role string is a deserialization
/// error at the request boundary and the core never sees an open string.
/// Only the king carries special rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Role {
    pub fn is_king(&self) -> bool {
        matches!(self, Role::King)
    }
}

/// A combat piece with a role and four numeric attributes
///
/// Pieces are value objects. A duel works on private copies of hp, so a
/// caller's piece is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub role: Role,
    #[serde(default = "default_hp")]
    pub hp: i32,
    #[serde(default)]
    pub atk: i32,
    #[serde(default)]
    pub def: i32,
    #[serde(default)]
    pub spd: i32,
}

fn default_hp() -> i32 {
    DEFAULT_HP
}

impl Piece {
    /// New piece at default health with no attribute points assigned
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: PieceId::new(id),
            role,
            hp: DEFAULT_HP,
            atk: 0,
            def: 0,
            spd: 0,
        }
    }

    pub fn is_king(&self) -> bool {
        self.role.is_king()
    }

    /// Attribute points this piece spends against a loadout pool
    pub fn spent_points(&self) -> i64 {
        self.atk as i64 + self.def as i64 + self.spd as i64
    }
}
