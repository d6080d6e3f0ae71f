//! Rule families sharing the board model.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PROMOTION_PIECES};
use super::square::Square;

/// Rule family played on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Variant {
    /// Every square is playable; full chess piece set with check rules.
    #[default]
    Chess,
    /// Only dark squares ((x + y) even) are playable; men and flying kings.
    Draughts,
}

impl Variant {
    /// Look a variant up by name (`chess`, `draughts` or `checkers`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Variant> {
        match name.trim().to_ascii_lowercase().as_str() {
            "chess" => Some(Variant::Chess),
            "draughts" | "checkers" => Some(Variant::Draughts),
            _ => None,
        }
    }

    /// Parity half of the on-board test.
    #[inline]
    #[must_use]
    pub const fn is_playable(self, sq: Square) -> bool {
        match self {
            Variant::Chess => true,
            Variant::Draughts => sq.is_dark(),
        }
    }

    /// Whether a piece kind takes part in this variant.
    #[inline]
    #[must_use]
    pub const fn uses_piece(self, piece: Piece) -> bool {
        match self {
            Variant::Chess => true,
            Variant::Draughts => matches!(piece, Piece::Pawn | Piece::King),
        }
    }

    /// Whether moves exposing the mover's king are illegal.
    #[inline]
    #[must_use]
    pub const fn has_check_rule(self) -> bool {
        matches!(self, Variant::Chess)
    }

    /// Pieces a pawn may turn into on its promotion rank, in generation order.
    #[must_use]
    pub const fn promotion_choices(self) -> &'static [Piece] {
        match self {
            Variant::Chess => &PROMOTION_PIECES,
            Variant::Draughts => &[Piece::King],
        }
    }

    /// Most pieces of a kind one side may hold in a starting position.
    #[must_use]
    pub const fn piece_limit(self, piece: Piece) -> usize {
        match (self, piece) {
            (Variant::Chess, Piece::Pawn) => 8,
            (Variant::Chess, Piece::Knight | Piece::Bishop | Piece::Rook) => 2,
            (Variant::Chess, Piece::Queen | Piece::King) => 1,
            (Variant::Draughts, Piece::Pawn | Piece::King) => 20,
            (Variant::Draughts, _) => 0,
        }
    }

    /// Most pieces one side may hold in total in a starting position.
    #[must_use]
    pub const fn army_limit(self) -> usize {
        match self {
            Variant::Chess => 16,
            Variant::Draughts => 20,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Chess => write!(f, "chess"),
            Variant::Draughts => write!(f, "draughts"),
        }
    }
}
