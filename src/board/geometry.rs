//! Side-effect-free queries over board squares.
//!
//! Every occupancy predicate first asks [`Board::is_on_board`], so squares
//! outside the grid or of the wrong parity always answer "no".

use super::{Board, Color, Piece, Square};

impl Board {
    /// Bounds check and parity check in one.
    #[inline]
    #[must_use]
    pub fn is_on_board(&self, sq: Square) -> bool {
        sq.0 < 8 && sq.1 < 8 && self.variant.is_playable(sq)
    }

    #[inline]
    #[must_use]
    pub fn is_vacant(&self, sq: Square) -> bool {
        self.is_on_board(sq) && self.piece_at(sq).is_none()
    }

    /// Square holds a piece of `color`
    #[inline]
    #[must_use]
    pub fn is_occupied_by(&self, color: Color, sq: Square) -> bool {
        self.is_on_board(sq) && self.color_on(sq) == Some(color)
    }

    /// Square holds a piece of the side opposing `color`
    #[inline]
    #[must_use]
    pub fn is_occupied_by_enemy(&self, color: Color, sq: Square) -> bool {
        self.is_occupied_by(color.opponent(), sq)
    }

    /// Square holds `piece` owned by `color`
    #[inline]
    #[must_use]
    pub fn is_occupied_by_piece(&self, color: Color, piece: Piece, sq: Square) -> bool {
        self.is_on_board(sq) && self.piece_at(sq) == Some((color, piece))
    }

    #[inline]
    #[must_use]
    pub fn is_occupied_by_king(&self, color: Color, sq: Square) -> bool {
        self.is_occupied_by_piece(color, Piece::King, sq)
    }

    /// True iff a pawn of `color` landing on `dest` reaches its far rank.
    #[inline]
    #[must_use]
    pub const fn would_promote(piece: Piece, color: Color, dest: Square) -> bool {
        matches!(piece, Piece::Pawn) && dest.1 == color.promotion_rank()
    }

    /// First king of `color` in row-major order.
    ///
    /// Chess positions hold exactly one king per side once they pass
    /// [`Board::validate_setup`]; draughts positions may have none.
    #[must_use]
    pub fn king_position(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }
}
