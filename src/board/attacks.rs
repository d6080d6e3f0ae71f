//! Check detection.

use super::attack_tables::{king_targets, knight_targets, ray, DIAGONAL, ORTHOGONAL};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Is a king of `color` standing on `king_sq` attacked by the other side?
    ///
    /// `king_sq` is passed in rather than looked up so that move generation can
    /// test a king's destination before the king is actually there. A square
    /// that is not on the board is never attacked.
    #[must_use]
    pub fn is_king_under_check(&self, color: Color, king_sq: Square) -> bool {
        if !self.is_on_board(king_sq) {
            return false;
        }
        self.pawn_threat(color, king_sq)
            || self.ray_threat(color, king_sq, DIAGONAL, Piece::attacks_diagonally)
            || self.ray_threat(color, king_sq, ORTHOGONAL, Piece::attacks_straight)
            || self.knight_threat(color, king_sq)
            || self.king_threat(color, king_sq)
    }

    /// Is `color`'s king currently in check? A side without a king never is.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_position(color)
            .is_some_and(|king_sq| self.is_king_under_check(color, king_sq))
    }

    fn pawn_threat(&self, color: Color, king_sq: Square) -> bool {
        let enemy = color.opponent();
        [-1, 1].into_iter().any(|dx| {
            king_sq
                .offset(dx, color.forward())
                .is_some_and(|sq| self.is_occupied_by_piece(enemy, Piece::Pawn, sq))
        })
    }

    /// Walk each ray until the first non-vacant square and test its occupant.
    fn ray_threat(
        &self,
        color: Color,
        king_sq: Square,
        dirs: std::ops::Range<usize>,
        threatens: fn(Piece) -> bool,
    ) -> bool {
        dirs.into_iter().any(|dir| {
            ray(king_sq, dir)
                .iter()
                .copied()
                .find(|&sq| !self.is_vacant(sq))
                .and_then(|sq| self.piece_at(sq))
                .is_some_and(|(owner, piece)| owner != color && threatens(piece))
        })
    }

    fn knight_threat(&self, color: Color, king_sq: Square) -> bool {
        knight_targets(king_sq)
            .iter()
            .any(|&sq| self.is_occupied_by_piece(color.opponent(), Piece::Knight, sq))
    }

    fn king_threat(&self, color: Color, king_sq: Square) -> bool {
        king_targets(king_sq)
            .iter()
            .any(|&sq| self.is_occupied_by_king(color.opponent(), sq))
    }
}
