//! Legal move generation.
//!
//! Pieces first produce pseudo-legal moves in row-major square order; the
//! variant's legality rule then filters them. Chess drops every move that
//! leaves the mover's king attacked, draughts keeps only captures whenever one
//! exists.

mod draughts;
mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{DIAGONAL, ORTHOGONAL};
use super::{Board, Color, EngineError, Move, MoveList, Piece, Square, Variant};

impl Board {
    /// All legal moves of `color`, ordered by origin square (a1, b1, ..., h8).
    ///
    /// The board is used as scratch space for the self-check test and is
    /// restored before returning.
    pub fn legal_moves(&mut self, color: Color) -> Result<MoveList, EngineError> {
        let mut moves = MoveList::new();
        for sq in Square::all() {
            if let Some((owner, piece)) = self.piece_at(sq) {
                if owner == color {
                    self.generate_piece_moves(sq, color, piece, &mut moves)?;
                }
            }
        }
        self.retain_legal(color, &mut moves);
        Ok(moves)
    }

    /// Legal moves of the piece on `sq`; empty for vacant or unplayable squares.
    pub fn legal_moves_for_square(&mut self, sq: Square) -> Result<MoveList, EngineError> {
        let Some((color, piece)) = self.piece_at(sq).filter(|_| self.is_on_board(sq)) else {
            return Ok(MoveList::new());
        };
        match self.variant {
            Variant::Chess => {
                let mut moves = MoveList::new();
                self.generate_piece_moves(sq, color, piece, &mut moves)?;
                self.retain_legal(color, &mut moves);
                Ok(moves)
            }
            // Forced captures depend on the whole side, not just this piece
            Variant::Draughts => {
                let mut moves = self.legal_moves(color)?;
                moves.retain(|mv| mv.from == sq);
                Ok(moves)
            }
        }
    }

    /// Is `mv` structurally equal to one of `color`'s legal moves?
    pub fn is_legal_move(&mut self, color: Color, mv: &Move) -> Result<bool, EngineError> {
        if self.color_on(mv.from) != Some(color) {
            return Ok(false);
        }
        Ok(self.legal_moves_for_square(mv.from)?.contains(mv))
    }

    /// Does `color` have no legal move at all?
    pub fn is_stuck(&mut self, color: Color) -> Result<bool, EngineError> {
        Ok(self.legal_moves(color)?.is_empty())
    }

    fn generate_piece_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut MoveList,
    ) -> Result<(), EngineError> {
        match (self.variant, piece) {
            (Variant::Chess, Piece::Pawn) => self.generate_pawn_moves(from, color, moves),
            (Variant::Chess, Piece::Knight) => self.generate_knight_moves(from, color, moves),
            (Variant::Chess, Piece::Bishop) => {
                self.generate_slider_moves(from, color, DIAGONAL, moves)
            }
            (Variant::Chess, Piece::Rook) => {
                self.generate_slider_moves(from, color, ORTHOGONAL, moves)
            }
            (Variant::Chess, Piece::Queen) => {
                self.generate_slider_moves(from, color, ORTHOGONAL.start..DIAGONAL.end, moves)
            }
            (Variant::Chess, Piece::King) => self.generate_king_moves(from, color, moves),
            (Variant::Draughts, Piece::Pawn) => self.generate_man_moves(from, color, moves),
            (Variant::Draughts, Piece::King) => self.generate_flying_king_moves(from, color, moves),
            // Rejected at placement time
            (Variant::Draughts, _) => Ok(()),
        }
    }

    /// Push a pawn-kind advance, expanding it into every promotion choice when
    /// it lands on the far rank.
    fn push_advance(
        &self,
        from: Square,
        to: Square,
        color: Color,
        moves: &mut MoveList,
    ) -> Result<(), EngineError> {
        if Board::would_promote(Piece::Pawn, color, to) {
            for &piece in self.variant.promotion_choices() {
                moves.try_push(Move::promoting(from, to, piece))?;
            }
            Ok(())
        } else {
            moves.try_push(Move::new(from, to))
        }
    }

    fn retain_legal(&mut self, color: Color, moves: &mut MoveList) {
        if self.variant.has_check_rule() {
            let king_sq = self.king_position(color);
            moves.retain(|mv| self.keeps_king_safe(color, mv, king_sq));
        } else if moves.iter().any(|mv| self.is_capture(color, mv)) {
            moves.retain(|mv| self.is_capture(color, mv));
        }
    }

    /// Speculatively play `mv` (single ply, no captures recorded), test the
    /// king, and put both squares back.
    fn keeps_king_safe(&mut self, color: Color, mv: &Move, king_sq: Option<Square>) -> bool {
        let moving = self.piece_at(mv.from);
        let target = self.piece_at(mv.to);
        self.set_cell(mv.to, moving);
        self.remove_piece(mv.from);

        // A moving king is tested on its destination
        let king_sq = match moving {
            Some((_, Piece::King)) => Some(mv.to),
            _ => king_sq,
        };
        let safe = king_sq.map_or(true, |sq| !self.is_king_under_check(color, sq));

        self.set_cell(mv.from, moving);
        self.set_cell(mv.to, target);
        safe
    }
}
