//! Fluent builder for constructing positions.
//!
//! # Example
//! ```
//! use chequer_engine::board::{BoardBuilder, Color, Piece, Square, Variant};
//!
//! let board = BoardBuilder::new(Variant::Chess)
//!     .piece(Square(4, 0), Color::White, Piece::King)
//!     .piece(Square(4, 7), Color::Black, Piece::King)
//!     .piece(Square(0, 1), Color::White, Piece::Pawn)
//!     .build()
//!     .unwrap();
//! assert!(board.is_valid_starting_position());
//! ```

use super::{Board, Color, EngineError, Piece, Square, Variant};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    variant: Variant,
    pieces: Vec<(Square, Color, Piece)>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        BoardBuilder {
            variant,
            pieces: Vec::new(),
        }
    }

    /// Create a builder starting from the variant's standard position.
    #[must_use]
    pub fn starting_position(variant: Variant) -> Self {
        let board = Board::starting_position(variant);
        let pieces = Color::BOTH
            .iter()
            .flat_map(|&color| {
                board
                    .pieces_of(color)
                    .map(move |(sq, piece)| (sq, color, piece))
                    .collect::<Vec<_>>()
            })
            .collect();
        BoardBuilder { variant, pieces }
    }

    /// Place a piece on the board, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board, rejecting squares or pieces the variant does not allow.
    pub fn build(self) -> Result<Board, EngineError> {
        let mut board = Board::empty(self.variant);
        for (sq, color, piece) in self.pieces {
            board.place(sq, color, piece)?;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_starting_position_matches_board() {
        for variant in [Variant::Chess, Variant::Draughts] {
            let built = BoardBuilder::starting_position(variant).build().unwrap();
            assert_eq!(built, Board::starting_position(variant));
        }
    }

    #[test]
    fn test_builder_replaces_piece() {
        let board = BoardBuilder::new(Variant::Chess)
            .piece(Square(3, 3), Color::White, Piece::Rook)
            .piece(Square(3, 3), Color::Black, Piece::Queen)
            .build()
            .unwrap();
        assert_eq!(
            board.piece_at(Square(3, 3)),
            Some((Color::Black, Piece::Queen))
        );
    }

    #[test]
    fn test_builder_clear() {
        let board = BoardBuilder::starting_position(Variant::Chess)
            .clear(Square(4, 1))
            .build()
            .unwrap();
        assert!(board.is_vacant(Square(4, 1)));
    }

    #[test]
    fn test_builder_rejects_light_square_in_draughts() {
        let err = BoardBuilder::new(Variant::Draughts)
            .piece(Square(0, 1), Color::White, Piece::Pawn)
            .build()
            .unwrap_err();
        assert!(matches!(err, EngineError::UnplayableSquare { .. }));
    }
}
