use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, EngineError, Piece, Square, Variant};

/// Content of one square.
pub type Cell = Option<(Color, Piece)>;

/// An 8x8 board together with the rule family it is played under.
///
/// Only squares accepted by [`Variant::is_playable`] ever hold a piece; every
/// public way of placing a piece checks this.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    /// Indexed `[y][x]`
    pub(crate) cells: [[Cell; 8]; 8],
    pub(crate) variant: Variant,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard chess starting position.
    #[must_use]
    pub fn new() -> Self {
        Board::starting_position(Variant::Chess)
    }

    /// Board with no pieces.
    #[must_use]
    pub const fn empty(variant: Variant) -> Self {
        Board {
            cells: [[None; 8]; 8],
            variant,
        }
    }

    /// Standard starting position of the given variant.
    #[must_use]
    pub fn starting_position(variant: Variant) -> Self {
        let mut board = Board::empty(variant);
        match variant {
            Variant::Chess => {
                let back_rank = [
                    Piece::Rook,
                    Piece::Knight,
                    Piece::Bishop,
                    Piece::Queen,
                    Piece::King,
                    Piece::Bishop,
                    Piece::Knight,
                    Piece::Rook,
                ];
                for (x, &piece) in back_rank.iter().enumerate() {
                    board.set_piece(Square(x, 0), Color::White, piece);
                    board.set_piece(Square(x, 7), Color::Black, piece);
                    board.set_piece(Square(x, 1), Color::White, Piece::Pawn);
                    board.set_piece(Square(x, 6), Color::Black, Piece::Pawn);
                }
            }
            Variant::Draughts => {
                for sq in Square::all().filter(|sq| sq.is_dark()) {
                    match sq.y() {
                        0..=2 => board.set_piece(sq, Color::White, Piece::Pawn),
                        5..=7 => board.set_piece(sq, Color::Black, Piece::Pawn),
                        _ => {}
                    }
                }
            }
        }
        board
    }

    /// Rule family of this board
    #[inline]
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Piece and owner on a square, `None` when vacant or outside the grid
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.cells.get(sq.1).and_then(|row| row.get(sq.0)).copied().flatten()
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    /// Place a piece, validating the square and piece kind against the variant.
    pub fn place(&mut self, sq: Square, color: Color, piece: Piece) -> Result<(), EngineError> {
        if !self.is_on_board(sq) {
            return Err(EngineError::UnplayableSquare {
                square: sq,
                variant: self.variant,
            });
        }
        if !self.variant.uses_piece(piece) {
            return Err(EngineError::UnsupportedPiece {
                piece,
                variant: self.variant,
            });
        }
        self.set_piece(sq, color, piece);
        Ok(())
    }

    /// Remove whatever stands on a square, returning it.
    pub fn clear(&mut self, sq: Square) -> Cell {
        let previous = self.piece_at(sq);
        if previous.is_some() {
            self.remove_piece(sq);
        }
        previous
    }

    /// Unchecked write used by stepping code; `sq` must be on the grid.
    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.cells[sq.1][sq.0] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.1][sq.0] = cell;
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, sq: Square) {
        self.cells[sq.1][sq.0] = None;
    }

    /// Occupied squares of one side, row by row from a1.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..8).rev() {
            write!(f, "{} |", y + 1)?;
            for x in 0..8 {
                let sq = Square(x, y);
                let c = match self.piece_at(sq) {
                    Some((color, piece)) => piece.to_layout_char(color),
                    None if self.variant.is_playable(sq) => '.',
                    None => ' ',
                };
                write!(f, " {c}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}
