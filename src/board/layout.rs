//! Piece-placement text, in the style of a FEN board field.
//!
//! Ranks are listed from 8 down to 1 and separated by `/`; digits count empty
//! squares; uppercase letters are White. Draughts uses `P` for a man and `K`
//! for a king.

use super::{Board, Color, LayoutError, Piece, Square, Variant};

impl Board {
    /// Parse a placement field for the given variant.
    pub fn from_layout(variant: Variant, layout: &str) -> Result<Board, LayoutError> {
        let ranks: Vec<&str> = layout.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty(variant);
        for (i, rank_text) in ranks.iter().enumerate() {
            let y = 7 - i;
            let mut x = 0;
            for c in rank_text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    x += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if x >= 8 {
                        return Err(LayoutError::TooManyFiles {
                            rank: y + 1,
                            files: x + 1,
                        });
                    }
                    board.place(Square(x, y), color, piece)?;
                    x += 1;
                }
            }
            match x {
                8 => {}
                files if files > 8 => {
                    return Err(LayoutError::TooManyFiles { rank: y + 1, files });
                }
                files => return Err(LayoutError::TooFewFiles { rank: y + 1, files }),
            }
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_layout`].
    #[must_use]
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(72);
        for y in (0..8).rev() {
            let mut empty = 0;
            for x in 0..8 {
                match self.piece_at(Square(x, y)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_layout_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if y > 0 {
                out.push('/');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::EngineError;

    const CHESS_START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
    const DRAUGHTS_START: &str = "1p1p1p1p/p1p1p1p1/1p1p1p1p/8/8/P1P1P1P1/1P1P1P1P/P1P1P1P1";

    #[test]
    fn test_chess_start_layout() {
        let board = Board::from_layout(Variant::Chess, CHESS_START).unwrap();
        assert_eq!(board, Board::starting_position(Variant::Chess));
        assert_eq!(board.to_layout(), CHESS_START);
    }

    #[test]
    fn test_draughts_start_layout() {
        let board = Board::from_layout(Variant::Draughts, DRAUGHTS_START).unwrap();
        assert_eq!(board, Board::starting_position(Variant::Draughts));
        assert_eq!(board.to_layout(), DRAUGHTS_START);
    }

    #[test]
    fn test_wrong_rank_count() {
        let err = Board::from_layout(Variant::Chess, "8/8/8").unwrap_err();
        assert_eq!(err, LayoutError::WrongRankCount { found: 3 });
    }

    #[test]
    fn test_invalid_piece() {
        let err = Board::from_layout(Variant::Chess, "8/8/8/8/8/8/8/7x").unwrap_err();
        assert_eq!(err, LayoutError::InvalidPiece { char: 'x' });
    }

    #[test]
    fn test_rank_too_long_and_too_short() {
        let err = Board::from_layout(Variant::Chess, "9/8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(err, LayoutError::TooManyFiles { rank: 8, files: 9 });

        let err = Board::from_layout(Variant::Chess, "7/8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(err, LayoutError::TooFewFiles { rank: 8, files: 7 });
    }

    #[test]
    fn test_draughts_rejects_light_square() {
        // b1 is a light square
        let err = Board::from_layout(Variant::Draughts, "8/8/8/8/8/8/8/1P6").unwrap_err();
        assert_eq!(
            err,
            LayoutError::Placement(EngineError::UnplayableSquare {
                square: Square(1, 0),
                variant: Variant::Draughts,
            })
        );
    }

    #[test]
    fn test_draughts_rejects_chess_pieces() {
        let err = Board::from_layout(Variant::Draughts, "8/8/8/8/8/8/8/Q7").unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Placement(EngineError::UnsupportedPiece {
                piece: Piece::Queen,
                ..
            })
        ));
    }
}
