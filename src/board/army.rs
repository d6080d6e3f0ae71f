//! Per-side piece census and starting-position validation.

use super::{Board, Color, Piece, SetupError, Variant};

/// Piece counts of one side, recomputed on demand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Army {
    pub pawns: usize,
    pub knights: usize,
    pub bishops: usize,
    pub rooks: usize,
    pub queens: usize,
    pub kings: usize,
}

impl Army {
    #[must_use]
    pub const fn count(&self, piece: Piece) -> usize {
        match piece {
            Piece::Pawn => self.pawns,
            Piece::Knight => self.knights,
            Piece::Bishop => self.bishops,
            Piece::Rook => self.rooks,
            Piece::Queen => self.queens,
            Piece::King => self.kings,
        }
    }

    fn add(&mut self, piece: Piece) {
        let slot = match piece {
            Piece::Pawn => &mut self.pawns,
            Piece::Knight => &mut self.knights,
            Piece::Bishop => &mut self.bishops,
            Piece::Rook => &mut self.rooks,
            Piece::Queen => &mut self.queens,
            Piece::King => &mut self.kings,
        };
        *slot += 1;
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.pawns + self.knights + self.bishops + self.rooks + self.queens + self.kings
    }

    /// A side with neither pawns nor kings has lost.
    #[must_use]
    pub const fn is_eliminated(&self) -> bool {
        self.pawns == 0 && self.kings == 0
    }

    /// Weighted material of the side.
    #[must_use]
    pub fn material(&self) -> i32 {
        Piece::ALL
            .iter()
            .map(|&piece| piece.weight() * self.count(piece) as i32)
            .sum()
    }
}

impl Board {
    /// Census of `color`'s pieces
    #[must_use]
    pub fn army(&self, color: Color) -> Army {
        let mut army = Army::default();
        for (_, piece) in self.pieces_of(color) {
            army.add(piece);
        }
        army
    }

    /// Check that this position can start a game under its variant.
    pub fn validate_setup(&self) -> Result<(), SetupError> {
        for color in Color::BOTH {
            let army = self.army(color);
            match self.variant {
                Variant::Chess if army.kings != 1 => {
                    return Err(SetupError::KingCount {
                        color,
                        found: army.kings,
                    });
                }
                Variant::Draughts if army.total() == 0 => {
                    return Err(SetupError::EmptyArmy { color });
                }
                _ => {}
            }

            for piece in Piece::ALL {
                let found = army.count(piece);
                let limit = self.variant.piece_limit(piece);
                if found > limit {
                    return Err(SetupError::TooManyPieces {
                        color,
                        piece,
                        found,
                        limit,
                    });
                }
            }

            let limit = self.variant.army_limit();
            if army.total() > limit {
                return Err(SetupError::ArmyTooLarge {
                    color,
                    found: army.total(),
                    limit,
                });
            }

            if let Some((square, _)) = self
                .pieces_of(color)
                .find(|&(sq, piece)| Board::would_promote(piece, color, sq))
            {
                return Err(SetupError::PawnOnPromotionRank { square });
            }
        }
        Ok(())
    }

    /// Kings present, piece caps respected, no pawn on its promotion rank.
    #[must_use]
    pub fn is_valid_starting_position(&self) -> bool {
        self.validate_setup().is_ok()
    }
}
