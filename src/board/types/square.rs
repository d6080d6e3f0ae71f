//! Square type and coordinate helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board as (x, y): x is the column (file a = 0),
/// y is the row (rank 1 = 0).
///
/// Whether a square can hold a piece depends on the board's variant
/// (see [`Board::is_on_board`]).
///
/// [`Board::is_on_board`]: crate::board::Board::is_on_board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (x, y)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(x: usize, y: usize) -> Option<Self> {
        if x < 8 && y < 8 {
            Some(Square(x, y))
        } else {
            None
        }
    }

    /// Column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn x(self) -> usize {
        self.0
    }

    /// Row (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn y(self) -> usize {
        self.1
    }

    /// Index in row-major order (a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.1 * 8 + self.0
    }

    /// Create a square from a row-major index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx % 8, idx / 8)
    }

    /// The square displaced by (dx, dy), if it stays within the 8x8 grid.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Square> {
        let x = self.0 as isize + dx;
        let y = self.1 as isize + dy;
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Square(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Dark squares of a checkered board: (x + y) even, a1 included.
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.0 + self.1) % 2 == 0
    }

    /// Iterate all 64 squares row by row, starting from a1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.0 as u8 + b'a') as char, self.1 + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        if x >= 8 {
            return Err(SquareError::FileOutOfBounds { file: x });
        }
        if y >= 8 {
            return Err(SquareError::RankOutOfBounds { rank: y });
        }
        Ok(Square(x, y))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let x = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let y = match rank {
            '1'..='8' => rank as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(x, y))
    }
}
