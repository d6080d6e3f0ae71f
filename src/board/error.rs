//! Error types for board operations.

use std::collections::TryReserveError;
use std::fmt;

use super::{Color, Move, Piece, Square, Variant};

/// Error type for move generation, stepping and search.
///
/// `Allocation` is fatal to the running query; every other variant reports
/// input that failed validation and leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A move list or capture record could not grow
    Allocation,
    /// A move starts from a square without a piece
    EmptySquare { square: Square },
    /// The move is not among the legal moves of the side to move
    IllegalMove { mv: Move },
    /// The square cannot hold a piece under the board's variant
    UnplayableSquare { square: Square, variant: Variant },
    /// The piece kind does not take part in the board's variant
    UnsupportedPiece { piece: Piece, variant: Variant },
}

impl EngineError {
    /// Returns true for errors that must abort the whole session.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, EngineError::Allocation)
    }
}

impl From<TryReserveError> for EngineError {
    fn from(_: TryReserveError) -> Self {
        EngineError::Allocation
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Allocation => write!(f, "Out of memory while building moves"),
            EngineError::EmptySquare { square } => {
                write!(f, "No piece on square {square}")
            }
            EngineError::IllegalMove { mv } => write!(f, "Illegal move '{mv}'"),
            EngineError::UnplayableSquare { square, variant } => {
                write!(f, "Square {square} is not playable in {variant}")
            }
            EngineError::UnsupportedPiece { piece, variant } => {
                write!(f, "A {piece} cannot be used in {variant}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Error type for board layout parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout must describe exactly eight ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in layout string
    InvalidPiece { char: char },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Too few files in a rank
    TooFewFiles { rank: usize, files: usize },
    /// Piece placed where the variant does not allow it
    Placement(EngineError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRankCount { found } => {
                write!(f, "Layout must have 8 ranks, found {found}")
            }
            LayoutError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in layout")
            }
            LayoutError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            LayoutError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
            LayoutError::Placement(err) => write!(f, "Invalid placement: {err}"),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<EngineError> for LayoutError {
    fn from(err: EngineError) -> Self {
        LayoutError::Placement(err)
    }
}

/// Reasons a position cannot be used to start a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A chess side needs exactly one king
    KingCount { color: Color, found: usize },
    /// A draughts side has no pieces at all
    EmptyArmy { color: Color },
    /// More pieces of a kind than the variant allows
    TooManyPieces {
        color: Color,
        piece: Piece,
        found: usize,
        limit: usize,
    },
    /// More pieces in total than the variant allows
    ArmyTooLarge { color: Color, found: usize, limit: usize },
    /// A pawn stands on the rank it would promote on
    PawnOnPromotionRank { square: Square },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            SetupError::EmptyArmy { color } => write!(f, "{color} has no pieces"),
            SetupError::TooManyPieces {
                color,
                piece,
                found,
                limit,
            } => write!(f, "{color} has {found} of {piece}, at most {limit} allowed"),
            SetupError::ArmyTooLarge {
                color,
                found,
                limit,
            } => write!(f, "{color} has {found} pieces, at most {limit} allowed"),
            SetupError::PawnOnPromotionRank { square } => {
                write!(f, "Pawn on {square} stands on its promotion rank")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
