//! Board representation and game rules.
//!
//! A plain 8x8 grid shared by two rule families: chess on all 64 squares and
//! draughts on the dark squares. Legal moves, reversible stepping and the
//! alpha-beta search all work on the same `Board`.
//!
//! # Example
//! ```
//! use chequer_engine::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Color::White).unwrap();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod army;
mod attack_tables;
mod attacks;
mod builder;
mod error;
mod eval;
mod geometry;
mod layout;
mod make_unmake;
mod movegen;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use army::Army;
pub use builder::BoardBuilder;
pub use error::{EngineError, LayoutError, MoveParseError, SetupError, SquareError};
pub use eval::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
pub use make_unmake::GameStep;
pub use state::{Board, Cell};
pub use types::{Color, Move, MoveList, Piece, Square, Variant};

pub use search::{
    best_moves, evaluate_move, find_best_move, minimax, resolve_depth, SearchConfig, SearchDepth,
    SearchResult,
};
