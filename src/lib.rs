pub mod board;
pub mod engine;

pub use board::{Board, Color, EngineError, GameStep, Move, Piece, Square, Variant};
pub use engine::{EngineController, EngineOptions, GameStatus};
