//! Core board types.
//!
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - (x, y) board coordinate
//! - `Move` and `MoveList` - move representation
//! - `Variant` - chess or draughts rule family

mod moves;
mod piece;
mod square;
mod variant;

pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;
pub use variant::Variant;
