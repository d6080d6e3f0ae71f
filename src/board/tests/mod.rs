//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `geometry.rs` - Square predicates, army census, setup validation
//! - `movegen.rs` - Legal move generation for both variants
//! - `make_unmake.rs` - Game step apply/undo correctness
//! - `search.rs` - Alpha-beta search and root move selection
//! - `proptest.rs` - Property-based tests

mod make_unmake;

use rand::prelude::*;

use crate::board::{Board, Color, Move, Piece, Square, Variant};

pub(super) fn board(variant: Variant, layout: &str) -> Board {
    Board::from_layout(variant, layout).expect("valid test layout")
}

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

pub(super) fn mv(text: &str) -> Move {
    text.parse().expect("valid move")
}

/// Small random position: each side gets a king (chess) or at least one piece
/// (draughts) plus a handful of extras, all on playable squares, with neither
/// king in check.
pub(super) fn random_board(rng: &mut StdRng, variant: Variant) -> Board {
    loop {
        let mut board = Board::empty(variant);
        let mut free: Vec<Square> = Square::all().filter(|&s| board.is_on_board(s)).collect();
        free.shuffle(rng);

        let extras: &[Piece] = match variant {
            Variant::Chess => &[Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen],
            Variant::Draughts => &[Piece::Pawn, Piece::Pawn, Piece::King],
        };
        for color in Color::BOTH {
            if variant == Variant::Chess {
                let king_sq = free.pop().expect("free square");
                board.place(king_sq, color, Piece::King).expect("playable");
            }
            for _ in 0..rng.gen_range(1..=3) {
                let piece = *extras.choose(rng).expect("non-empty");
                let target = free.pop().expect("free square");
                if !Board::would_promote(piece, color, target) {
                    board.place(target, color, piece).expect("playable");
                }
            }
        }

        let quiet = Color::BOTH.iter().all(|&color| !board.is_in_check(color));
        if board.is_valid_starting_position() && quiet {
            return board;
        }
    }
}
