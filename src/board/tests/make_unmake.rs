//! Game step apply/undo correctness.

use rand::prelude::*;

use super::{board, mv, random_board, sq};
use crate::board::{Board, Color, EngineError, Move, Piece, Square, Variant};

#[test]
fn test_make_unmake_every_start_move() {
    for variant in [Variant::Chess, Variant::Draughts] {
        let mut b = Board::starting_position(variant);
        let original = b.clone();
        for color in Color::BOTH {
            for m in b.legal_moves(color).unwrap() {
                let step = b.make_move(&m).unwrap();
                assert_ne!(b, original);
                b.unmake_move(step);
                assert_eq!(b, original, "{variant} {m} did not restore the board");
            }
        }
    }
}

#[test]
fn test_random_walk_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for variant in [Variant::Chess, Variant::Draughts] {
        let mut b = Board::starting_position(variant);
        let original = b.clone();
        let mut steps = Vec::new();
        let mut color = Color::White;
        for _ in 0..40 {
            let moves = b.legal_moves(color).unwrap();
            let Some(m) = moves.as_slice().choose(&mut rng).copied() else {
                break;
            };
            steps.push(b.make_move(&m).unwrap());
            color = color.opponent();
        }
        while let Some(step) = steps.pop() {
            b.unmake_move(step);
        }
        assert_eq!(b, original);
    }
}

#[test]
fn test_random_positions_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let variant = if rng.gen_bool(0.5) {
            Variant::Chess
        } else {
            Variant::Draughts
        };
        let mut b = random_board(&mut rng, variant);
        let original = b.clone();
        for color in Color::BOTH {
            for m in b.legal_moves(color).unwrap() {
                let step = b.make_move(&m).unwrap();
                b.unmake_move(step);
                assert_eq!(b, original);
            }
        }
    }
}

#[test]
fn test_quiet_step() {
    let b = Board::new();
    let step = b.create_game_step(&mv("g1f3")).unwrap();
    assert_eq!(step.start(), sq("g1"));
    assert_eq!(step.end(), sq("f3"));
    assert_eq!(step.mover(), Color::White);
    assert_eq!(step.piece(), Piece::Knight);
    assert_eq!(step.promotion(), None);
    assert!(!step.is_capture());
    assert_eq!(step.as_move(), mv("g1f3"));
}

#[test]
fn test_chess_capture_step() {
    let mut b = board(Variant::Chess, "4k3/8/8/3p4/4P3/8/8/4K3");
    let step = b.make_move(&mv("e4d5")).unwrap();
    assert_eq!(step.captured_squares().collect::<Vec<_>>(), vec![sq("d5")]);
    assert_eq!(step.captured_pieces().collect::<Vec<_>>(), vec![Piece::Pawn]);
    assert_eq!(b.piece_at(sq("d5")), Some((Color::White, Piece::Pawn)));
    assert!(b.is_vacant(sq("e4")));
    assert_eq!(b.army(Color::Black).pawns, 0);

    b.unmake_move(step);
    assert_eq!(b.piece_at(sq("d5")), Some((Color::Black, Piece::Pawn)));
    assert_eq!(b.piece_at(sq("e4")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_flying_king_capture_step() {
    let mut b = Board::empty(Variant::Draughts);
    b.place(sq("a1"), Color::White, Piece::King).unwrap();
    b.place(sq("d4"), Color::Black, Piece::Pawn).unwrap();
    let original = b.clone();

    let step = b.make_move(&mv("a1g7")).unwrap();
    assert_eq!(step.captured_squares().collect::<Vec<_>>(), vec![sq("d4")]);
    assert!(b.is_vacant(sq("d4")));
    assert!(b.is_occupied_by_king(Color::White, sq("g7")));

    b.unmake_move(step);
    assert_eq!(b, original);
}

#[test]
fn test_man_jump_step() {
    let mut b = Board::empty(Variant::Draughts);
    b.place(sq("c3"), Color::White, Piece::Pawn).unwrap();
    b.place(sq("d4"), Color::Black, Piece::Pawn).unwrap();
    assert!(b.is_capture(Color::White, &mv("c3e5")));

    b.apply_move(&mv("c3e5")).unwrap();
    assert!(b.is_vacant(sq("c3")));
    assert!(b.is_vacant(sq("d4")));
    assert!(b.is_occupied_by(Color::White, sq("e5")));
}

#[test]
fn test_promotion_undo_restores_pawn() {
    let mut b = board(Variant::Chess, "8/P7/8/8/8/8/8/K1k5");
    let original = b.clone();
    let step = b.make_move(&mv("a7a8q")).unwrap();
    assert_eq!(step.piece(), Piece::Pawn);
    assert_eq!(step.promotion(), Some(Piece::Queen));
    assert_eq!(b.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));

    b.unmake_move(step);
    assert_eq!(b, original);
    assert_eq!(b.piece_at(sq("a7")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_crowning_step() {
    let mut b = Board::empty(Variant::Draughts);
    b.place(sq("c7"), Color::White, Piece::Pawn).unwrap();
    b.apply_move(&mv("c7d8k")).unwrap();
    assert!(b.is_occupied_by_king(Color::White, sq("d8")));
}

#[test]
fn test_step_from_empty_square() {
    let b = Board::new();
    assert_eq!(
        b.create_game_step(&mv("e4e5")),
        Err(EngineError::EmptySquare { square: sq("e4") })
    );
}

#[test]
fn test_step_onto_unplayable_square() {
    let mut b = Board::starting_position(Variant::Draughts);
    let before = b.clone();
    // c4 is a light square
    assert_eq!(
        b.apply_move(&Move::new(sq("c3"), sq("c4"))),
        Err(EngineError::UnplayableSquare {
            square: sq("c4"),
            variant: Variant::Draughts,
        })
    );
    assert_eq!(b, before);
    assert_eq!(b.piece_at(sq("c4")), None);
}

#[test]
fn test_step_off_the_grid_is_rejected() {
    let mut b = Board::new();
    let before = b.clone();
    assert_eq!(
        b.apply_move(&Move::new(Square(0, 1), Square(0, 8))),
        Err(EngineError::UnplayableSquare {
            square: Square(0, 8),
            variant: Variant::Chess,
        })
    );
    assert!(matches!(
        b.make_move(&Move::new(Square(9, 9), Square(0, 2))),
        Err(EngineError::UnplayableSquare { .. })
    ));
    assert_eq!(b, before);
}

#[test]
fn test_step_from_unplayable_square() {
    let b = Board::starting_position(Variant::Draughts);
    assert_eq!(
        b.create_game_step(&Move::new(sq("b1"), sq("a2"))),
        Err(EngineError::UnplayableSquare {
            square: sq("b1"),
            variant: Variant::Draughts,
        })
    );
}
