use serde::Deserialize;

use chequer_engine::board::{find_best_move, SearchConfig, WIN_SCORE};
use chequer_engine::{Board, Color, EngineController, Move, Variant};

#[derive(Deserialize)]
struct PuzzleSet {
    puzzles: Vec<Puzzle>,
}

#[derive(Deserialize)]
struct Puzzle {
    kind: String,
    variant: String,
    layout: String,
    side: String,
    best: String,
}

impl Puzzle {
    fn setup(&self) -> (Board, Color) {
        let variant = Variant::from_name(&self.variant).expect("unknown variant");
        let board = Board::from_layout(variant, &self.layout).expect("invalid layout");
        let side = match self.side.as_str() {
            "white" => Color::White,
            "black" => Color::Black,
            other => panic!("unknown side {other}"),
        };
        (board, side)
    }
}

fn load() -> PuzzleSet {
    let data = include_str!("data/puzzles.json");
    serde_json::from_str(data).expect("invalid puzzles.json")
}

#[test]
fn puzzle_suite() {
    for puzzle in load().puzzles {
        let (mut board, side) = puzzle.setup();
        assert!(board.is_valid_starting_position(), "{}", puzzle.layout);
        let expected: Move = puzzle.best.parse().expect("invalid move");

        for depth in 1..=3 {
            let result = find_best_move(&mut board, side, &SearchConfig::fixed(depth))
                .unwrap()
                .unwrap_or_else(|| panic!("{} has no move", puzzle.layout));
            assert_eq!(
                result.best_move, expected,
                "{} {} at depth {depth}",
                puzzle.kind, puzzle.layout
            );
            assert_eq!(result.score, WIN_SCORE);
        }
    }
}

#[test]
fn puzzle_solutions_end_the_game() {
    for puzzle in load().puzzles {
        let (board, side) = puzzle.setup();
        let mut game = EngineController::with_position(board, side).unwrap();
        let status = game.play(puzzle.best.parse().unwrap()).unwrap();
        assert_eq!(
            status,
            chequer_engine::GameStatus::Won(side),
            "{}",
            puzzle.layout
        );
    }
}
