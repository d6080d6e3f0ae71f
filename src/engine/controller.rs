//! Game controller: a board, the side to move and the history of steps.

use log::debug;

use super::options::{EngineOptions, OptionError};
use crate::board::search::{self, SearchConfig};
use crate::board::{
    Board, Color, EngineError, GameStep, Move, MoveList, SetupError, Square, Variant,
};

/// State of the game for the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check but can still move
    Check,
    /// The given side has won
    Won(Color),
    Drawn,
}

pub struct EngineController {
    board: Board,
    side_to_move: Color,
    history: Vec<GameStep>,
    options: EngineOptions,
}

impl EngineController {
    /// Standard starting position of `variant`, White to move.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        EngineController {
            board: Board::starting_position(variant),
            side_to_move: Color::White,
            history: Vec::new(),
            options: EngineOptions::default(),
        }
    }

    /// Start from a custom position after checking it is a valid setup.
    pub fn with_position(board: Board, side_to_move: Color) -> Result<Self, SetupError> {
        board.validate_setup()?;
        Ok(EngineController {
            board,
            side_to_move,
            history: Vec::new(),
            options: EngineOptions::default(),
        })
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub const fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut EngineOptions {
        &mut self.options
    }

    /// Steps played so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[GameStep] {
        &self.history
    }

    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        self.options.apply_setoption(name, value)
    }

    pub fn legal_moves(&mut self) -> Result<MoveList, EngineError> {
        self.board.legal_moves(self.side_to_move)
    }

    /// Legal moves from `sq`; empty unless it holds a piece of the side to move.
    pub fn legal_moves_from(&mut self, sq: Square) -> Result<MoveList, EngineError> {
        if self.board.color_on(sq) != Some(self.side_to_move) {
            return Ok(MoveList::new());
        }
        self.board.legal_moves_for_square(sq)
    }

    /// Play `mv` for the side to move.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, EngineError> {
        if !self.board.is_legal_move(self.side_to_move, &mv)? {
            return Err(EngineError::IllegalMove { mv });
        }
        self.history.try_reserve(1)?;
        let step = self.board.make_move(&mv)?;
        self.history.push(step);
        debug!("{} plays {mv}", self.side_to_move);
        self.side_to_move = self.side_to_move.opponent();
        self.status()
    }

    /// Let the engine choose and play a move. `Ok(None)` if the side to move
    /// has none.
    pub fn engine_move(&mut self) -> Result<Option<Move>, EngineError> {
        let config = self.options.search.clone();
        let Some(result) = search::find_best_move(&mut self.board, self.side_to_move, &config)?
        else {
            return Ok(None);
        };
        self.play(result.best_move)?;
        Ok(Some(result.best_move))
    }

    /// Every move of the side to move tied at the best search value.
    pub fn best_moves(&mut self) -> Result<MoveList, EngineError> {
        let depth = self.resolved_depth()?;
        search::best_moves(&mut self.board, self.side_to_move, depth)
    }

    /// Search value of playing `mv` for the side to move.
    pub fn evaluate(&mut self, mv: Move) -> Result<i32, EngineError> {
        if !self.board.is_legal_move(self.side_to_move, &mv)? {
            return Err(EngineError::IllegalMove { mv });
        }
        let depth = self.resolved_depth()?;
        search::evaluate_move(&mut self.board, self.side_to_move, &mv, depth)
    }

    /// Undo the last move, returning it.
    pub fn take_back(&mut self) -> Option<Move> {
        let step = self.history.pop()?;
        let mv = step.as_move();
        self.board.unmake_move(step);
        self.side_to_move = self.side_to_move.opponent();
        Some(mv)
    }

    pub fn status(&mut self) -> Result<GameStatus, EngineError> {
        let side = self.side_to_move;
        let in_check = self.board.variant().has_check_rule() && self.board.is_in_check(side);
        if self.board.is_stuck(side)? {
            if self.board.variant().has_check_rule() && !in_check {
                return Ok(GameStatus::Drawn);
            }
            return Ok(GameStatus::Won(side.opponent()));
        }
        Ok(if in_check {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        })
    }

    fn resolved_depth(&mut self) -> Result<u32, EngineError> {
        let config: &SearchConfig = &self.options.search;
        search::resolve_depth(&mut self.board, self.side_to_move, config)
    }
}
