//! Reversible board edits.
//!
//! A [`Move`] only names endpoints. Before it is played it is turned into a
//! [`GameStep`] that also records every piece the move destroys, so that
//! [`Board::undo_step`] restores the board exactly.

use super::{Board, Color, EngineError, Move, Piece, Square};

/// The concrete board effect of one move on one position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStep {
    pub(crate) start: Square,
    pub(crate) end: Square,
    pub(crate) mover: Color,
    pub(crate) piece: Piece,
    pub(crate) promotion: Option<Piece>,
    /// Captured squares and occupants, in path order
    pub(crate) captures: Vec<(Square, Piece)>,
}

impl GameStep {
    #[must_use]
    pub const fn start(&self) -> Square {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Square {
        self.end
    }

    #[must_use]
    pub const fn mover(&self) -> Color {
        self.mover
    }

    /// Piece kind before any promotion
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[must_use]
    pub const fn promotion(&self) -> Option<Piece> {
        self.promotion
    }

    /// Squares emptied by this step other than its start, in path order.
    pub fn captured_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.captures.iter().map(|&(sq, _)| sq)
    }

    /// Kinds of the captured pieces, matching [`GameStep::captured_squares`].
    pub fn captured_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.captures.iter().map(|&(_, piece)| piece)
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    /// The move this step was built from
    #[must_use]
    pub const fn as_move(&self) -> Move {
        Move {
            from: self.start,
            to: self.end,
            promotion: self.promotion,
        }
    }
}

/// Squares after `from` up to and including `to` when both lie on one rank,
/// file or diagonal; otherwise just `to` (knight jumps).
fn path(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let dx = to.0 as isize - from.0 as isize;
    let dy = to.1 as isize - from.1 as isize;
    let straight = dx == 0 || dy == 0 || dx.abs() == dy.abs();
    let (step_x, step_y, len) = if straight {
        (dx.signum(), dy.signum(), dx.abs().max(dy.abs()))
    } else {
        (dx, dy, 1)
    };
    (1..=len).filter_map(move |i| from.offset(step_x * i, step_y * i))
}

impl Board {
    /// Does `mv`, played by `color`, remove at least one enemy piece?
    #[must_use]
    pub fn is_capture(&self, color: Color, mv: &Move) -> bool {
        path(mv.from, mv.to).any(|sq| self.is_occupied_by_enemy(color, sq))
    }

    /// Diff `mv` against the current position.
    ///
    /// Walks the straight line from start to end and records every enemy piece
    /// met on the way, so a long-range capture lists all its victims.
    ///
    /// Both endpoints must be playable squares of this board's variant.
    pub fn create_game_step(&self, mv: &Move) -> Result<GameStep, EngineError> {
        for square in [mv.from, mv.to] {
            if !self.is_on_board(square) {
                return Err(EngineError::UnplayableSquare {
                    square,
                    variant: self.variant,
                });
            }
        }
        let (mover, piece) = self
            .piece_at(mv.from)
            .ok_or(EngineError::EmptySquare { square: mv.from })?;

        let mut captures = Vec::new();
        for sq in path(mv.from, mv.to) {
            if let Some((owner, victim)) = self.piece_at(sq) {
                if owner != mover {
                    captures.try_reserve(1)?;
                    captures.push((sq, victim));
                }
            }
        }

        Ok(GameStep {
            start: mv.from,
            end: mv.to,
            mover,
            piece,
            promotion: mv.promotion,
            captures,
        })
    }

    /// Play a step: empty the start, drop the (promoted) piece on the end,
    /// empty every captured square.
    pub fn do_step(&mut self, step: &GameStep) {
        self.remove_piece(step.start);
        for &(sq, _) in &step.captures {
            self.remove_piece(sq);
        }
        let landed = step.promotion.unwrap_or(step.piece);
        self.set_piece(step.end, step.mover, landed);
    }

    /// Exact inverse of [`Board::do_step`].
    pub fn undo_step(&mut self, step: &GameStep) {
        self.remove_piece(step.end);
        self.set_piece(step.start, step.mover, step.piece);
        let victim_color = step.mover.opponent();
        for &(sq, victim) in &step.captures {
            self.set_piece(sq, victim_color, victim);
        }
    }

    /// Build and play the step for `mv`, returning it for a later
    /// [`Board::unmake_move`].
    pub fn make_move(&mut self, mv: &Move) -> Result<GameStep, EngineError> {
        let step = self.create_game_step(mv)?;
        self.do_step(&step);
        Ok(step)
    }

    pub fn unmake_move(&mut self, step: GameStep) {
        self.undo_step(&step);
    }

    /// Play `mv` without keeping the means to take it back.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), EngineError> {
        self.make_move(mv).map(|_| ())
    }
}
