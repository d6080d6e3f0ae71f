//! Depth-bounded minimax with alpha-beta pruning.
//!
//! Values are always seen from the root side. The root side's own moves are
//! searched on even levels (maximizing), the opponent's on odd levels
//! (minimizing); the first reply to a root move is level 1.

use super::{stuck_verdict, verdict_if_stuck, Verdict, SCORE_INFINITY};
use crate::board::eval::DRAW_SCORE;
use crate::board::{Board, Color, EngineError, Move};

/// Value of a position reached by one move
enum ChildValue {
    /// The side to reply is stuck and loses; no sibling can do better
    Decisive(i32),
    Score(i32),
}

pub(crate) struct Searcher<'a> {
    board: &'a mut Board,
    root: Color,
    max_depth: u32,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub(crate) fn new(board: &'a mut Board, root: Color, max_depth: u32) -> Self {
        Searcher {
            board,
            root,
            max_depth: max_depth.max(1),
            nodes: 0,
        }
    }

    pub(crate) const fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Value of the root side playing `mv`, searched with the lower bound
    /// `alpha`. The flag is set when the move leaves the opponent stuck in a
    /// lost position, which ends the root loop at once.
    pub(crate) fn root_move_value(
        &mut self,
        mv: &Move,
        alpha: i32,
    ) -> Result<(i32, bool), EngineError> {
        let step = self.board.make_move(mv)?;
        let value = self.child_value(0, alpha, SCORE_INFINITY, self.root);
        self.board.unmake_move(step);
        Ok(match value? {
            ChildValue::Decisive(score) => (score, true),
            ChildValue::Score(score) => (score, false),
        })
    }

    /// Fail-soft alpha-beta. `to_move` moves at `level`.
    pub(crate) fn alphabeta(
        &mut self,
        level: u32,
        mut alpha: i32,
        mut beta: i32,
        to_move: Color,
    ) -> Result<i32, EngineError> {
        self.nodes += 1;
        if level >= self.max_depth {
            return Ok(self.board.score(self.root));
        }

        let moves = self.board.legal_moves(to_move)?;
        if moves.is_empty() {
            return Ok(stuck_verdict(self.board, to_move, self.root).score());
        }

        let maximizing = level % 2 == 0;
        let mut best = if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };

        for mv in &moves {
            if beta <= alpha {
                break;
            }
            let step = self.board.make_move(mv)?;
            let value = self.child_value(level, alpha, beta, to_move);
            self.board.unmake_move(step);

            let value = match value? {
                ChildValue::Decisive(score) => return Ok(score),
                ChildValue::Score(score) => score,
            };
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
        }
        Ok(best)
    }

    /// Value after `mover` has moved at `level`.
    fn child_value(
        &mut self,
        level: u32,
        alpha: i32,
        beta: i32,
        mover: Color,
    ) -> Result<ChildValue, EngineError> {
        let replying = mover.opponent();
        match verdict_if_stuck(self.board, replying, self.root)? {
            Some(Verdict::Decisive(score)) => Ok(ChildValue::Decisive(score)),
            Some(Verdict::Drawn) => Ok(ChildValue::Score(DRAW_SCORE)),
            None => self
                .alphabeta(level + 1, alpha, beta, replying)
                .map(ChildValue::Score),
        }
    }
}
