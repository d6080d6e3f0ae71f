//! Engine move selection.
//!
//! - Depth-bounded minimax with alpha-beta pruning (`alphabeta`)
//! - Immediate win when a move leaves the opponent without legal moves
//! - Dynamic depth selection for [`SearchDepth::Best`]
//! - Parallel root move loop (`smp`)

mod alphabeta;
mod params;
mod smp;

use log::{debug, trace};

use super::eval::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use super::{Board, Color, EngineError, Move, MoveList};
pub(crate) use alphabeta::Searcher;
pub use params::{
    SearchConfig, SearchDepth, DEFAULT_DEPTH, DEFAULT_NODE_BUDGET, MAX_DYNAMIC_DEPTH,
    MAX_FIXED_DEPTH,
};

/// Bound no search value can reach
pub(crate) const SCORE_INFINITY: i32 = WIN_SCORE + 1;

/// Outcome of a completed root search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move, owned by the caller
    pub best_move: Move,
    /// Its value from the searching side's point of view
    pub score: i32,
    /// Plies searched
    pub depth: u32,
    pub nodes: u64,
}

/// How a position where one side cannot move is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    Decisive(i32),
    Drawn,
}

impl Verdict {
    pub(crate) const fn score(self) -> i32 {
        match self {
            Verdict::Decisive(score) => score,
            Verdict::Drawn => DRAW_SCORE,
        }
    }
}

/// Score `stuck`, a side without legal moves, from `root`'s point of view.
///
/// The stuck side loses, except a chess side that is not in check: that is
/// stalemate and counts as a draw.
pub(crate) fn stuck_verdict(board: &Board, stuck: Color, root: Color) -> Verdict {
    if board.variant().has_check_rule() && !board.is_in_check(stuck) {
        Verdict::Drawn
    } else if stuck == root {
        Verdict::Decisive(LOSS_SCORE)
    } else {
        Verdict::Decisive(WIN_SCORE)
    }
}

/// The verdict for `side` if it has no legal move, `None` while it can play.
pub(crate) fn verdict_if_stuck(
    board: &mut Board,
    side: Color,
    root: Color,
) -> Result<Option<Verdict>, EngineError> {
    if board.is_stuck(side)? {
        Ok(Some(stuck_verdict(board, side, root)))
    } else {
        Ok(None)
    }
}

/// Number of plies a search with `config` will use on this position.
pub fn resolve_depth(
    board: &mut Board,
    color: Color,
    config: &SearchConfig,
) -> Result<u32, EngineError> {
    match config.depth {
        SearchDepth::Fixed(depth) => Ok(depth.clamp(1, MAX_FIXED_DEPTH)),
        SearchDepth::Best => {
            let own = board.legal_moves(color)?.len() as u64;
            let theirs = board.legal_moves(color.opponent())?.len() as u64;
            let branching = own.max(theirs).max(2);

            let mut depth = 1;
            let mut tree = branching;
            while depth < MAX_DYNAMIC_DEPTH {
                match tree.checked_mul(branching) {
                    Some(next) if next <= config.node_budget => {
                        tree = next;
                        depth += 1;
                    }
                    _ => break,
                }
            }
            Ok(depth)
        }
    }
}

/// Pick the engine's move for `color`. `Ok(None)` when `color` cannot move.
///
/// The board is borrowed for the whole query and is left exactly as it was
/// found, on success and on error.
pub fn find_best_move(
    board: &mut Board,
    color: Color,
    config: &SearchConfig,
) -> Result<Option<SearchResult>, EngineError> {
    let depth = resolve_depth(board, color, config)?;
    let result = if config.threads > 1 {
        smp::parallel_search(board, color, depth, config.threads)?
    } else {
        minimax(board, color, depth)?
    };

    if let Some(result) = &result {
        debug!(
            "{color} depth {} best {} score {} nodes {}",
            result.depth, result.best_move, result.score, result.nodes
        );
    } else {
        debug!("{color} has no legal move");
    }
    Ok(result)
}

/// Sequential root driver.
///
/// Ties keep the earliest move in generation order; a move that leaves the
/// opponent stuck and lost is taken immediately.
pub fn minimax(
    board: &mut Board,
    color: Color,
    depth: u32,
) -> Result<Option<SearchResult>, EngineError> {
    let moves = board.legal_moves(color)?;
    let mut searcher = Searcher::new(board, color, depth);
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        let alpha = best.map_or(-SCORE_INFINITY, |(_, score)| score);
        let (score, immediate) = searcher.root_move_value(&mv, alpha)?;
        trace!("root {mv} score {score}");
        if immediate {
            best = Some((mv, score));
            break;
        }
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    Ok(best.map(|(best_move, score)| SearchResult {
        best_move,
        score,
        depth: depth.max(1),
        nodes: searcher.nodes(),
    }))
}

/// Value of `color` playing `mv`, searched `depth` plies deep in total.
pub fn evaluate_move(
    board: &mut Board,
    color: Color,
    mv: &Move,
    depth: u32,
) -> Result<i32, EngineError> {
    let mut searcher = Searcher::new(board, color, depth);
    searcher
        .root_move_value(mv, -SCORE_INFINITY)
        .map(|(score, _)| score)
}

/// Every root move of `color` sharing the best value, in generation order.
pub fn best_moves(board: &mut Board, color: Color, depth: u32) -> Result<MoveList, EngineError> {
    let moves = board.legal_moves(color)?;
    let mut scored = Vec::new();
    scored.try_reserve(moves.len())?;
    for mv in moves {
        let score = evaluate_move(board, color, &mv, depth)?;
        scored.push((mv, score));
    }

    let mut best = MoveList::new();
    if let Some(top) = scored.iter().map(|&(_, score)| score).max() {
        for (mv, score) in scored {
            if score == top {
                best.try_push(mv)?;
            }
        }
    }
    Ok(best)
}
