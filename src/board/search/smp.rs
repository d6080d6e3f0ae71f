//! Parallel root search.
//!
//! Root moves are handed out to scoped worker threads one at a time. Each
//! worker searches on a private copy of the board; the best (score, index)
//! found so far is shared behind a mutex and serves as every worker's alpha.
//! Ties resolve to the lowest root index, so the chosen move matches the
//! sequential search.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::thread;

use log::trace;
use parking_lot::Mutex;

use super::{Searcher, SearchResult, SCORE_INFINITY};
use crate::board::eval::WIN_SCORE;
use crate::board::{Board, Color, EngineError, Move};

/// Best root result shared across workers
struct SharedBest {
    score: i32,
    index: Option<usize>,
    /// Lowest index of a move that wins on the spot
    immediate: Option<usize>,
}

impl SharedBest {
    fn offer(&mut self, index: usize, score: i32, immediate: bool) {
        if immediate {
            if self.immediate.map_or(true, |i| index < i) {
                self.immediate = Some(index);
            }
            return;
        }
        let better = match self.index {
            None => true,
            Some(current) => score > self.score || (score == self.score && index < current),
        };
        if better {
            self.score = score;
            self.index = Some(index);
        }
    }

    /// Lower bound for a new root move. One below the best keeps equal
    /// scores exact so the index tie-break stays meaningful.
    fn alpha(&self) -> i32 {
        if self.index.is_some() {
            self.score - 1
        } else {
            -SCORE_INFINITY
        }
    }
}

pub(crate) fn parallel_search(
    board: &mut Board,
    color: Color,
    depth: u32,
    threads: usize,
) -> Result<Option<SearchResult>, EngineError> {
    let moves = board.legal_moves(color)?.into_vec();
    if moves.is_empty() {
        return Ok(None);
    }

    let root: &Board = board;
    let shared = Mutex::new(SharedBest {
        score: -SCORE_INFINITY,
        index: None,
        immediate: None,
    });
    let next = AtomicUsize::new(0);
    let nodes = AtomicU64::new(0);
    let workers = threads.clamp(1, moves.len());

    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| scope.spawn(|| worker(root, color, depth, &moves, &next, &shared, &nodes)))
            .collect();

        let mut outcome = Ok(());
        for handle in handles {
            match handle.join() {
                Ok(result) => {
                    if outcome.is_ok() {
                        outcome = result;
                    }
                }
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        outcome
    })?;

    let best = shared.into_inner();
    let (index, score) = match (best.immediate, best.index) {
        (Some(index), _) => (index, WIN_SCORE),
        (None, Some(index)) => (index, best.score),
        (None, None) => return Ok(None),
    };
    Ok(Some(SearchResult {
        best_move: moves[index],
        score,
        depth: depth.max(1),
        nodes: nodes.into_inner(),
    }))
}

fn worker(
    root: &Board,
    color: Color,
    depth: u32,
    moves: &[Move],
    next: &AtomicUsize,
    shared: &Mutex<SharedBest>,
    nodes: &AtomicU64,
) -> Result<(), EngineError> {
    let mut board = root.clone();
    let mut searcher = Searcher::new(&mut board, color, depth);

    let result = loop {
        let index = next.fetch_add(1, Ordering::Relaxed);
        let Some(mv) = moves.get(index) else {
            break Ok(());
        };
        let alpha = {
            let best = shared.lock();
            // An earlier move already wins on the spot
            if best.immediate.is_some_and(|i| i < index) {
                continue;
            }
            best.alpha()
        };
        match searcher.root_move_value(mv, alpha) {
            Ok((score, immediate)) => {
                trace!("root {mv} score {score}");
                shared.lock().offer(index, score, immediate);
            }
            Err(err) => break Err(err),
        }
    };

    nodes.fetch_add(searcher.nodes(), Ordering::Relaxed);
    result
}
