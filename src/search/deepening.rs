//! Iterative deepening driver
//!
//! Runs depth 1, 2, 3, ... until the clock says stop, keeping the move of
//! the deepest completed iteration. The loop is an explicit phase machine
//! so every exit path is visible in one `match`.

use tracing::{debug, trace};

use crate::board::{GameState, Pos};
use crate::config::Algorithm;
use crate::eval::WIN_SCORE;

use super::Searcher;

/// Outcome of an iterative deepening run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeepeningResult {
    /// Move of the deepest completed iteration, or the fallback move
    pub best_move: Option<Pos>,
    /// Score of the deepest completed iteration (0 when none completed)
    pub score: f64,
    /// Deepest completed depth, 0 when only the fallback is available
    pub depth: u32,
    /// Nodes visited across all iterations, including an aborted one
    pub nodes: u64,
    /// The last iteration hit the deadline and was discarded
    pub timed_out: bool,
    /// A completed iteration saw the whole game tree
    pub exhausted: bool,
}

enum Phase {
    Init,
    Searching { depth: u32 },
    Done,
}

/// Deepen one ply at a time until the deadline, `max_depth`, a proven
/// result, or the end of the game tree.
///
/// Returns `best_move: None` only when the active player has no legal
/// move. If not even depth 1 completes, the first legal move is returned.
pub fn iterative_deepening(
    searcher: &mut Searcher<'_>,
    state: &GameState,
    algorithm: Algorithm,
    max_depth: u32,
) -> DeepeningResult {
    let mut result = DeepeningResult {
        best_move: None,
        score: 0.0,
        depth: 0,
        nodes: 0,
        timed_out: false,
        exhausted: false,
    };
    let start_nodes = searcher.nodes();
    let mut phase = Phase::Init;

    loop {
        phase = match phase {
            Phase::Init => match state.legal_moves().first() {
                Some(&fallback) => {
                    result.best_move = Some(fallback);
                    Phase::Searching { depth: 1 }
                }
                None => Phase::Done,
            },

            Phase::Searching { depth } if depth > max_depth => Phase::Done,

            Phase::Searching { depth } => {
                if searcher.out_of_time() {
                    trace!(depth, "no time left for next iteration");
                    result.timed_out = true;
                    Phase::Done
                } else {
                    let horizon_before = searcher.stats().horizon_nodes;
                    match searcher.search(algorithm, state, depth) {
                        Ok(iteration) => {
                            debug!(
                                depth,
                                score = iteration.score,
                                nodes = iteration.nodes,
                                best = ?iteration.best_move,
                                "iteration complete"
                            );
                            result.best_move = iteration.best_move.or(result.best_move);
                            result.score = iteration.score;
                            result.depth = depth;

                            if searcher.stats().horizon_nodes == horizon_before {
                                result.exhausted = true;
                                Phase::Done
                            } else if iteration.score.abs() >= WIN_SCORE {
                                Phase::Done
                            } else {
                                Phase::Searching { depth: depth + 1 }
                            }
                        }
                        Err(_) => {
                            trace!(depth, "iteration aborted at deadline");
                            result.timed_out = true;
                            Phase::Done
                        }
                    }
                }
            }

            Phase::Done => break,
        };
    }

    result.nodes = searcher.nodes() - start_nodes;
    result
}
