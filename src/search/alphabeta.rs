//! Depth-limited minimax with alpha-beta pruning.
//!
//! Plain fail-hard alpha-beta over immutable states: every recursive call
//! owns the successor produced by `apply_move`, so no undo logic exists.
//! Moves are visited in generator order and only strict improvements
//! replace the running best, so ties keep the earliest move.

use std::time::Instant;

use crate::eval::Evaluator;
use crate::game::GameState;

use super::{SearchEngine, SearchResult, SearchStats};

/// Minimax with alpha-beta pruning.
///
/// Returns the backed-up value of `state` and the move achieving it. Cutoff
/// nodes (`depth == 0` or terminal) return the evaluation and no move.
pub fn alpha_beta<S: GameState>(
    state: &S,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    evaluator: &Evaluator,
    stats: &mut SearchStats,
) -> (f64, Option<S::Move>) {
    stats.nodes += 1;

    if depth == 0 || state.is_terminal() {
        stats.leaf_evals += 1;
        return (evaluator.evaluate(state), None);
    }

    let mut best_move = None;

    if maximizing {
        let mut max_value = f64::NEG_INFINITY;
        for mv in state.legal_moves() {
            let next = state.apply_move(&mv);
            let (value, _) = alpha_beta(&next, depth - 1, alpha, beta, false, evaluator, stats);
            if value > max_value {
                max_value = value;
                best_move = Some(mv);
                alpha = max_value;
            }
            if max_value >= beta {
                stats.cutoffs += 1;
                break;
            }
        }
        (max_value, best_move)
    } else {
        let mut min_value = f64::INFINITY;
        for mv in state.legal_moves() {
            let next = state.apply_move(&mv);
            let (value, _) = alpha_beta(&next, depth - 1, alpha, beta, true, evaluator, stats);
            if value < min_value {
                min_value = value;
                best_move = Some(mv);
                beta = min_value;
            }
            if min_value <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        (min_value, best_move)
    }
}

/// The default engine: a single alpha-beta pass from the root.
#[derive(Debug, Default)]
pub struct AlphaBeta;

impl AlphaBeta {
    pub fn new() -> Self {
        AlphaBeta
    }
}

impl<S: GameState> SearchEngine<S> for AlphaBeta {
    fn search(&mut self, state: &S, depth: u32, evaluator: &Evaluator) -> SearchResult<S::Move> {
        let start = Instant::now();
        let mut stats = SearchStats::default();
        let (value, best_move) = alpha_beta(
            state,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
            evaluator,
            &mut stats,
        );
        log::debug!(
            "alpha-beta depth {} value {} nodes {} leaves {} cutoffs {} in {:?}",
            depth,
            value,
            stats.nodes,
            stats.leaf_evals,
            stats.cutoffs,
            start.elapsed()
        );
        SearchResult {
            best_move,
            value,
            depth,
            stats,
        }
    }
}
