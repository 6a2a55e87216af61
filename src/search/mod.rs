//! Search and depth scheduling.
//!
//! Explores the game tree to a bounded depth with minimax and alpha-beta
//! pruning, scoring cutoffs with the heuristic evaluator. The depth itself
//! is picked from the remaining match-time budget.

pub mod alphabeta;
pub mod depth;

use crate::eval::Evaluator;
use crate::game::GameState;

pub use alphabeta::{alpha_beta, AlphaBeta};
pub use depth::DepthScheduler;

/// Counters collected while searching one root position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaf_evals: u64,
    pub cutoffs: u64,
}

/// Result of a root search: the chosen move and associated info.
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    pub best_move: Option<M>,
    pub value: f64,
    pub depth: u32,
    pub stats: SearchStats,
}

/// A root search procedure the agent can delegate to.
pub trait SearchEngine<S: GameState> {
    /// Searches `state` to `depth` plies with the agent to move as the
    /// maximizing side.
    fn search(&mut self, state: &S, depth: u32, evaluator: &Evaluator) -> SearchResult<S::Move>;
}
