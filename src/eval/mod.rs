//! Position evaluation.
//!
//! Scores a state from the agent's fixed perspective: raw score
//! differential plus a weighted formation differential.

pub(crate) mod heuristic;

pub use heuristic::{count_formation_potential, Evaluator, Perspective};
