//! Heuristic position evaluation.
//!
//! Evaluates a state from one player's point of view using two features:
//! the score differential and the difference in completed formations,
//! the latter scaled by a configurable bonus.
//!
//! The perspective is fixed for the whole search. Minimizing nodes pick the
//! numerically smallest value of the same function rather than negating it.

use crate::error::AgentError;
use crate::game::{Coord, GameState, Piece, PlayerId};

/// The acting player and the opponent it is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Perspective {
    pub me: PlayerId,
    pub opponent: PlayerId,
}

impl Perspective {
    /// Resolves the opponent by scanning the player list for the id that is
    /// not `me`. The state must list exactly two players, one of them `me`.
    pub fn resolve<S: GameState>(state: &S, me: PlayerId) -> Result<Self, AgentError> {
        let players = state.players();
        if players.len() != 2 {
            return Err(AgentError::PlayerCount(players.len()));
        }
        if !players.contains(&me) {
            return Err(AgentError::OpponentNotFound(me));
        }
        players
            .iter()
            .copied()
            .find(|&p| p != me)
            .map(|opponent| Perspective { me, opponent })
            .ok_or(AgentError::OpponentNotFound(me))
    }

    /// The same pair with roles exchanged.
    pub fn swapped(self) -> Self {
        Perspective {
            me: self.opponent,
            opponent: self.me,
        }
    }
}

/// Counts the cells owned by `player` that satisfy the formation predicate.
///
/// Walks the full `dimensions()` rectangle, skipping cells off the playable
/// board and empty cells.
pub fn count_formation_potential<S: GameState>(state: &S, player: PlayerId) -> usize {
    let (rows, cols) = state.dimensions();
    let mut count = 0;
    for row in 0..rows {
        for col in 0..cols {
            let coord = Coord::new(row, col);
            if !state.on_board(coord) {
                continue;
            }
            match state.cell(coord) {
                Some(piece) if piece.owner() == player => {
                    if state.formation_check(coord) {
                        count += 1;
                    }
                }
                _ => {}
            }
        }
    }
    count
}

/// Fixed-perspective leaf evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    perspective: Perspective,
    divercite_bonus: f64,
}

impl Evaluator {
    pub fn new(perspective: Perspective, divercite_bonus: f64) -> Self {
        Evaluator {
            perspective,
            divercite_bonus,
        }
    }

    pub fn perspective(&self) -> Perspective {
        self.perspective
    }

    /// `score_diff + bonus * (formations(me) - formations(opponent))`.
    ///
    /// Unbounded: the magnitude is whatever the game's scores and formation
    /// counts produce.
    pub fn evaluate<S: GameState>(&self, state: &S) -> f64 {
        let Perspective { me, opponent } = self.perspective;
        let score_diff = f64::from(state.score(me)) - f64::from(state.score(opponent));
        let potential = count_formation_potential(state, me) as f64
            - count_formation_potential(state, opponent) as f64;
        score_diff + potential * self.divercite_bonus
    }
}
