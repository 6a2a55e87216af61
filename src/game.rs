//! Game contract consumed by the agent.
//!
//! The agent never depends on a concrete game. Any rules engine that can
//! enumerate legal moves, produce successor states by value, report scores
//! and answer per-cell formation queries can be searched.

use std::fmt;

use serde::Serialize;

/// Stable identifier of a player within a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlayerId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A cell address on a rectangular board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Returns the orthogonal neighbours that do not underflow the grid origin.
    ///
    /// Callers still have to check the upper bound with `on_board`.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            Some(Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            Some(Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// A piece standing on a board cell.
pub trait Piece {
    fn owner(&self) -> PlayerId;
}

/// Snapshot of a two-player game as seen by the search.
///
/// Implementations must have value semantics: `apply_move` returns a new
/// state and leaves `self` untouched, so sibling branches never observe each
/// other's edits.
pub trait GameState: Sized {
    type Move: Clone + PartialEq + fmt::Debug;
    type Piece: Piece;

    /// Player ids taking part in the match. The agent requires exactly two.
    fn players(&self) -> &[PlayerId];

    /// Current score of `player`.
    fn score(&self, player: PlayerId) -> i32;

    /// Rectangular extent `(rows, cols)` enclosing every playable cell.
    fn dimensions(&self) -> (usize, usize);

    /// Whether `coord` is part of the playable board.
    fn on_board(&self, coord: Coord) -> bool;

    /// The piece on `coord`, if any.
    fn cell(&self, coord: Coord) -> Option<&Self::Piece>;

    /// Domain formation predicate evaluated at `coord`.
    fn formation_check(&self, coord: Coord) -> bool;

    /// Legal moves for the side to move, in a deterministic order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Returns the successor state reached by playing `mv`.
    fn apply_move(&self, mv: &Self::Move) -> Self;

    fn is_terminal(&self) -> bool;
}
