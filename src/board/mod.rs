//! Board representation and game-state types for Divercité.
//!
//! Contains the board geometry, pieces, the placement move type and the
//! match state that implements the agent's `GameState` contract.

pub mod layout;
pub mod piece;
pub mod placement;
pub mod state;

pub use layout::{cell_kind, is_playable, playable_cells, BOARD_SIZE, PLAYABLE_CELLS};
pub use piece::{Color, PieceKind, PieceType, Stone, ALL_COLORS, ALL_KINDS};
pub use placement::{Placement, PlacementParseError};
pub use state::{DiverciteState, RuleError, DIVERCITE_POINTS, MAX_PLACEMENTS};
