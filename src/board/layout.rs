//! Board geometry.
//!
//! The playable area is a diamond inside a 9x9 grid. Cells alternate between
//! city cells and resource cells like a checkerboard, so every city is
//! surrounded by four resource cells.

use crate::game::Coord;

use super::piece::PieceKind;

pub const BOARD_SIZE: usize = 9;

const CENTER: usize = BOARD_SIZE / 2;

/// Number of playable cells in the diamond.
pub const PLAYABLE_CELLS: usize = 41;

/// Returns true if `coord` lies inside the playable diamond.
pub fn is_playable(coord: Coord) -> bool {
    coord.row < BOARD_SIZE
        && coord.col < BOARD_SIZE
        && coord.row.abs_diff(CENTER) + coord.col.abs_diff(CENTER) <= CENTER
}

/// The kind of piece a playable cell accepts.
pub fn cell_kind(coord: Coord) -> Option<PieceKind> {
    if !is_playable(coord) {
        return None;
    }
    if (coord.row + coord.col) % 2 == 1 {
        Some(PieceKind::City)
    } else {
        Some(PieceKind::Resource)
    }
}

/// Every playable cell, row-major.
pub fn playable_cells() -> impl Iterator<Item = Coord> {
    (0..BOARD_SIZE)
        .flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
        .filter(|&c| is_playable(c))
}
