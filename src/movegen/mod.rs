//! Legal move generation.
//!
//! Enumerates the placements available to the side to move. The order is
//! fixed (kind, then colour, then cell row-major) because the search breaks
//! ties and prunes according to it.

use rand::Rng;

use crate::board::{
    cell_kind, playable_cells, DiverciteState, PieceType, Placement, ALL_COLORS, ALL_KINDS,
    MAX_PLACEMENTS,
};

/// Generates every legal placement for the side to move.
pub fn legal_placements(state: &DiverciteState) -> Vec<Placement> {
    let mut moves = Vec::new();
    if state.placements() >= MAX_PLACEMENTS {
        return moves;
    }
    let player = state.to_move();

    for kind in ALL_KINDS {
        let free: Vec<_> = playable_cells()
            .filter(|&c| cell_kind(c) == Some(kind) && state.stone(c).is_none())
            .collect();
        if free.is_empty() {
            continue;
        }
        for color in ALL_COLORS {
            let piece = PieceType::new(kind, color);
            if state.reserve(player, piece) == 0 {
                continue;
            }
            moves.extend(free.iter().map(|&c| Placement::new(piece, c)));
        }
    }

    moves
}

/// Returns true if the side to move can place anything at all.
pub fn has_legal_placement(state: &DiverciteState) -> bool {
    if state.placements() >= MAX_PLACEMENTS {
        return false;
    }
    let player = state.to_move();
    ALL_KINDS.into_iter().any(|kind| {
        let has_piece = ALL_COLORS
            .into_iter()
            .any(|color| state.reserve(player, PieceType::new(kind, color)) > 0);
        has_piece
            && playable_cells().any(|c| cell_kind(c) == Some(kind) && state.stone(c).is_none())
    })
}

/// Picks a uniformly random legal placement, or `None` if there is none.
pub fn random_placement(state: &DiverciteState, rng: &mut impl Rng) -> Option<Placement> {
    let legal = legal_placements(state);
    if legal.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..legal.len());
    Some(legal[idx])
}
