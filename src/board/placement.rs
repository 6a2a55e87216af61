//! The move type: placing one piece on one cell.
//!
//! Notation: `<colour><kind>@<row>,<col>`, e.g. `RC@3,4` places a red city
//! on row 3, column 4.

use std::fmt;
use std::str::FromStr;

use crate::game::Coord;

use super::piece::{Color, PieceKind, PieceType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub piece: PieceType,
    pub coord: Coord,
}

impl Placement {
    pub const fn new(piece: PieceType, coord: Coord) -> Self {
        Placement { piece, coord }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.piece, self.coord)
    }
}

/// Errors that can occur when parsing placement notation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementParseError {
    #[error("expected '<piece>@<row>,<col>', got '{0}'")]
    Malformed(String),

    #[error("invalid colour character: '{0}'")]
    InvalidColor(char),

    #[error("invalid piece kind character: '{0}'")]
    InvalidKind(char),

    #[error("invalid coordinate: '{0}'")]
    InvalidCoord(String),
}

impl FromStr for Placement {
    type Err = PlacementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (piece_str, coord_str) = s
            .split_once('@')
            .ok_or_else(|| PlacementParseError::Malformed(s.to_string()))?;

        let mut chars = piece_str.chars();
        let (color_char, kind_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(c), Some(k), None) => (c, k),
            _ => return Err(PlacementParseError::Malformed(s.to_string())),
        };
        let color =
            Color::from_notation_char(color_char).ok_or(PlacementParseError::InvalidColor(color_char))?;
        let kind =
            PieceKind::from_notation_char(kind_char).ok_or(PlacementParseError::InvalidKind(kind_char))?;

        let (row, col) = coord_str
            .split_once(',')
            .ok_or_else(|| PlacementParseError::InvalidCoord(coord_str.to_string()))?;
        let row = row
            .trim()
            .parse::<usize>()
            .map_err(|_| PlacementParseError::InvalidCoord(coord_str.to_string()))?;
        let col = col
            .trim()
            .parse::<usize>()
            .map_err(|_| PlacementParseError::InvalidCoord(coord_str.to_string()))?;

        Ok(Placement::new(PieceType::new(kind, color), Coord::new(row, col)))
    }
}
