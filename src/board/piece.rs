//! Piece kinds, colours and ownership.

use std::fmt;

use crate::game::{self, PlayerId};

/// The four resource colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

pub const ALL_COLORS: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

impl Color {
    /// Returns the single-character notation abbreviation.
    pub const fn notation_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
        }
    }

    pub fn from_notation_char(c: char) -> Option<Color> {
        match c {
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            'B' => Some(Color::Blue),
            'Y' => Some(Color::Yellow),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Cities score; resources feed the cities next to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    City,
    Resource,
}

pub const ALL_KINDS: [PieceKind; 2] = [PieceKind::City, PieceKind::Resource];

impl PieceKind {
    pub const fn notation_char(self) -> char {
        match self {
            PieceKind::City => 'C',
            PieceKind::Resource => 'R',
        }
    }

    pub fn from_notation_char(c: char) -> Option<PieceKind> {
        match c {
            'C' => Some(PieceKind::City),
            'R' => Some(PieceKind::Resource),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Pieces of this kind and one colour each player starts with.
    pub const fn initial_count(self) -> u8 {
        match self {
            PieceKind::City => 2,
            PieceKind::Resource => 3,
        }
    }
}

/// A piece type a player can place: kind plus colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceType {
    pub kind: PieceKind,
    pub color: Color,
}

impl PieceType {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        PieceType { kind, color }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.notation_char(), self.kind.notation_char())
    }
}

/// A placed piece with its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stone {
    pub piece: PieceType,
    pub owner: PlayerId,
}

impl Stone {
    pub const fn is_city(&self) -> bool {
        matches!(self.piece.kind, PieceKind::City)
    }

    pub const fn is_resource(&self) -> bool {
        matches!(self.piece.kind, PieceKind::Resource)
    }

    pub const fn color(&self) -> Color {
        self.piece.color
    }
}

impl game::Piece for Stone {
    fn owner(&self) -> PlayerId {
        self.owner
    }
}
