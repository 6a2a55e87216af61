//! Game state representation.
//!
//! Holds the complete snapshot of a Divercité match: pieces on the board,
//! each player's reserve, running scores and the side to move. States are
//! plain values; playing a move returns a new state.

use std::fmt;

use crate::game::{Coord, GameState, PlayerId};
use crate::movegen;

use super::layout::{cell_kind, is_playable, BOARD_SIZE};
use super::piece::{PieceKind, PieceType, Stone, ALL_COLORS, ALL_KINDS};
use super::placement::Placement;

/// Total placements in a match (20 pieces per player).
pub const MAX_PLACEMENTS: u32 = 40;

/// Value of a city whose four neighbours are resources of distinct colours.
pub const DIVERCITE_POINTS: i32 = 5;

/// Errors raised when a placement breaks the rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("the match is over")]
    GameOver,

    #[error("cell {0} is not on the board")]
    OffBoard(Coord),

    #[error("cell {0} is already occupied")]
    Occupied(Coord),

    #[error("cell {coord} does not accept a {kind:?}")]
    WrongCellKind { coord: Coord, kind: PieceKind },

    #[error("{player} has no {piece} left")]
    NoPiecesLeft { player: PlayerId, piece: PieceType },
}

/// Complete Divercité state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiverciteState {
    cells: [[Option<Stone>; BOARD_SIZE]; BOARD_SIZE],
    players: [PlayerId; 2],
    /// Index into `players` of the side to move.
    to_move: usize,
    /// `reserves[player][kind][colour]`.
    reserves: [[[u8; 4]; 2]; 2],
    scores: [i32; 2],
    placements: u32,
}

impl DiverciteState {
    /// Creates an empty board; `players[0]` moves first.
    pub fn new(players: [PlayerId; 2]) -> Self {
        let mut per_player = [[0u8; 4]; 2];
        for kind in ALL_KINDS {
            for color in ALL_COLORS {
                per_player[kind.index()][color.index()] = kind.initial_count();
            }
        }
        DiverciteState {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            players,
            to_move: 0,
            reserves: [per_player; 2],
            scores: [0, 0],
            placements: 0,
        }
    }

    /// Player ids 1 and 2, player 1 to move.
    pub fn standard() -> Self {
        Self::new([PlayerId(1), PlayerId(2)])
    }

    /// Builds a state by playing `moves` in order from the standard start.
    pub fn from_moves<'a, I>(moves: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = &'a Placement>,
    {
        moves
            .into_iter()
            .try_fold(Self::standard(), |state, mv| state.play(mv))
    }

    fn player_index(&self, player: PlayerId) -> Option<usize> {
        self.players.iter().position(|&p| p == player)
    }

    pub fn to_move(&self) -> PlayerId {
        self.players[self.to_move]
    }

    pub fn placements(&self) -> u32 {
        self.placements
    }

    pub fn stone(&self, coord: Coord) -> Option<Stone> {
        if coord.row < BOARD_SIZE && coord.col < BOARD_SIZE {
            self.cells[coord.row][coord.col]
        } else {
            None
        }
    }

    /// Pieces of `piece` type `player` can still place.
    pub fn reserve(&self, player: PlayerId, piece: PieceType) -> u8 {
        self.player_index(player)
            .map_or(0, |i| self.reserves[i][piece.kind.index()][piece.color.index()])
    }

    /// Returns true if the city on `coord` is surrounded by four resources
    /// of four distinct colours.
    pub fn check_divercite(&self, coord: Coord) -> bool {
        match self.stone(coord) {
            Some(stone) if stone.is_city() => {}
            _ => return false,
        }
        let mut seen = [false; 4];
        let mut resources = 0;
        for n in coord.neighbors().filter(|&n| is_playable(n)) {
            match self.stone(n) {
                Some(s) if s.is_resource() => {
                    let i = s.color().index();
                    if seen[i] {
                        return false;
                    }
                    seen[i] = true;
                    resources += 1;
                }
                _ => return false,
            }
        }
        resources == 4
    }

    /// Points the city on `coord` is worth to its owner.
    ///
    /// A Divercité scores `DIVERCITE_POINTS`; otherwise each neighbouring
    /// resource of the city's colour scores one, whoever owns it.
    pub fn city_value(&self, coord: Coord) -> i32 {
        let city = match self.stone(coord) {
            Some(s) if s.is_city() => s,
            _ => return 0,
        };
        if self.check_divercite(coord) {
            return DIVERCITE_POINTS;
        }
        coord
            .neighbors()
            .filter_map(|n| self.stone(n))
            .filter(|s| s.is_resource() && s.color() == city.color())
            .count() as i32
    }

    /// Cities whose value can change when `coord` is filled.
    fn affected_cities(&self, coord: Coord, kind: PieceKind) -> Vec<Coord> {
        match kind {
            PieceKind::City => vec![coord],
            PieceKind::Resource => coord
                .neighbors()
                .filter(|&n| self.stone(n).is_some_and(|s| s.is_city()))
                .collect(),
        }
    }

    /// Checks a placement for the side to move.
    pub fn validate(&self, mv: &Placement) -> Result<(), RuleError> {
        if self.placements >= MAX_PLACEMENTS {
            return Err(RuleError::GameOver);
        }
        let kind = cell_kind(mv.coord).ok_or(RuleError::OffBoard(mv.coord))?;
        if self.stone(mv.coord).is_some() {
            return Err(RuleError::Occupied(mv.coord));
        }
        if kind != mv.piece.kind {
            return Err(RuleError::WrongCellKind {
                coord: mv.coord,
                kind: mv.piece.kind,
            });
        }
        if self.reserve(self.to_move(), mv.piece) == 0 {
            return Err(RuleError::NoPiecesLeft {
                player: self.to_move(),
                piece: mv.piece,
            });
        }
        Ok(())
    }

    /// Plays a placement after checking it against the rules.
    pub fn play(&self, mv: &Placement) -> Result<Self, RuleError> {
        self.validate(mv)?;
        Ok(self.place(mv))
    }

    /// Plays a placement without validation.
    fn place(&self, mv: &Placement) -> Self {
        debug_assert!(self.validate(mv).is_ok(), "illegal placement {mv}");
        let mut next = self.clone();
        let affected = self.affected_cities(mv.coord, mv.piece.kind);

        for &c in &affected {
            if let Some(owner) = self.stone(c).and_then(|s| self.player_index(s.owner)) {
                next.scores[owner] -= self.city_value(c);
            }
        }

        let mover = self.to_move;
        next.cells[mv.coord.row][mv.coord.col] = Some(Stone {
            piece: mv.piece,
            owner: self.players[mover],
        });
        let left = &mut next.reserves[mover][mv.piece.kind.index()][mv.piece.color.index()];
        *left = left.saturating_sub(1);

        for &c in &affected {
            if let Some(owner) = next.stone(c).and_then(|s| next.player_index(s.owner)) {
                next.scores[owner] += next.city_value(c);
            }
        }

        next.placements += 1;
        next.to_move = 1 - mover;
        next
    }

    /// The player with the strictly higher score, if any.
    pub fn leader(&self) -> Option<PlayerId> {
        match self.scores[0].cmp(&self.scores[1]) {
            std::cmp::Ordering::Greater => Some(self.players[0]),
            std::cmp::Ordering::Less => Some(self.players[1]),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl GameState for DiverciteState {
    type Move = Placement;
    type Piece = Stone;

    fn players(&self) -> &[PlayerId] {
        &self.players
    }

    fn score(&self, player: PlayerId) -> i32 {
        self.player_index(player).map_or(0, |i| self.scores[i])
    }

    fn dimensions(&self) -> (usize, usize) {
        (BOARD_SIZE, BOARD_SIZE)
    }

    fn on_board(&self, coord: Coord) -> bool {
        is_playable(coord)
    }

    fn cell(&self, coord: Coord) -> Option<&Stone> {
        if coord.row < BOARD_SIZE && coord.col < BOARD_SIZE {
            self.cells[coord.row][coord.col].as_ref()
        } else {
            None
        }
    }

    fn formation_check(&self, coord: Coord) -> bool {
        self.check_divercite(coord)
    }

    fn legal_moves(&self) -> Vec<Placement> {
        movegen::legal_placements(self)
    }

    fn apply_move(&self, mv: &Placement) -> Self {
        self.place(mv)
    }

    fn is_terminal(&self) -> bool {
        self.placements >= MAX_PLACEMENTS || !movegen::has_legal_placement(self)
    }
}

impl fmt::Display for DiverciteState {
    /// Renders the board, one cell per three characters. Pieces show colour,
    /// kind and the owner's id; `.` is an empty playable cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let coord = Coord::new(row, col);
                if !is_playable(coord) {
                    write!(f, "    ")?;
                    continue;
                }
                match self.stone(coord) {
                    Some(s) => write!(f, " {}{}", s.piece, s.owner.0)?,
                    None => write!(f, "  . ")?,
                }
            }
            writeln!(f)?;
        }
        write!(
            f,
            "{}: {}  {}: {}  ({} to move)",
            self.players[0],
            self.scores[0],
            self.players[1],
            self.scores[1],
            self.to_move()
        )
    }
}
