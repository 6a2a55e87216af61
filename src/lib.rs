//! divercite-agent library.
//!
//! A time-budgeted minimax agent with alpha-beta pruning for two-player
//! placement games, plus a reference Divercité rules engine that hosts it.
//! The search core only talks to games through the `game::GameState` trait.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod search;
pub mod selfplay;

pub use config::{AgentConfig, DepthTier};
pub use engine::{Agent, Clock, Decision, SystemClock};
pub use error::{AgentError, ConfigError};
pub use game::{Coord, GameState, Piece, PlayerId};
