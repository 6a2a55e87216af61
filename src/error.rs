//! Error types for the agent and its configuration.

use std::path::PathBuf;

use crate::game::PlayerId;

/// Errors that abort a decision cycle.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("no valid action found at depth {depth}")]
    NoValidAction { depth: u32 },

    #[error("expected exactly 2 players, found {0}")]
    PlayerCount(usize),

    #[error("no opponent found for player {0}")]
    OpponentNotFound(PlayerId),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
