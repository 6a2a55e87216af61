//! Single-match self-play.
//!
//! Plays one Divercité match between the search agent and either a second
//! search agent or a random baseline, recording every placement together
//! with the search depth, value and time spent on it.

use std::io::Write;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::DiverciteState;
use crate::config::AgentConfig;
use crate::engine::Agent;
use crate::error::AgentError;
use crate::game::{GameState, PlayerId};
use crate::movegen::random_placement;

/// Who plays the second seat.
#[derive(Debug, Clone, PartialEq)]
pub enum Opponent {
    Search(AgentConfig),
    Random,
}

/// Configuration for one self-play match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Configuration of the agent in the first seat.
    pub agent: AgentConfig,
    pub opponent: Opponent,
    /// Number of opening placements chosen at random before searching.
    pub random_opening: u32,
    /// Random seed (0 = use entropy).
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            agent: AgentConfig::default(),
            opponent: Opponent::Random,
            random_opening: 0,
            seed: 0,
        }
    }
}

/// Errors that end a match early.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("agent {player} failed: {source}")]
    Agent {
        player: PlayerId,
        source: AgentError,
    },

    #[error("{0} has no legal placement in a non-terminal position")]
    Stuck(PlayerId),
}

/// One placement of a recorded match.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    pub ply: u32,
    pub player: PlayerId,
    pub placement: String,
    /// Search depth, absent for random moves.
    pub depth: Option<u32>,
    pub value: Option<f64>,
    pub elapsed_ms: u64,
}

/// A complete match record.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub moves: Vec<MoveRecord>,
    pub scores: Vec<(PlayerId, i32)>,
    pub winner: Option<PlayerId>,
    pub time_used_ms: Vec<(PlayerId, u64)>,
}

enum Seat {
    Search(Agent),
    Random,
}

/// Plays a full match and returns its record.
pub fn play_match(config: &MatchConfig) -> Result<MatchRecord, MatchError> {
    let mut rng = if config.seed == 0 {
        SmallRng::from_entropy()
    } else {
        SmallRng::seed_from_u64(config.seed)
    };

    let mut state = DiverciteState::standard();
    let ids = [state.players()[0], state.players()[1]];
    let mut seats = [
        Seat::Search(Agent::new(ids[0], config.agent.clone())),
        match &config.opponent {
            Opponent::Search(c) => Seat::Search(Agent::new(ids[1], c.clone())),
            Opponent::Random => Seat::Random,
        },
    ];

    for seat in &seats {
        if let Seat::Search(agent) = seat {
            let c = agent.config();
            log::info!(
                "{} searches with budget {}s, {} depth tiers, fallback depth {}",
                agent.id(),
                c.total_time_budget_secs,
                c.depth_tiers.len(),
                c.fallback_depth
            );
        }
    }

    let match_start = Instant::now();
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let player = state.to_move();
        let seat = if player == ids[0] { 0 } else { 1 };
        let ply = state.placements();
        let start = Instant::now();

        let (placement, depth, value) = match &mut seats[seat] {
            Seat::Search(agent) if ply >= config.random_opening => {
                let remaining = agent.remaining_budget();
                let mv = agent
                    .compute_action(&state, remaining)
                    .map_err(|source| MatchError::Agent { player, source })?;
                let decision = agent.last_decision();
                (mv, decision.map(|d| d.depth), decision.map(|d| d.value))
            }
            _ => {
                let mv = random_placement(&state, &mut rng).ok_or(MatchError::Stuck(player))?;
                (mv, None, None)
            }
        };

        log::debug!("ply {} {} plays {}", ply, player, placement);
        moves.push(MoveRecord {
            ply,
            player,
            placement: placement.to_string(),
            depth,
            value,
            elapsed_ms: start.elapsed().as_millis() as u64,
        });
        state = state.apply_move(&placement);
    }

    log::info!(
        "match over after {} placements in {:?}\n{}",
        state.placements(),
        match_start.elapsed(),
        state
    );

    let time_used_ms = ids
        .iter()
        .zip(&seats)
        .map(|(&id, seat)| match seat {
            Seat::Search(agent) => (agent.id(), agent.time_used().as_millis() as u64),
            Seat::Random => (id, 0),
        })
        .collect();

    Ok(MatchRecord {
        moves,
        scores: ids.iter().map(|&id| (id, state.score(id))).collect(),
        winner: state.leader(),
        time_used_ms,
    })
}

/// Writes a match record as a single JSON line.
pub fn write_record_json<W: Write>(record: &MatchRecord, out: &mut W) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    writeln!(out)
}

/// Prints a short human-readable summary to stderr.
pub fn print_summary(record: &MatchRecord) {
    for (id, score) in &record.scores {
        eprintln!("  {}: {} points", id, score);
    }
    match record.winner {
        Some(w) => eprintln!("  winner: {}", w),
        None => eprintln!("  draw"),
    }
    for (id, ms) in &record.time_used_ms {
        eprintln!("  {} thinking time: {}ms", id, ms);
    }
}
