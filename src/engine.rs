//! Agent controller.
//!
//! Runs one decision cycle per call: derives the remaining match budget
//! from the agent's own accumulator, picks a depth, searches, charges the
//! elapsed wall-clock time to the accumulator and validates the chosen move
//! against the legal-move set.

use std::time::{Duration, Instant};

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::eval::{Evaluator, Perspective};
use crate::game::{GameState, PlayerId};
use crate::search::{AlphaBeta, DepthScheduler, SearchEngine, SearchStats};

/// Monotonic time source used to measure decision cycles.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Summary of the most recent decision cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub depth: u32,
    pub value: f64,
    pub elapsed: Duration,
    pub stats: SearchStats,
}

/// A time-budgeted search agent playing as `id`.
///
/// `time_used` is owned by the instance and only ever grows; it is never
/// reset for the lifetime of the agent.
pub struct Agent<E = AlphaBeta, C = SystemClock> {
    id: PlayerId,
    config: AgentConfig,
    scheduler: DepthScheduler,
    engine: E,
    clock: C,
    time_used: Duration,
    last_decision: Option<Decision>,
}

impl Agent {
    /// Creates an alpha-beta agent measured with the system clock.
    pub fn new(id: PlayerId, config: AgentConfig) -> Self {
        Agent::with_parts(id, config, AlphaBeta::new(), SystemClock::new())
    }
}

impl<E, C: Clock> Agent<E, C> {
    /// Creates an agent with an explicit search engine and clock.
    pub fn with_parts(id: PlayerId, config: AgentConfig, engine: E, clock: C) -> Self {
        let scheduler = DepthScheduler::from_config(&config);
        Agent {
            id,
            config,
            scheduler,
            engine,
            clock,
            time_used: Duration::ZERO,
            last_decision: None,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Total wall-clock time charged to this agent so far.
    pub fn time_used(&self) -> Duration {
        self.time_used
    }

    /// Budget left according to the agent's own accounting.
    pub fn remaining_budget(&self) -> Duration {
        self.config.total_time_budget().saturating_sub(self.time_used)
    }

    pub fn last_decision(&self) -> Option<&Decision> {
        self.last_decision.as_ref()
    }

    /// Chooses a move for `state`, where this agent is the side to move.
    ///
    /// `remaining_match_time` is the host's view of the clock. It is logged
    /// but not used: depth comes from the agent's internal accumulator.
    pub fn compute_action<S>(
        &mut self,
        state: &S,
        remaining_match_time: Duration,
    ) -> Result<S::Move, AgentError>
    where
        S: GameState,
        E: SearchEngine<S>,
    {
        let remaining = self.remaining_budget();
        if remaining.is_zero() {
            log::warn!(
                "{}: time budget exhausted ({:?} used), searching at minimum depth",
                self.id,
                self.time_used
            );
        }
        let depth = self.scheduler.select_depth(remaining);
        log::debug!(
            "{}: internal budget {:?} (host reports {:?}), depth {}",
            self.id,
            remaining,
            remaining_match_time,
            depth
        );

        let perspective = Perspective::resolve(state, self.id)?;
        let evaluator = Evaluator::new(perspective, self.config.divercite_bonus);

        let start = self.clock.now();
        let result = self.engine.search(state, depth, &evaluator);
        let elapsed = self.clock.now().saturating_sub(start);
        self.time_used += elapsed;

        self.last_decision = Some(Decision {
            depth,
            value: result.value,
            elapsed,
            stats: result.stats,
        });
        log::info!(
            "{}: depth {} value {} nodes {} in {:?} (total {:?})",
            self.id,
            depth,
            result.value,
            result.stats.nodes,
            elapsed,
            self.time_used
        );

        match result.best_move {
            Some(mv) if state.legal_moves().contains(&mv) => Ok(mv),
            _ => Err(AgentError::NoValidAction { depth }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::config::DepthTier;
    use crate::game::fixtures::{leaf, node, stalled, TreeState, ME, OPP};
    use crate::search::SearchResult;

    /// Advances by a fixed step every time it is read.
    struct SteppingClock {
        t: Cell<Duration>,
        step: Duration,
    }

    impl SteppingClock {
        fn new(step: Duration) -> Self {
            SteppingClock {
                t: Cell::new(Duration::ZERO),
                step,
            }
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> Duration {
            let t = self.t.get();
            self.t.set(t + self.step);
            t
        }
    }

    /// Records requested depths and returns a fixed move.
    struct StubEngine {
        reply: Option<u8>,
        depths: Vec<u32>,
    }

    impl SearchEngine<TreeState> for StubEngine {
        fn search(
            &mut self,
            _state: &TreeState,
            depth: u32,
            _evaluator: &Evaluator,
        ) -> SearchResult<u8> {
            self.depths.push(depth);
            SearchResult {
                best_move: self.reply,
                value: 0.0,
                depth,
                stats: SearchStats::default(),
            }
        }
    }

    fn stub(reply: Option<u8>) -> StubEngine {
        StubEngine {
            reply,
            depths: Vec::new(),
        }
    }

    fn two_ply() -> TreeState {
        TreeState::new(node(
            0,
            vec![
                node(0, vec![leaf(3), leaf(5)]),
                node(0, vec![leaf(6), leaf(9)]),
            ],
        ))
    }

    #[test]
    fn picks_best_move_with_real_search() {
        let mut agent = Agent::new(ME, AgentConfig::default());
        let mv = agent.compute_action(&two_ply(), Duration::from_secs(900)).unwrap();
        assert_eq!(mv, 1);
        let decision = agent.last_decision().unwrap();
        assert_eq!(decision.depth, 3);
        assert_eq!(decision.value, 6.0);
    }

    #[test]
    fn rejects_move_absent_from_legal_set() {
        let clock = SteppingClock::new(Duration::from_secs(1));
        let mut agent = Agent::with_parts(ME, AgentConfig::default(), stub(Some(99)), clock);
        let err = agent
            .compute_action(&two_ply(), Duration::from_secs(900))
            .unwrap_err();
        assert!(matches!(err, AgentError::NoValidAction { depth: 3 }));
        // The failed cycle is still charged.
        assert_eq!(agent.time_used(), Duration::from_secs(1));
    }

    #[test]
    fn rejects_missing_move() {
        let clock = SteppingClock::new(Duration::from_secs(1));
        let mut agent = Agent::with_parts(ME, AgentConfig::default(), stub(None), clock);
        assert!(matches!(
            agent.compute_action(&two_ply(), Duration::ZERO),
            Err(AgentError::NoValidAction { .. })
        ));
    }

    #[test]
    fn terminal_root_has_no_valid_action() {
        let mut agent = Agent::new(ME, AgentConfig::default());
        let state = TreeState::new(leaf(4));
        assert!(matches!(
            agent.compute_action(&state, Duration::ZERO),
            Err(AgentError::NoValidAction { .. })
        ));
    }

    #[test]
    fn stuck_root_has_no_valid_action() {
        let mut agent = Agent::new(ME, AgentConfig::default());
        let state = TreeState::new(stalled(4));
        assert!(!state.is_terminal());
        assert!(matches!(
            agent.compute_action(&state, Duration::ZERO),
            Err(AgentError::NoValidAction { depth: 3 })
        ));
    }

    #[test]
    fn oversized_budget_saturates() {
        let config = AgentConfig {
            total_time_budget_secs: 1e30,
            ..AgentConfig::default()
        };
        let mut agent = Agent::new(ME, config);
        assert_eq!(agent.remaining_budget(), Duration::MAX);
        assert_eq!(agent.compute_action(&two_ply(), Duration::ZERO).unwrap(), 1);
        assert_eq!(agent.last_decision().unwrap().depth, 3);
    }

    #[test]
    fn time_used_accumulates_measured_durations() {
        let clock = SteppingClock::new(Duration::from_millis(250));
        let mut agent = Agent::with_parts(ME, AgentConfig::default(), stub(Some(0)), clock);
        for n in 1..=5u32 {
            agent.compute_action(&two_ply(), Duration::ZERO).unwrap();
            assert_eq!(agent.time_used(), Duration::from_millis(250) * n);
            assert_eq!(
                agent.last_decision().unwrap().elapsed,
                Duration::from_millis(250)
            );
        }
    }

    #[test]
    fn depth_shrinks_as_budget_is_spent() {
        let clock = SteppingClock::new(Duration::from_secs(200));
        let mut agent = Agent::with_parts(ME, AgentConfig::default(), stub(Some(0)), clock);
        for _ in 0..6 {
            agent.compute_action(&two_ply(), Duration::ZERO).unwrap();
        }
        // Remaining before each call: 900, 700, 500, 300, 100, 0.
        assert_eq!(agent.engine.depths, vec![3, 3, 2, 1, 1, 1]);
        assert_eq!(agent.remaining_budget(), Duration::ZERO);
        assert_eq!(agent.time_used(), Duration::from_secs(1200));
    }

    #[test]
    fn host_remaining_time_is_ignored() {
        // The host claims almost no time is left; the internal budget wins.
        let clock = SteppingClock::new(Duration::from_millis(1));
        let mut agent = Agent::with_parts(ME, AgentConfig::default(), stub(Some(0)), clock);
        agent
            .compute_action(&two_ply(), Duration::from_millis(5))
            .unwrap();
        assert_eq!(agent.engine.depths, vec![3]);
    }

    #[test]
    fn custom_config_drives_depth() {
        let config = AgentConfig {
            total_time_budget_secs: 10.0,
            depth_tiers: vec![DepthTier::new(5.0, 7)],
            fallback_depth: 2,
            ..AgentConfig::default()
        };
        let clock = SteppingClock::new(Duration::from_secs(6));
        let mut agent = Agent::with_parts(ME, config, stub(Some(1)), clock);
        agent.compute_action(&two_ply(), Duration::ZERO).unwrap();
        agent.compute_action(&two_ply(), Duration::ZERO).unwrap();
        assert_eq!(agent.engine.depths, vec![7, 2]);
    }

    #[test]
    fn unknown_self_id_is_an_error() {
        let mut agent = Agent::new(PlayerId(42), AgentConfig::default());
        assert!(matches!(
            agent.compute_action(&two_ply(), Duration::ZERO),
            Err(AgentError::OpponentNotFound(_))
        ));
    }

    #[test]
    fn opponent_perspective_minimizes_my_score() {
        // Playing as OPP, the fixture scores are ME's, so the agent wants the
        // branch that keeps ME lowest.
        let mut agent = Agent::new(OPP, AgentConfig::default());
        let mv = agent.compute_action(&two_ply(), Duration::ZERO).unwrap();
        assert_eq!(mv, 0);
    }
}
