use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use divercite_agent::board::{DiverciteState, Placement};
use divercite_agent::eval::{count_formation_potential, Evaluator, Perspective};
use divercite_agent::movegen::legal_placements;
use divercite_agent::search::{alpha_beta, SearchStats};
use divercite_agent::{Agent, AgentConfig, GameState, PlayerId};

/// A midgame position: both sides have placed most of their cities.
fn midgame() -> DiverciteState {
    let moves: Vec<Placement> = [
        "RC@3,4", "GC@5,4", "BC@4,3", "YC@4,5", "GR@4,4", "RR@2,4", "YR@3,3", "BR@3,5",
        "YC@2,3", "RC@6,5", "BC@1,4", "BC@5,2", "RR@5,5", "GR@6,4",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect();
    DiverciteState::from_moves(&moves).unwrap()
}

fn evaluator(state: &DiverciteState) -> Evaluator {
    Evaluator::new(Perspective::resolve(state, state.to_move()).unwrap(), 5.0)
}

fn bench_evaluate(c: &mut Criterion) {
    let state = midgame();
    let eval = evaluator(&state);
    c.bench_function("evaluate_midgame", |b| {
        b.iter(|| eval.evaluate(black_box(&state)))
    });
}

fn bench_formation_counter(c: &mut Criterion) {
    let state = midgame();
    c.bench_function("count_formation_potential", |b| {
        b.iter(|| count_formation_potential(black_box(&state), PlayerId(1)))
    });
}

fn bench_movegen(c: &mut Criterion) {
    let state = midgame();
    c.bench_function("legal_placements_midgame", |b| {
        b.iter(|| legal_placements(black_box(&state)))
    });
}

fn bench_alpha_beta(c: &mut Criterion) {
    let state = midgame();
    let eval = evaluator(&state);
    let mut group = c.benchmark_group("alpha_beta");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));
    for depth in 1..=2 {
        group.bench_function(format!("depth_{}", depth), |b| {
            b.iter(|| {
                let mut stats = SearchStats::default();
                alpha_beta(
                    black_box(&state),
                    depth,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    true,
                    &eval,
                    &mut stats,
                )
            })
        });
    }
    group.finish();
}

fn bench_compute_action(c: &mut Criterion) {
    let state = midgame();
    let config = AgentConfig {
        depth_tiers: Vec::new(),
        fallback_depth: 1,
        ..AgentConfig::default()
    };
    c.bench_function("compute_action_depth_1", |b| {
        b.iter(|| {
            let mut agent = Agent::new(state.to_move(), config.clone());
            agent.compute_action(black_box(&state), Duration::ZERO)
        })
    });
    assert!(!state.is_terminal());
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_formation_counter,
    bench_movegen,
    bench_alpha_beta,
    bench_compute_action
);
criterion_main!(benches);
