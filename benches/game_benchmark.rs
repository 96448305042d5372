//! Benchmarks for running complete sessions.
//!
//! This benchmarks the full scenario-to-verdict loop - the hot path for
//! batch runs.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use melee::batch::run_batch;
use melee::run_session;
use melee::scenario::{CoinSpawn, CommandRecord, FigureSpawn, Scenario};

/// Build a scenario that keeps both teams busy: clones, style toggles,
/// and a sweep across a coin row.
fn busy_scenario(command_repeats: usize) -> Scenario {
    let mut commands = vec![
        CommandRecord {
            role: "GREEN".to_string(),
            action: "COPY".to_string(),
        },
        CommandRecord {
            role: "RED".to_string(),
            action: "COPY".to_string(),
        },
        CommandRecord {
            role: "GREEN".to_string(),
            action: "STYLE".to_string(),
        },
    ];
    for _ in 0..command_repeats {
        for (role, action) in [
            ("GREEN", "RIGHT"),
            ("RED", "LEFT"),
            ("GREENCLONE", "DOWN"),
            ("REDCLONE", "UP"),
            ("GREEN", "LEFT"),
            ("RED", "RIGHT"),
            ("GREENCLONE", "UP"),
            ("REDCLONE", "DOWN"),
        ] {
            commands.push(CommandRecord {
                role: role.to_string(),
                action: action.to_string(),
            });
        }
    }

    Scenario {
        size: 9,
        green: FigureSpawn { y: 1, x: 3 },
        red: FigureSpawn { y: 9, x: 7 },
        coins: (1..=5)
            .map(|i| CoinSpawn {
                y: 5,
                x: i,
                value: u32::from(i),
            })
            .collect(),
        commands,
    }
}

fn bench_single_session(c: &mut Criterion) {
    let scenario = busy_scenario(25);

    c.bench_function("session_200_commands", |b| {
        b.iter(|| {
            let report = run_session(black_box(&scenario));
            black_box(report)
        });
    });
}

fn bench_scenario_parse(c: &mut Criterion) {
    let input = "5  1 2  5 4  3  1 5 3  3 3 8  5 1 2  4  \
                 GREEN COPY  RED LEFT  GREENCLONE DOWN  GREEN STYLE";

    c.bench_function("scenario_parse", |b| {
        b.iter(|| {
            let scenario = Scenario::parse(black_box(input));
            black_box(scenario)
        });
    });
}

fn bench_batch(c: &mut Criterion) {
    let scenarios: Vec<Scenario> = (0..100).map(|_| busy_scenario(10)).collect();

    c.bench_function("batch_100_sessions", |b| {
        b.iter(|| {
            let results = run_batch(black_box(&scenarios));
            black_box(results)
        });
    });
}

criterion_group!(
    benches,
    bench_single_session,
    bench_scenario_parse,
    bench_batch
);
criterion_main!(benches);
