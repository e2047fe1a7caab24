use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bowling_score::core::ScoringConfig;
use bowling_score::scoring::ScoringEngine;
use bowling_score::sim::simulate_game;

fn bench_calculate_score(c: &mut Criterion) {
    let engine = simulate_game(42, ScoringConfig::regulation()).expect("simulated game");

    c.bench_function("calculate_score", |b| {
        b.iter(|| black_box(&engine).calculate_score())
    });

    c.bench_function("running_totals", |b| {
        b.iter(|| black_box(&engine).running_totals())
    });
}

fn bench_record_full_game(c: &mut Criterion) {
    let pins: Vec<i32> = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1].to_vec();

    c.bench_function("record_full_game", |b| {
        b.iter(|| {
            let mut engine = ScoringEngine::with_config(ScoringConfig::regulation());
            for &p in &pins {
                let _ = engine.record_roll(black_box(p));
            }
            engine
        })
    });
}

criterion_group!(benches, bench_calculate_score, bench_record_full_game);
criterion_main!(benches);
