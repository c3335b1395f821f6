//! Criterion benchmarks for grid construction and reachability.
//! Focus sizes: square networks with side n in {8, 32, 128, 512}.
//! Results: by default under target/criterion; to store elsewhere, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p pipeflow

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use pipeflow::api::{draw_network, search, solve, Grid, NetworkCfg, ReplayToken, SolveCfg};

fn network(n: usize, seed: u64) -> Vec<pipeflow::ElementRecord> {
    let cfg = NetworkCfg {
        rows: n,
        cols: n,
        pipe_density: 0.85,
        sinks: 26,
    };
    draw_network(&cfg, ReplayToken::new(seed, 0))
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("network");
    for &n in &[8usize, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::new("grid_build", n), &n, |b, &n| {
            let recs = network(n, 41);
            b.iter(|| Grid::from_records(&recs, SolveCfg::default()).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("search", n), &n, |b, &n| {
            b.iter_batched(
                || Grid::from_records(&network(n, 42), SolveCfg::default()).unwrap(),
                |grid| {
                    let _reach = search(&grid);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("solve", n), &n, |b, &n| {
            let recs = network(n, 43);
            b.iter(|| solve(&recs).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
