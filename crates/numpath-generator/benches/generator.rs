//! Benchmarks for numpath puzzle generation.
//!
//! This benchmark suite measures the complete generation cycle (obstacle
//! placement, solution search and masking) with `PuzzleGenerator`.
//!
//! # Benchmarks
//!
//! - **`generator_orthogonal`**: 5x5 puzzles with two obstacles, played with
//!   orthogonal moves.
//! - **`generator_diagonal`**: the same puzzles played with diagonal moves.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple cases:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use numpath_core::{GridSize, Topology};
use numpath_generator::{GeneratorConfig, HiddenRate, PuzzleGenerator, PuzzleParams, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn params() -> PuzzleParams {
    PuzzleParams {
        size: GridSize::new(5, 5).unwrap(),
        hidden_rate: HiddenRate::new(0.75).unwrap(),
        obstacle_count: 2,
    }
}

fn bench_generator(c: &mut Criterion, name: &str, topology: Topology) {
    let generator = PuzzleGenerator::new(GeneratorConfig::for_topology(topology));
    let params = params();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(params, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_orthogonal(c: &mut Criterion) {
    bench_generator(c, "generator_orthogonal", Topology::Orthogonal);
}

fn bench_generator_diagonal(c: &mut Criterion) {
    bench_generator(c, "generator_diagonal", Topology::Diagonal);
}

criterion_group!(benches, bench_generator_orthogonal, bench_generator_diagonal);
criterion_main!(benches);
