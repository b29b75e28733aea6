//! Example demonstrating numpath puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a movement topology
//! - Generate a random puzzle, or reproduce one from its seed
//! - Display the puzzle, solution, and seed
//! - Sample many puzzles in parallel and report generation statistics
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Generate a diagonal 5x5 puzzle with two obstacles:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --topology diagonal --rows 5 --cols 5 --obstacles 2
//! ```
//!
//! Reproduce a puzzle from a seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Sample 1000 puzzles and report how often generation succeeds:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --samples 1000
//! ```

use std::{collections::BTreeMap, process};

use clap::{Parser, ValueEnum};
use numpath_core::{GridSize, Topology};
use numpath_generator::{
    GeneratedPuzzle, GeneratorConfig, GeneratorError, HiddenRate, PuzzleGenerator, PuzzleParams,
    PuzzleSeed,
};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TopologyKind {
    Orthogonal,
    Diagonal,
}

impl From<TopologyKind> for Topology {
    fn from(kind: TopologyKind) -> Self {
        match kind {
            TopologyKind::Orthogonal => Self::Orthogonal,
            TopologyKind::Diagonal => Self::Diagonal,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Movement topology.
    #[arg(long, value_name = "KIND", default_value = "orthogonal")]
    topology: TopologyKind,

    /// Number of rows.
    #[arg(long, default_value_t = 5)]
    rows: usize,

    /// Number of columns.
    #[arg(long, default_value_t = 5)]
    cols: usize,

    /// Fraction of steps hidden from the player.
    #[arg(long, value_name = "RATE", default_value_t = 0.75)]
    hidden_rate: f64,

    /// Number of obstacle cells.
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    obstacles: usize,

    /// Seed to reproduce (64 hex digits).
    #[arg(long)]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles to sample for statistics.
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    samples: usize,
}

fn main() {
    let args = Args::parse();

    let params = match build_params(&args) {
        Ok(params) => params,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };
    let generator = PuzzleGenerator::new(GeneratorConfig::for_topology(args.topology.into()));

    if args.samples > 0 {
        print_statistics(&generator, params, args.samples);
        return;
    }

    let result = match args.seed {
        Some(seed) => generator.generate_with_seed(params, seed),
        None => generator.generate(params),
    };
    match result {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    }
}

fn build_params(args: &Args) -> Result<PuzzleParams, String> {
    let size = GridSize::new(args.rows, args.cols).map_err(|err| err.to_string())?;
    let hidden_rate = HiddenRate::new(args.hidden_rate).map_err(|err| err.to_string())?;
    Ok(PuzzleParams {
        size,
        hidden_rate,
        obstacle_count: args.obstacles,
    })
}

fn print_statistics(generator: &PuzzleGenerator, params: PuzzleParams, samples: usize) {
    let results: Vec<Result<usize, GeneratorError>> = (0..samples)
        .into_par_iter()
        .map(|_| generator.generate(params).map(|puzzle| puzzle.hints.len()))
        .collect();

    let mut hint_counts = BTreeMap::new();
    let mut failures = BTreeMap::new();
    for result in results {
        match result {
            Ok(hints) => *hint_counts.entry(hints).or_insert(0_usize) += 1,
            Err(err) => *failures.entry(err.to_string()).or_insert(0_usize) += 1,
        }
    }

    println!("Samples: {samples}");
    println!("  Size: {}", params.size);
    println!("  Topology: {}", generator.config().topology);
    println!("  Obstacles: {}", params.obstacle_count);
    println!();
    println!("Hints:");
    for (hints, count) in &hint_counts {
        println!("  {hints}: {count}");
    }
    println!();
    println!("Failures:");
    if failures.is_empty() {
        println!("  none");
    }
    for (message, count) in &failures {
        println!("  {message}: {count}");
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Problem:");
    for line in puzzle.problem().to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("Solution:");
    for line in puzzle.answer().to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Stats:");
    println!("  topology: {}", puzzle.topology);
    println!("  hidden rate: {:.2}", puzzle.hidden_rate.get());
    println!("  hints: {}/{}", puzzle.hints.len(), puzzle.total_steps());
}
