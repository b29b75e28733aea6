//! Numpath command-line front end.
//!
//! Generates the puzzle for a level and prints its board. Use `--solution`
//! to print the solved board as well.
//!
//! ```sh
//! numpath --level 5 --topology diagonal
//! ```

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use numpath_cli::BoardView;
use numpath_core::Topology;
use numpath_game::{Game, GameSession, GameSettings};
use numpath_generator::PuzzleSeed;

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
    /// Level to generate.
    #[arg(long, default_value_t = 1)]
    level: usize,

    /// Movement topology.
    #[arg(long, value_name = "KIND", default_value = "orthogonal")]
    topology: TopologyKind,

    /// Session seed (64 hex digits).
    #[arg(long)]
    seed: Option<PuzzleSeed>,

    /// Number of hidden steps to reveal before printing.
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    reveal: usize,

    /// Print the solved board as well.
    #[arg(long)]
    solution: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let settings = GameSettings::for_topology(args.topology.into());
    let mut session = match args.seed {
        Some(seed) => GameSession::with_seed(settings, seed),
        None => GameSession::new(settings),
    };

    let level = args.level;
    let game = match session.jump_to_level(level) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Failed to generate level {level}: {err}");
            return ExitCode::FAILURE;
        }
    };

    for _ in 0..args.reveal {
        match game.reveal_hint() {
            Some((pos, step)) => log::info!("revealed step {step} at {pos}"),
            None => break,
        }
    }

    print_game(level, game);

    if args.solution {
        let solution = game.solution().clone();
        if let Err(err) = game.set_player_path(solution) {
            eprintln!("Failed to apply solution: {err}");
            return ExitCode::FAILURE;
        }
        println!();
        println!("Solution:");
        print_board(game);
    }

    ExitCode::SUCCESS
}

fn print_game(level: usize, game: &Game) {
    let puzzle = game.puzzle();
    println!("Level {level}");
    println!("  size: {}", game.size());
    println!("  topology: {}", game.topology());
    println!("  obstacles: {}", game.obstacles().len());
    println!("  hints: {}/{}", game.hints().len(), game.total_steps());
    println!("  seed: {}", puzzle.seed);
    println!();
    println!("Board:");
    print_board(game);
}

fn print_board(game: &Game) {
    for line in BoardView::new(game).to_string().lines() {
        println!("  {line}");
    }
}
