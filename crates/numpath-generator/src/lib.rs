//! Puzzle generation for numpath.
//!
//! Generating a puzzle runs three stages, each with its own random stream
//! derived from a [`PuzzleSeed`]:
//!
//! 1. [`ObstaclePlacer`] blocks a random set of cells, retrying until path
//!    search confirms the remaining cells still admit a Hamiltonian path.
//! 2. [`PathFinder`](numpath_solver::PathFinder) finds the solution path.
//! 3. [`mask_puzzle`] hides a [`HiddenRate`] fraction of the solution steps;
//!    the rest become the hints shown to the player.
//!
//! [`PuzzleGenerator`] ties the stages together and records the seed in the
//! resulting [`GeneratedPuzzle`], so any puzzle can be regenerated exactly.

pub use self::{generator::*, mask::*, obstacles::*, seed::*};

mod generator;
mod mask;
mod obstacles;
mod seed;
