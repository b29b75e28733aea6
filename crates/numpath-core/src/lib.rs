//! Core data structures for numpath puzzles.
//!
//! This crate provides the grid model shared by path search, puzzle generation and
//! game management.
//!
//! # Overview
//!
//! 1. **Addressing** - where things are on the board
//!    - [`position`]: 0-indexed `(row, col)` cell coordinates
//!    - [`grid`]: grid dimensions and the per-cell occupancy arena used by search
//!
//! 2. **Puzzle data** - what a puzzle instance is made of
//!    - [`obstacles`]: the fixed set of blocked cells
//!    - [`path`]: an ordered sequence of cells with 1-based step indices
//!    - [`hints`]: the visible step numbers shown to the player
//!
//! 3. **Movement** - which moves are legal
//!    - [`topology`]: orthogonal (4-way) and diagonal (8-way, non-crossing) move rules
//!    - [`geometry`]: segment intersection used by the non-crossing rule
//!
//! # Examples
//!
//! ```
//! use numpath_core::{GridSize, ObstacleSet, Path, Position, Topology};
//!
//! let size = GridSize::new(2, 2)?;
//! let obstacles = ObstacleSet::from_positions(size, [Position::new(0, 0)])?;
//!
//! let path: Path = [Position::new(0, 1), Position::new(1, 1), Position::new(1, 0)]
//!     .into_iter()
//!     .collect();
//! assert!(path.check_hamiltonian(size, &obstacles, Topology::Orthogonal).is_ok());
//! assert_eq!(path.step_of(Position::new(1, 1)), Some(2));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod geometry;
pub mod grid;
pub mod hints;
pub mod obstacles;
pub mod path;
pub mod position;
pub mod topology;

pub use self::{
    error::{CoreError, PathError},
    grid::{CellState, Grid, GridSize},
    hints::HintMap,
    obstacles::ObstacleSet,
    path::Path,
    position::Position,
    topology::{DiagonalMoves, MoveRules, Neighbors, OrthogonalMoves, Topology},
};
