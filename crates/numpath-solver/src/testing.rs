//! Test utilities for path search.
//!
//! Boards are written as text: one line per row, `.` for a free cell and `#`
//! for an obstacle. Blank lines and surrounding whitespace are ignored, so boards
//! can be indented inside raw strings.
//!
//! # Example
//!
//! ```
//! # use numpath_core::Topology;
//! # use numpath_solver::{PathFinder, testing};
//! let (size, obstacles) = testing::parse_board("
//!     ..#
//!     ...
//! ");
//! let path = PathFinder::new(Topology::Orthogonal)
//!     .find(size, &obstacles, None, &mut rand::rng())
//!     .unwrap();
//! testing::assert_hamiltonian(&path, size, &obstacles, Topology::Orthogonal);
//! ```

use numpath_core::{GridSize, ObstacleSet, Path, Position, Topology, geometry};

/// Parses a text board into its size and obstacle set.
///
/// # Panics
///
/// Panics if the board is empty, rows have different widths, or a character
/// other than `.` or `#` appears.
#[track_caller]
#[must_use]
pub fn parse_board(s: &str) -> (GridSize, ObstacleSet) {
    let rows: Vec<&str> = s
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let cols = rows.first().map_or(0, |row| row.chars().count());
    let size = GridSize::new(rows.len(), cols).unwrap();

    let mut blocked = Vec::new();
    for (r, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), cols, "row {r} has the wrong width");
        for (c, ch) in row.chars().enumerate() {
            match ch {
                '.' => {}
                '#' => blocked.push(Position::new(r, c)),
                _ => panic!("unexpected board character {ch:?} at ({r}, {c})"),
            }
        }
    }
    let obstacles = ObstacleSet::from_positions(size, blocked).unwrap();
    (size, obstacles)
}

/// Asserts that `path` visits every free cell once using legal moves.
///
/// # Panics
///
/// Panics with the first violation found.
#[track_caller]
pub fn assert_hamiltonian(
    path: &Path,
    size: GridSize,
    obstacles: &ObstacleSet,
    topology: Topology,
) {
    if let Err(err) = path.check_hamiltonian(size, obstacles, topology) {
        panic!(
            "not a {topology} Hamiltonian path on {size}: {err}\npath: {:?}",
            path.as_slice()
        );
    }
}

/// Asserts that no two segments of `path` cross.
///
/// # Panics
///
/// Panics with the first step whose segment crosses an earlier one.
#[track_caller]
pub fn assert_non_crossing(path: &Path) {
    if let Some(step) = geometry::first_crossing(path.as_slice()) {
        panic!(
            "path crosses itself at step {step}\npath: {:?}",
            path.as_slice()
        );
    }
}
