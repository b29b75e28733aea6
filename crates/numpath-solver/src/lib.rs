//! Hamiltonian path search for numpath boards.
//!
//! A puzzle's solution is a path that visits every non-obstacle cell exactly once.
//! [`PathFinder`] finds such a path with a randomized depth-first search:
//!
//! - start cells and neighbor order are shuffled by the caller's random source,
//!   so a seeded source reproduces the same path
//! - each start attempt is bounded by a step budget, and only a limited number
//!   of starts are tried ([`SearchLimits`])
//! - under [`Topology::Diagonal`](numpath_core::Topology::Diagonal) an extension
//!   is rejected if its segment would cross an earlier one
//!
//! Failing to find a path within the limits is reported as
//! [`SearchError::NotFound`]; callers such as the puzzle generator treat it as a
//! retryable outcome.
//!
//! # Examples
//!
//! ```
//! use numpath_core::{GridSize, ObstacleSet, Position, Topology};
//! use numpath_solver::{PathFinder, SearchError};
//!
//! let size = GridSize::new(1, 3)?;
//! let obstacles = ObstacleSet::new();
//! let finder = PathFinder::new(Topology::Orthogonal);
//!
//! // A corridor can only be covered from one of its ends.
//! let path = finder.find(size, &obstacles, Some(Position::new(0, 0)), &mut rand::rng())?;
//! assert_eq!(path.last(), Some(Position::new(0, 2)));
//!
//! let result = finder.find(size, &obstacles, Some(Position::new(0, 1)), &mut rand::rng());
//! assert_eq!(result, Err(SearchError::NotFound));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, limits::*, search::*};

mod error;
mod limits;
mod search;
pub mod testing;
