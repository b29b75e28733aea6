use numpath_core::{GridSize, ObstacleSet, Position, Topology};
use numpath_solver::{PathFinder, SearchError, SearchLimits};
use rand::{Rng, seq::SliceRandom as _};

/// Errors returned by [`ObstaclePlacer::place`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum PlacementError {
    /// The requested obstacles would leave no free cell.
    #[display("{count} obstacles leave no free cell on a board of {cells} cells")]
    TooManyObstacles {
        /// Requested obstacle count.
        count: usize,
        /// Total number of cells.
        cells: usize,
    },
    /// No candidate layout admitted a Hamiltonian path.
    #[display("no valid layout of {count} obstacles found in {attempts} attempts")]
    AttemptsExhausted {
        /// Requested obstacle count.
        count: usize,
        /// Number of layouts tried.
        attempts: usize,
    },
    /// Validating a layout failed for a reason other than infeasibility.
    #[display("obstacle validation failed: {_0}")]
    Validation(SearchError),
}

impl From<SearchError> for PlacementError {
    fn from(err: SearchError) -> Self {
        Self::Validation(err)
    }
}

/// Chooses obstacle cells that still leave a Hamiltonian path.
///
/// Each attempt blocks a uniformly random subset of cells and accepts it if
/// path search succeeds on the remaining cells. The topology of the
/// validating search determines which layouts count as solvable.
///
/// # Examples
///
/// ```
/// use numpath_core::{GridSize, Topology};
/// use numpath_generator::ObstaclePlacer;
///
/// let size = GridSize::new(4, 4)?;
/// let placer = ObstaclePlacer::new(Topology::Orthogonal);
/// let obstacles = placer.place(size, 2, &mut rand::rng())?;
/// assert_eq!(obstacles.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstaclePlacer {
    finder: PathFinder,
    max_attempts: usize,
}

impl ObstaclePlacer {
    /// Default number of layouts tried.
    pub const DEFAULT_ATTEMPTS: usize = 50;

    /// Creates a placer validating with `topology` and default limits.
    #[must_use]
    pub const fn new(topology: Topology) -> Self {
        Self {
            finder: PathFinder::new(topology),
            max_attempts: Self::DEFAULT_ATTEMPTS,
        }
    }

    /// Creates a placer validating with the given finder.
    #[must_use]
    pub const fn with_finder(finder: PathFinder, max_attempts: usize) -> Self {
        Self {
            finder,
            max_attempts,
        }
    }

    /// Creates a placer validating with `topology` under `limits`.
    #[must_use]
    pub const fn with_limits(
        topology: Topology,
        limits: SearchLimits,
        max_attempts: usize,
    ) -> Self {
        Self::with_finder(PathFinder::with_limits(topology, limits), max_attempts)
    }

    /// Returns the topology layouts are validated against.
    #[must_use]
    pub const fn topology(&self) -> Topology {
        self.finder.topology()
    }

    /// Returns the number of layouts tried before giving up.
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Places `count` obstacles on a board of `size`.
    ///
    /// A count of zero yields the empty set without searching.
    ///
    /// # Errors
    ///
    /// - [`PlacementError::TooManyObstacles`] if `count` covers the whole board.
    /// - [`PlacementError::AttemptsExhausted`] if no layout validated.
    pub fn place<R>(
        &self,
        size: GridSize,
        count: usize,
        rng: &mut R,
    ) -> Result<ObstacleSet, PlacementError>
    where
        R: Rng + ?Sized,
    {
        if count == 0 {
            return Ok(ObstacleSet::new());
        }
        let cells = size.cell_count();
        if count >= cells {
            return Err(PlacementError::TooManyObstacles { count, cells });
        }

        let mut candidates: Vec<Position> = size.positions().collect();
        for attempt in 1..=self.max_attempts {
            candidates.shuffle(rng);
            let obstacles = ObstacleSet::from_positions(size, candidates[..count].iter().copied())
                .map_err(SearchError::from)?;

            match self.finder.find(size, &obstacles, None, rng) {
                Ok(_) => {
                    log::debug!("placed {count} obstacles on {size} after {attempt} attempts");
                    return Ok(obstacles);
                }
                Err(SearchError::NotFound) => {
                    log::trace!("obstacle layout {attempt} on {size} has no path");
                }
                Err(err) => return Err(err.into()),
            }
        }

        log::debug!(
            "no valid layout of {count} obstacles on {size} in {} attempts",
            self.max_attempts
        );
        Err(PlacementError::AttemptsExhausted {
            count,
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use numpath_solver::testing::assert_hamiltonian;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn size(rows: usize, cols: usize) -> GridSize {
        GridSize::new(rows, cols).unwrap()
    }

    #[test]
    fn test_zero_obstacles() {
        let placer = ObstaclePlacer::new(Topology::Orthogonal);
        let obstacles = placer
            .place(size(3, 3), 0, &mut Pcg64::seed_from_u64(0))
            .unwrap();
        assert!(obstacles.is_empty());
    }

    #[test]
    fn test_full_board_rejected() {
        let placer = ObstaclePlacer::new(Topology::Orthogonal);
        let mut rng = Pcg64::seed_from_u64(1);
        assert_eq!(
            placer.place(size(3, 3), 9, &mut rng),
            Err(PlacementError::TooManyObstacles { count: 9, cells: 9 })
        );
        assert!(placer.place(size(3, 3), 10, &mut rng).unwrap_err().is_too_many_obstacles());
    }

    #[test]
    fn test_placed_layouts_admit_a_path() {
        let board = size(5, 5);
        for topology in Topology::ALL {
            let placer = ObstaclePlacer::new(topology);
            let finder = PathFinder::new(topology);
            for seed in 0..10 {
                let mut rng = Pcg64::seed_from_u64(seed);
                let obstacles = placer.place(board, 2, &mut rng).unwrap();
                assert_eq!(obstacles.len(), 2);
                let path = finder.find(board, &obstacles, None, &mut rng).unwrap();
                assert_hamiltonian(&path, board, &obstacles, topology);
            }
        }
    }

    #[test]
    fn test_attempts_exhausted() {
        let limits = SearchLimits {
            max_start_candidates: 1,
            step_budget: 0,
        };
        let placer = ObstaclePlacer::with_limits(Topology::Orthogonal, limits, 5);
        assert_eq!(placer.max_attempts(), 5);
        assert_eq!(
            placer.place(size(3, 3), 1, &mut Pcg64::seed_from_u64(2)),
            Err(PlacementError::AttemptsExhausted {
                count: 1,
                attempts: 5
            })
        );
    }

    #[test]
    fn test_same_seed_same_layout() {
        let placer = ObstaclePlacer::new(Topology::Diagonal);
        let a = placer.place(size(4, 4), 3, &mut Pcg64::seed_from_u64(7));
        let b = placer.place(size(4, 4), 3, &mut Pcg64::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
