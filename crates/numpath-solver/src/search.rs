use numpath_core::{Grid, GridSize, MoveRules, Neighbors, ObstacleSet, Path, Position, Topology};
use rand::{Rng, seq::SliceRandom as _};

use crate::{SearchError, SearchLimits, SearchStats};

/// Randomized Hamiltonian path finder.
///
/// `PathFinder` runs a depth-first backtracking search over the free cells of a
/// grid. Both the order in which start cells are tried and the order in which
/// neighbors are explored are shuffled with the caller's random source, so
/// repeated calls produce varied paths while a seeded source reproduces them.
///
/// Each start attempt is bounded by [`SearchLimits::step_budget`]; when no start
/// is given, at most [`SearchLimits::max_start_candidates`] distinct starts are
/// tried before the search reports [`SearchError::NotFound`].
///
/// # Examples
///
/// ```
/// use numpath_core::{GridSize, ObstacleSet, Topology};
/// use numpath_solver::PathFinder;
///
/// let size = GridSize::new(3, 4)?;
/// let finder = PathFinder::new(Topology::Orthogonal);
/// let path = finder.find(size, &ObstacleSet::new(), None, &mut rand::rng())?;
///
/// assert_eq!(path.len(), 12);
/// assert!(path.check_hamiltonian(size, &ObstacleSet::new(), Topology::Orthogonal).is_ok());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathFinder {
    topology: Topology,
    limits: SearchLimits,
}

impl PathFinder {
    /// Creates a finder with the default limits for `topology`.
    #[must_use]
    pub const fn new(topology: Topology) -> Self {
        Self {
            topology,
            limits: SearchLimits::for_topology(topology),
        }
    }

    /// Creates a finder with explicit limits.
    #[must_use]
    pub const fn with_limits(topology: Topology, limits: SearchLimits) -> Self {
        Self { topology, limits }
    }

    /// Returns the movement topology searched.
    #[must_use]
    pub const fn topology(&self) -> Topology {
        self.topology
    }

    /// Returns the search limits.
    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Creates an empty statistics object.
    #[must_use]
    pub fn new_stats(&self) -> SearchStats {
        SearchStats::default()
    }

    /// Finds a path visiting every non-obstacle cell exactly once.
    ///
    /// If `start` is given only that cell is tried; otherwise randomly chosen
    /// free cells are. A board with no free cells yields the empty path.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidObstacles`] if an obstacle is off the board.
    /// - [`SearchError::StartOutOfBounds`] or [`SearchError::InvalidStart`] if
    ///   the explicit start is off the board or blocked.
    /// - [`SearchError::NotFound`] if every start failed or ran out of budget.
    pub fn find<R>(
        &self,
        size: GridSize,
        obstacles: &ObstacleSet,
        start: Option<Position>,
        rng: &mut R,
    ) -> Result<Path, SearchError>
    where
        R: Rng + ?Sized,
    {
        let mut stats = self.new_stats();
        self.find_with_stats(size, obstacles, start, rng, &mut stats)
    }

    /// Same as [`PathFinder::find`], accumulating counters into `stats`.
    ///
    /// # Errors
    ///
    /// See [`PathFinder::find`].
    pub fn find_with_stats<R>(
        &self,
        size: GridSize,
        obstacles: &ObstacleSet,
        start: Option<Position>,
        rng: &mut R,
        stats: &mut SearchStats,
    ) -> Result<Path, SearchError>
    where
        R: Rng + ?Sized,
    {
        let mut grid = Grid::with_obstacles(size, obstacles)?;
        let target = grid.open_count();
        log::trace!(
            "searching {size} {} grid, {} obstacles, target length {target}",
            self.topology,
            obstacles.len()
        );
        if target == 0 {
            return Ok(Path::new());
        }

        let starts = match start {
            Some(position) => {
                if !size.contains(position) {
                    return Err(SearchError::StartOutOfBounds { position, size });
                }
                if grid.is_obstacle(position) {
                    return Err(SearchError::InvalidStart { position });
                }
                vec![position]
            }
            None => {
                let mut candidates: Vec<_> = grid.free_positions().collect();
                candidates.shuffle(rng);
                candidates.truncate(self.limits.max_start_candidates);
                candidates
            }
        };

        for start in starts {
            stats.attempts += 1;
            let mut attempt = Attempt::new(&mut grid, self.topology.rules(), target, self.limits);
            let outcome = attempt.run(start, rng);
            stats.total_steps += attempt.steps;
            match outcome {
                Outcome::Found(path) => {
                    log::debug!(
                        "found {} path on {size} from {start} after {} attempts, {} steps",
                        self.topology,
                        stats.attempts,
                        stats.total_steps
                    );
                    return Ok(path);
                }
                Outcome::Exhausted => {
                    stats.exhausted_attempts += 1;
                    log::trace!("start {start} ran out of budget");
                }
                Outcome::DeadEnd => {
                    log::trace!("start {start} has no path");
                }
            }
            debug_assert_eq!(grid.free_count(), target, "failed attempt left residue");
        }

        log::debug!(
            "no {} path on {size} after {} attempts, {} steps",
            self.topology,
            stats.attempts,
            stats.total_steps
        );
        Err(SearchError::NotFound)
    }
}

/// Finds a Hamiltonian path with the default limits for `topology`.
///
/// # Errors
///
/// See [`PathFinder::find`].
pub fn find_hamiltonian_path<R>(
    size: GridSize,
    obstacles: &ObstacleSet,
    topology: Topology,
    start: Option<Position>,
    rng: &mut R,
) -> Result<Path, SearchError>
where
    R: Rng + ?Sized,
{
    PathFinder::new(topology).find(size, obstacles, start, rng)
}

#[derive(Debug)]
enum Outcome {
    Found(Path),
    DeadEnd,
    Exhausted,
}

#[derive(Debug)]
struct Frame {
    candidates: Neighbors,
    next: usize,
}

/// A single depth-first search from one start cell.
///
/// The path under construction and the stack of untried neighbors are kept
/// explicitly; every cell entered is marked visited in the grid and unmarked when
/// its frame is popped, so a failed attempt leaves the grid as it found it.
#[derive(Debug)]
struct Attempt<'a> {
    grid: &'a mut Grid,
    rules: &'static dyn MoveRules,
    target: usize,
    step_budget: usize,
    steps: usize,
    path: Path,
    stack: Vec<Frame>,
}

impl<'a> Attempt<'a> {
    fn new(
        grid: &'a mut Grid,
        rules: &'static dyn MoveRules,
        target: usize,
        limits: SearchLimits,
    ) -> Self {
        Self {
            grid,
            rules,
            target,
            step_budget: limits.step_budget,
            steps: 0,
            path: Path::with_capacity(target),
            stack: Vec::with_capacity(target),
        }
    }

    fn run<R>(&mut self, start: Position, rng: &mut R) -> Outcome
    where
        R: Rng + ?Sized,
    {
        if self.step_budget == 0 {
            return Outcome::Exhausted;
        }
        self.enter(start, rng);
        if self.path.len() == self.target {
            return Outcome::Found(std::mem::take(&mut self.path));
        }

        loop {
            let Some(frame) = self.stack.last_mut() else {
                return Outcome::DeadEnd;
            };
            let next = frame.candidates.get(frame.next).copied();
            frame.next += 1;

            let Some(next) = next else {
                self.leave();
                continue;
            };
            if !self.grid.is_free(next) || !self.rules.accepts_extension(self.path.as_slice(), next)
            {
                continue;
            }
            if self.steps >= self.step_budget {
                self.unwind();
                return Outcome::Exhausted;
            }

            self.enter(next, rng);
            if self.path.len() == self.target {
                return Outcome::Found(std::mem::take(&mut self.path));
            }
        }
    }

    fn enter<R>(&mut self, pos: Position, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.steps += 1;
        self.grid.mark_visited(pos);
        self.path.push(pos);

        let mut candidates: Neighbors = self
            .rules
            .neighbors(pos, self.grid.size())
            .into_iter()
            .filter(|&next| self.grid.is_free(next))
            .collect();
        candidates.as_mut_slice().shuffle(rng);
        self.stack.push(Frame {
            candidates,
            next: 0,
        });
    }

    fn leave(&mut self) {
        self.stack.pop();
        if let Some(pos) = self.path.pop() {
            self.grid.unmark_visited(pos);
        }
    }

    fn unwind(&mut self) {
        while !self.stack.is_empty() {
            self.leave();
        }
    }
}
