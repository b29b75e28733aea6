use std::fmt::{self, Display};

use numpath_core::{GridSize, HintMap, ObstacleSet, Path, Position, Topology};
use numpath_solver::{PathFinder, SearchError, SearchLimits};

use crate::{HiddenRate, ObstaclePlacer, PlacementError, PuzzleSeed, mask_puzzle};

/// Which topology candidate obstacle layouts are validated against.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ObstacleValidation {
    /// Validate with the topology the puzzle is played in.
    #[default]
    PlayTopology,
    /// Always validate with orthogonal moves.
    ///
    /// Every orthogonal path is also a diagonal one, so this only rejects more
    /// layouts when playing diagonally.
    Orthogonal,
}

impl ObstacleValidation {
    /// Returns the validating topology for a puzzle played in `play`.
    #[must_use]
    pub const fn topology(self, play: Topology) -> Topology {
        match self {
            Self::PlayTopology => play,
            Self::Orthogonal => Topology::Orthogonal,
        }
    }
}

/// Generation parameters that vary from puzzle to puzzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuzzleParams {
    /// Board dimensions.
    pub size: GridSize,
    /// Fraction of solution steps hidden from the player.
    pub hidden_rate: HiddenRate,
    /// Number of obstacle cells.
    pub obstacle_count: usize,
}

/// Generator settings that stay fixed across puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Topology the puzzles are played in.
    pub topology: Topology,
    /// Limits for the solution search.
    pub search: SearchLimits,
    /// Obstacle layouts tried per generation.
    pub obstacle_attempts: usize,
    /// Solution searches tried per obstacle layout.
    pub path_attempts: usize,
    /// Topology used to validate obstacle layouts.
    pub obstacle_validation: ObstacleValidation,
}

impl GeneratorConfig {
    /// Default number of solution searches per layout.
    pub const DEFAULT_PATH_ATTEMPTS: usize = 10;

    /// Returns the default configuration for puzzles played in `topology`.
    #[must_use]
    pub const fn for_topology(topology: Topology) -> Self {
        Self {
            topology,
            search: SearchLimits::for_topology(topology),
            obstacle_attempts: ObstaclePlacer::DEFAULT_ATTEMPTS,
            path_attempts: Self::DEFAULT_PATH_ATTEMPTS,
            obstacle_validation: ObstacleValidation::PlayTopology,
        }
    }

    fn placer(&self) -> ObstaclePlacer {
        let topology = self.obstacle_validation.topology(self.topology);
        let limits = SearchLimits {
            step_budget: self.search.step_budget,
            ..SearchLimits::for_topology(topology)
        };
        ObstaclePlacer::with_limits(topology, limits, self.obstacle_attempts)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_topology(Topology::default())
    }
}

/// Errors returned by [`PuzzleGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// No obstacle layout could be placed.
    #[display("obstacle placement failed: {_0}")]
    Placement(PlacementError),
    /// The solution search kept failing on the chosen layout.
    #[display("no solution path found in {attempts} attempts")]
    PathNotFound {
        /// Number of searches tried.
        attempts: usize,
    },
    /// The solution search rejected its input.
    #[display("solution search failed: {_0}")]
    Search(SearchError),
}

impl From<PlacementError> for GeneratorError {
    fn from(err: PlacementError) -> Self {
        Self::Placement(err)
    }
}

impl From<SearchError> for GeneratorError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}

/// A generated puzzle together with its solution.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPuzzle {
    /// Board dimensions.
    pub size: GridSize,
    /// Topology the puzzle is played in.
    pub topology: Topology,
    /// Blocked cells.
    pub obstacles: ObstacleSet,
    /// Step numbers shown to the player.
    pub hints: HintMap,
    /// The path the hints were taken from.
    pub solution: Path,
    /// Hidden rate the hints were masked with.
    pub hidden_rate: HiddenRate,
    /// Seed the puzzle was generated from.
    pub seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns the length of a complete path.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.solution.len()
    }

    /// Returns a renderer showing only the hints.
    #[must_use]
    pub fn problem(&self) -> BoardDisplay<'_> {
        BoardDisplay {
            puzzle: self,
            solution: false,
        }
    }

    /// Returns a renderer showing every step of the solution.
    #[must_use]
    pub fn answer(&self) -> BoardDisplay<'_> {
        BoardDisplay {
            puzzle: self,
            solution: true,
        }
    }
}

/// Text rendering of a [`GeneratedPuzzle`] board.
///
/// One line per row; obstacles print as `#` and hidden steps as `.`.
#[derive(Debug, Clone, Copy)]
pub struct BoardDisplay<'a> {
    puzzle: &'a GeneratedPuzzle,
    solution: bool,
}

impl Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let puzzle = self.puzzle;
        let width = puzzle.total_steps().max(1).to_string().len();
        for row in 0..puzzle.size.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..puzzle.size.cols() {
                let pos = Position::new(row, col);
                if col > 0 {
                    f.write_str(" ")?;
                }
                let step = if self.solution {
                    puzzle.solution.step_of(pos)
                } else {
                    puzzle.hints.step_at(pos)
                };
                match step {
                    _ if puzzle.obstacles.contains(pos) => write!(f, "{:>width$}", "#")?,
                    Some(step) => write!(f, "{step:>width$}")?,
                    None => write!(f, "{:>width$}", ".")?,
                }
            }
        }
        Ok(())
    }
}

/// Generates puzzles: obstacles, then a solution path, then hints.
///
/// Every stage draws from its own stream derived from a [`PuzzleSeed`], so
/// [`PuzzleGenerator::generate_with_seed`] reproduces a puzzle exactly.
///
/// # Examples
///
/// ```
/// use numpath_core::GridSize;
/// use numpath_generator::{HiddenRate, PuzzleGenerator, PuzzleParams};
///
/// let generator = PuzzleGenerator::default();
/// let params = PuzzleParams {
///     size: GridSize::new(4, 4)?,
///     hidden_rate: HiddenRate::new(0.6)?,
///     obstacle_count: 1,
/// };
///
/// let puzzle = generator.generate(params)?;
/// assert_eq!(puzzle.total_steps(), 15);
/// assert_eq!(puzzle.hints.len(), 15 - 9);
/// assert!(puzzle.hints.is_satisfied_by(&puzzle.solution));
///
/// let again = generator.generate_with_seed(params, puzzle.seed)?;
/// assert_eq!(again, puzzle);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_seed`].
    pub fn generate(&self, params: PuzzleParams) -> Result<GeneratedPuzzle, GeneratorError> {
        self.generate_with_seed(params, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::Placement`] if no obstacle layout was accepted.
    /// - [`GeneratorError::PathNotFound`] if every solution search failed.
    pub fn generate_with_seed(
        &self,
        params: PuzzleParams,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        let PuzzleParams {
            size,
            hidden_rate,
            obstacle_count,
        } = params;
        let topology = self.config.topology;

        let mut rng = seed.derive("obstacles").rng();
        let obstacles = self.config.placer().place(size, obstacle_count, &mut rng)?;

        let finder = PathFinder::with_limits(topology, self.config.search);
        let mut rng = seed.derive("path").rng();
        let mut solution = None;
        for attempt in 1..=self.config.path_attempts {
            match finder.find(size, &obstacles, None, &mut rng) {
                Ok(path) => {
                    solution = Some(path);
                    break;
                }
                Err(SearchError::NotFound) => {
                    log::debug!("solution search {attempt} on {size} failed");
                }
                Err(err) => return Err(err.into()),
            }
        }
        let Some(solution) = solution else {
            return Err(GeneratorError::PathNotFound {
                attempts: self.config.path_attempts,
            });
        };

        let mut rng = seed.derive("mask").rng();
        let hints = mask_puzzle(&solution, hidden_rate, &mut rng);

        log::debug!(
            "generated {size} {topology} puzzle with {} obstacles and {}/{} hints from seed {seed}",
            obstacles.len(),
            hints.len(),
            solution.len()
        );
        Ok(GeneratedPuzzle {
            size,
            topology,
            obstacles,
            hints,
            solution,
            hidden_rate,
            seed,
        })
    }
}
