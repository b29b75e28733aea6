use numpath_core::Topology;

/// Bounds that keep a path search finite.
///
/// # Examples
///
/// ```
/// use numpath_core::Topology;
/// use numpath_solver::SearchLimits;
///
/// let orthogonal = SearchLimits::for_topology(Topology::Orthogonal);
/// let diagonal = SearchLimits::for_topology(Topology::Diagonal);
/// assert!(orthogonal.max_start_candidates < diagonal.max_start_candidates);
/// assert_eq!(orthogonal.step_budget, SearchLimits::DEFAULT_STEP_BUDGET);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// How many randomly chosen start cells to try when no start is given.
    pub max_start_candidates: usize,
    /// Maximum number of cells entered during a single start attempt.
    pub step_budget: usize,
}

impl SearchLimits {
    /// Per-start step budget.
    pub const DEFAULT_STEP_BUDGET: usize = 2_000_000;

    /// Start candidates tried under orthogonal moves.
    pub const ORTHOGONAL_START_CANDIDATES: usize = 10;

    /// Start candidates tried under diagonal moves.
    pub const DIAGONAL_START_CANDIDATES: usize = 30;

    /// Returns the default limits for a topology.
    ///
    /// Diagonal search spaces are larger and benefit from more restarts.
    #[must_use]
    pub const fn for_topology(topology: Topology) -> Self {
        let max_start_candidates = match topology {
            Topology::Orthogonal => Self::ORTHOGONAL_START_CANDIDATES,
            Topology::Diagonal => Self::DIAGONAL_START_CANDIDATES,
        };
        Self {
            max_start_candidates,
            step_budget: Self::DEFAULT_STEP_BUDGET,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::for_topology(Topology::default())
    }
}

/// Counters collected while searching.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchStats {
    pub(crate) attempts: usize,
    pub(crate) total_steps: usize,
    pub(crate) exhausted_attempts: usize,
}

impl SearchStats {
    /// Returns the number of start cells tried.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Returns the number of cells entered across all attempts.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Returns how many attempts were abandoned because they ran out of budget.
    #[must_use]
    pub fn exhausted_attempts(&self) -> usize {
        self.exhausted_attempts
    }
}
