use numpath_core::{CoreError, GridSize, Position};

/// Errors returned by [`PathFinder`](crate::PathFinder).
///
/// [`SearchError::NotFound`] is the normal "infeasible" outcome. The other
/// variants are caller errors and are reported before any search happens.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum SearchError {
    /// The explicit start position is an obstacle.
    #[display("start position {position} is an obstacle")]
    InvalidStart {
        /// Requested start.
        position: Position,
    },
    /// The explicit start position is off the board.
    #[display("start position {position} is outside the {size} grid")]
    StartOutOfBounds {
        /// Requested start.
        position: Position,
        /// Board dimensions.
        size: GridSize,
    },
    /// The obstacle set does not fit the board.
    #[display("invalid obstacles: {_0}")]
    InvalidObstacles(#[from] CoreError),
    /// No Hamiltonian path was found within the search limits.
    #[display("no Hamiltonian path found")]
    NotFound,
}
