use numpath_core::PathError;

/// Why a path edit cannot be applied.
///
/// Returned by the `*_capability` queries of [`Game`](crate::Game) and wrapped
/// in [`GameError::Blocked`] by the mutating operations.
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
pub enum InputBlockReason {
    /// The puzzle has already been solved.
    #[display("the puzzle is already solved")]
    Solved,
    /// The cell is off the board.
    #[display("the cell is outside the board")]
    OutOfBounds,
    /// The cell is an obstacle.
    #[display("the cell is an obstacle")]
    Obstacle,
    /// Step 1 is visible and the path must start there.
    #[display("the path must start on the cell showing 1")]
    NotFirstHint,
    /// No path has been started.
    #[display("no path has been started")]
    NotStarted,
    /// The cell is not adjacent to the end of the path.
    #[display("the cell is not adjacent to the end of the path")]
    NotAdjacent,
    /// The cell is already on the path.
    #[display("the cell is already on the path")]
    AlreadyVisited,
    /// The new segment would cross the path.
    #[display("the move would cross the path")]
    Crossing,
}

/// Errors from mutating a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The edit is not allowed in the current state.
    #[display("input blocked: {_0}")]
    Blocked(InputBlockReason),
    /// A replacement path breaks the movement rules.
    #[display("invalid path: {_0}")]
    InvalidPath(PathError),
}

impl From<InputBlockReason> for GameError {
    fn from(reason: InputBlockReason) -> Self {
        Self::Blocked(reason)
    }
}

impl From<PathError> for GameError {
    fn from(err: PathError) -> Self {
        Self::InvalidPath(err)
    }
}

/// Errors from [`GameSession`](crate::GameSession) operations.
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
pub enum SessionError {
    /// Every generation cycle for the level failed.
    #[display("failed to generate level {level} after {attempts} attempts")]
    GenerationFailed {
        /// Requested level.
        level: usize,
        /// Number of generation cycles run.
        attempts: usize,
    },
    /// There is no level before level 1.
    #[display("already at the first level")]
    AlreadyFirstLevel,
    /// No game has been started yet.
    #[display("no game in progress")]
    NoGame,
}
