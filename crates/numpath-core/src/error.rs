//! Error types for the core data structures.

use crate::{GridSize, Position};

/// Errors raised while constructing core values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CoreError {
    /// A grid must have at least one row and one column.
    #[display("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    EmptyGrid {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A position lies outside the grid.
    #[display("position {position} is outside the {size} grid")]
    OutOfBounds {
        /// Offending position.
        position: Position,
        /// Grid the position was checked against.
        size: GridSize,
    },
    /// The same obstacle cell was listed twice.
    #[display("obstacle {position} is listed more than once")]
    DuplicateObstacle {
        /// Repeated position.
        position: Position,
    },
}

/// Reasons a sequence of positions is not a legal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PathError {
    /// A step lies outside the grid.
    #[display("step {step} at {position} is outside the grid")]
    OutOfBounds {
        /// 1-based step index.
        step: usize,
        /// Offending position.
        position: Position,
    },
    /// A step lands on an obstacle cell.
    #[display("step {step} at {position} is an obstacle")]
    Obstacle {
        /// 1-based step index.
        step: usize,
        /// Offending position.
        position: Position,
    },
    /// A cell is visited twice.
    #[display("step {step} revisits {position}")]
    Revisited {
        /// 1-based step index of the second visit.
        step: usize,
        /// Repeated position.
        position: Position,
    },
    /// Two consecutive steps are not neighbors under the topology.
    #[display("step {step} moves from {from} to non-adjacent {to}")]
    NotAdjacent {
        /// 1-based step index of `to`.
        step: usize,
        /// Previous position.
        from: Position,
        /// Offending position.
        to: Position,
    },
    /// The segment ending at `step` crosses an earlier segment.
    #[display("segment ending at step {step} ({position}) crosses an earlier segment")]
    Crossing {
        /// 1-based step index where the crossing segment ends.
        step: usize,
        /// End position of the crossing segment.
        position: Position,
    },
    /// The path does not cover every free cell.
    #[display("path has {actual} steps, expected {expected}")]
    WrongLength {
        /// Number of free cells.
        expected: usize,
        /// Path length.
        actual: usize,
    },
}
