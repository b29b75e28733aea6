//! Board position representation.

use std::fmt::{self, Display};

/// A cell coordinate on the board, 0-indexed.
///
/// Positions order row-major: first by `row`, then by `col`.
///
/// # Examples
///
/// ```
/// use numpath_core::Position;
///
/// let pos = Position::new(1, 2);
/// assert_eq!(pos.row(), 1);
/// assert_eq!(pos.col(), 2);
/// assert_eq!(pos.to_string(), "(1, 2)");
/// assert!(Position::new(0, 5) < Position::new(1, 0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from its row and column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (0-indexed).
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0-indexed).
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position shifted by `(dr, dc)`, or `None` if it would leave the
    /// non-negative quadrant.
    ///
    /// Upper bounds are not checked here; see [`GridSize::contains`].
    ///
    /// [`GridSize::contains`]: crate::GridSize::contains
    #[must_use]
    #[inline]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// Returns `(|drow|, |dcol|)` between two positions.
    #[must_use]
    #[inline]
    pub fn abs_delta(self, other: Self) -> (usize, usize) {
        (self.row.abs_diff(other.row), self.col.abs_diff(other.col))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
