//! Obstacle cells of a puzzle.

use std::collections::{BTreeSet, btree_set};

use crate::{CoreError, GridSize, Position};

/// A set of blocked cells, fixed for the lifetime of one puzzle.
///
/// Iteration is in row-major order.
///
/// # Examples
///
/// ```
/// use numpath_core::{CoreError, GridSize, ObstacleSet, Position};
///
/// let size = GridSize::new(3, 3)?;
/// let obstacles = ObstacleSet::from_positions(size, [Position::new(1, 1)])?;
/// assert!(obstacles.contains(Position::new(1, 1)));
/// assert_eq!(obstacles.len(), 1);
///
/// // Duplicates and off-board cells are rejected.
/// let dup = ObstacleSet::from_positions(size, [Position::new(0, 0), Position::new(0, 0)]);
/// assert!(matches!(dup, Err(CoreError::DuplicateObstacle { .. })));
/// # Ok::<(), CoreError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ObstacleSet {
    cells: BTreeSet<Position>,
}

impl ObstacleSet {
    /// Creates an empty obstacle set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an obstacle set, checking that every cell is on the board and listed once.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfBounds`] for an off-board cell and
    /// [`CoreError::DuplicateObstacle`] for a repeated one.
    pub fn from_positions<I>(size: GridSize, positions: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut cells = BTreeSet::new();
        for position in positions {
            size.check(position)?;
            if !cells.insert(position) {
                return Err(CoreError::DuplicateObstacle { position });
            }
        }
        Ok(Self { cells })
    }

    /// Returns `true` if the cell is blocked.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Returns the number of blocked cells.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if nothing is blocked.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the first blocked cell lying outside `size`, if any.
    #[must_use]
    pub fn first_outside(&self, size: GridSize) -> Option<Position> {
        self.iter().find(|&pos| !size.contains(pos))
    }

    /// Iterates over the blocked cells in row-major order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.cells.iter(),
        }
    }
}

/// Iterator over the cells of an [`ObstacleSet`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_set::Iter<'a, Position>,
}

impl Iterator for Iter<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ObstacleSet {
    type Item = Position;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
