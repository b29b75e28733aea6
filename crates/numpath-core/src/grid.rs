//! Grid dimensions and cell occupancy.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::{CoreError, ObstacleSet, Position};

/// Dimensions of a rectangular board.
///
/// # Examples
///
/// ```
/// use numpath_core::{GridSize, Position};
///
/// let size = GridSize::new(2, 3)?;
/// assert_eq!(size.cell_count(), 6);
/// assert!(size.contains(Position::new(1, 2)));
/// assert!(!size.contains(Position::new(2, 0)));
///
/// let cells: Vec<_> = size.positions().collect();
/// assert_eq!(cells[3], Position::new(1, 0));
/// # Ok::<(), numpath_core::CoreError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

impl GridSize {
    /// Creates grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyGrid`] if either dimension is zero.
    pub const fn new(rows: usize, cols: usize) -> Result<Self, CoreError> {
        if rows == 0 || cols == 0 {
            return Err(CoreError::EmptyGrid { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Returns `rows * cols`.
    #[must_use]
    #[inline]
    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if the position lies on the board.
    #[must_use]
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row() < self.rows && pos.col() < self.cols
    }

    /// Returns `Err` with [`CoreError::OutOfBounds`] if the position is off the board.
    ///
    /// # Errors
    ///
    /// See above.
    #[inline]
    pub fn check(self, position: Position) -> Result<Position, CoreError> {
        if self.contains(position) {
            Ok(position)
        } else {
            Err(CoreError::OutOfBounds {
                position,
                size: self,
            })
        }
    }

    /// Iterates over every position in row-major order.
    #[must_use]
    pub fn positions(self) -> Positions {
        Positions {
            size: self,
            next: 0,
        }
    }

    fn index(self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row() * self.cols + pos.col())
    }
}

impl Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the positions of a [`GridSize`].
#[derive(Debug, Clone)]
pub struct Positions {
    size: GridSize,
    next: usize,
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.size.cell_count() {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(Position::new(i / self.size.cols, i % self.size.cols))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.size.cell_count().saturating_sub(self.next);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Positions {}
impl FusedIterator for Positions {}

/// Occupancy state of a single cell during path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// Open and not yet part of the path under construction.
    Free,
    /// Permanently blocked.
    Obstacle,
    /// Part of the path under construction.
    Visited,
}

/// Mutable occupancy arena for one search attempt.
///
/// A `Grid` is owned by a single search and mutated in place: cells are marked
/// [`CellState::Visited`] when a search step enters them and returned to
/// [`CellState::Free`] when the step is undone. Obstacles never change.
///
/// # Examples
///
/// ```
/// use numpath_core::{CellState, Grid, GridSize, ObstacleSet, Position};
///
/// let size = GridSize::new(2, 2)?;
/// let obstacles = ObstacleSet::from_positions(size, [Position::new(0, 0)])?;
/// let mut grid = Grid::with_obstacles(size, &obstacles)?;
/// assert_eq!(grid.free_count(), 3);
///
/// grid.mark_visited(Position::new(1, 1));
/// assert_eq!(grid.state(Position::new(1, 1)), Some(CellState::Visited));
/// grid.unmark_visited(Position::new(1, 1));
/// assert!(grid.is_free(Position::new(1, 1)));
/// # Ok::<(), numpath_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid where every cell is free.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![CellState::Free; size.cell_count()],
        }
    }

    /// Creates a grid with the given obstacle cells blocked.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfBounds`] if an obstacle lies outside `size`.
    pub fn with_obstacles(size: GridSize, obstacles: &ObstacleSet) -> Result<Self, CoreError> {
        if let Some(position) = obstacles.first_outside(size) {
            return Err(CoreError::OutOfBounds { position, size });
        }
        let mut grid = Self::new(size);
        for pos in obstacles {
            if let Some(i) = size.index(pos) {
                grid.cells[i] = CellState::Obstacle;
            }
        }
        Ok(grid)
    }

    /// Returns the grid dimensions.
    #[must_use]
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the state of a cell, or `None` if it is off the board.
    #[must_use]
    #[inline]
    pub fn state(&self, pos: Position) -> Option<CellState> {
        self.size.index(pos).map(|i| self.cells[i])
    }

    /// Returns `true` if the cell is on the board and free.
    #[must_use]
    #[inline]
    pub fn is_free(&self, pos: Position) -> bool {
        self.state(pos).is_some_and(|s| s.is_free())
    }

    /// Returns `true` if the cell is on the board and an obstacle.
    #[must_use]
    #[inline]
    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.state(pos).is_some_and(|s| s.is_obstacle())
    }

    /// Marks a free cell as visited.
    ///
    /// Off-board positions are ignored. Marking a cell that is not free is a logic
    /// error and is caught in debug builds.
    #[inline]
    pub fn mark_visited(&mut self, pos: Position) {
        if let Some(i) = self.size.index(pos) {
            debug_assert!(self.cells[i].is_free(), "{pos} is not free");
            self.cells[i] = CellState::Visited;
        }
    }

    /// Returns a visited cell to free.
    ///
    /// Off-board positions are ignored.
    #[inline]
    pub fn unmark_visited(&mut self, pos: Position) {
        if let Some(i) = self.size.index(pos) {
            debug_assert!(self.cells[i].is_visited(), "{pos} is not visited");
            self.cells[i] = CellState::Free;
        }
    }

    /// Returns the number of cells in the given state.
    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Returns the number of cells that are not obstacles.
    ///
    /// This is the length every Hamiltonian path on this grid must have.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.cells.len() - self.count(CellState::Obstacle)
    }

    /// Returns the number of free (unvisited, unblocked) cells.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.count(CellState::Free)
    }

    /// Iterates over the free cells in row-major order.
    pub fn free_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.size.positions().filter(|&pos| self.is_free(pos))
    }
}
