//! Ordered cell sequences.

use std::{collections::HashSet, slice};

use crate::{GridSize, ObstacleSet, PathError, Position, Topology};

/// An ordered sequence of cells.
///
/// Each cell has an implicit 1-based step index (its position in the sequence
/// plus one). Membership lookups are O(1).
///
/// A `Path` is a plain container: it does not enforce the movement rules itself.
/// Use [`Path::check_moves`] or [`Path::check_hamiltonian`] to validate it.
///
/// # Examples
///
/// ```
/// use numpath_core::{Path, Position};
///
/// let mut path = Path::new();
/// path.push(Position::new(0, 0));
/// path.push(Position::new(0, 1));
///
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.step_of(Position::new(0, 1)), Some(2));
/// assert_eq!(path.position_at(1), Some(Position::new(0, 0)));
/// assert_eq!(path.position_at(0), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Path {
    steps: Vec<Position>,
    visited: HashSet<Position>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.steps == other.steps
    }
}

impl Eq for Path {}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty path with room for `capacity` cells.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
            visited: HashSet::with_capacity(capacity),
        }
    }

    /// Appends a cell.
    pub fn push(&mut self, pos: Position) {
        self.steps.push(pos);
        self.visited.insert(pos);
    }

    /// Removes and returns the last cell.
    pub fn pop(&mut self) -> Option<Position> {
        let pos = self.steps.pop()?;
        if !self.steps.contains(&pos) {
            self.visited.remove(&pos);
        }
        Some(pos)
    }

    /// Removes every cell.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.visited.clear();
    }

    /// Returns the number of cells.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the path has no cells.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns `true` if the cell is on the path.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.visited.contains(&pos)
    }

    /// Returns the cells in order.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[Position] {
        &self.steps
    }

    /// Returns the first cell.
    #[must_use]
    #[inline]
    pub fn first(&self) -> Option<Position> {
        self.steps.first().copied()
    }

    /// Returns the last cell.
    #[must_use]
    #[inline]
    pub fn last(&self) -> Option<Position> {
        self.steps.last().copied()
    }

    /// Returns the 1-based step index of a cell.
    #[must_use]
    pub fn step_of(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        self.steps.iter().position(|&p| p == pos).map(|i| i + 1)
    }

    /// Returns the cell at a 1-based step index.
    #[must_use]
    pub fn position_at(&self, step: usize) -> Option<Position> {
        step.checked_sub(1)
            .and_then(|i| self.steps.get(i))
            .copied()
    }

    /// Iterates over the cells in order.
    pub fn iter(&self) -> std::iter::Copied<slice::Iter<'_, Position>> {
        self.steps.iter().copied()
    }

    /// Iterates over `(step, position)` pairs with 1-based steps.
    pub fn steps(&self) -> impl Iterator<Item = (usize, Position)> + '_ {
        self.steps.iter().enumerate().map(|(i, &pos)| (i + 1, pos))
    }

    /// Checks that every move of the path is legal.
    ///
    /// A legal (possibly partial) path stays on the board, avoids obstacles,
    /// never revisits a cell, moves between adjacent cells only, and satisfies
    /// the topology's extension rule at every step.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in step order.
    pub fn check_moves(
        &self,
        size: GridSize,
        obstacles: &ObstacleSet,
        topology: Topology,
    ) -> Result<(), PathError> {
        let rules = topology.rules();
        let mut seen = HashSet::with_capacity(self.steps.len());
        for (i, &position) in self.steps.iter().enumerate() {
            let step = i + 1;
            if !size.contains(position) {
                return Err(PathError::OutOfBounds { step, position });
            }
            if obstacles.contains(position) {
                return Err(PathError::Obstacle { step, position });
            }
            if !seen.insert(position) {
                return Err(PathError::Revisited { step, position });
            }
            if let Some(&from) = i.checked_sub(1).and_then(|j| self.steps.get(j)) {
                if !rules.is_adjacent(from, position) {
                    return Err(PathError::NotAdjacent {
                        step,
                        from,
                        to: position,
                    });
                }
                if !rules.accepts_extension(&self.steps[..i], position) {
                    return Err(PathError::Crossing { step, position });
                }
            }
        }
        Ok(())
    }

    /// Checks that the path is a Hamiltonian path over the free cells.
    ///
    /// In addition to [`Path::check_moves`], the path must visit every
    /// non-obstacle cell of the board.
    ///
    /// # Errors
    ///
    /// Returns the first move violation, or [`PathError::WrongLength`].
    pub fn check_hamiltonian(
        &self,
        size: GridSize,
        obstacles: &ObstacleSet,
        topology: Topology,
    ) -> Result<(), PathError> {
        self.check_moves(size, obstacles, topology)?;
        let expected = size
            .positions()
            .filter(|&pos| !obstacles.contains(pos))
            .count();
        if self.len() != expected {
            return Err(PathError::WrongLength {
                expected,
                actual: self.len(),
            });
        }
        Ok(())
    }
}

impl FromIterator<Position> for Path {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        let mut path = Self::new();
        for pos in iter {
            path.push(pos);
        }
        path
    }
}

impl From<Vec<Position>> for Path {
    fn from(steps: Vec<Position>) -> Self {
        let visited = steps.iter().copied().collect();
        Self { steps, visited }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = Position;
    type IntoIter = std::iter::Copied<slice::Iter<'a, Position>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
