//! Visible step numbers of a puzzle.

use std::collections::{BTreeMap, btree_map};

use crate::{Path, Position};

/// Partial map from cell to its 1-based step index in the solution.
///
/// # Examples
///
/// ```
/// use numpath_core::{HintMap, Path, Position};
///
/// let solution: Path = [Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
///     .into_iter()
///     .collect();
/// let hints = HintMap::from_path_steps(&solution, [1, 3]);
///
/// assert_eq!(hints.len(), 2);
/// assert_eq!(hints.step_at(Position::new(1, 1)), Some(3));
/// assert_eq!(hints.position_of_step(1), Some(Position::new(0, 0)));
/// assert_eq!(hints.step_at(Position::new(0, 1)), None);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HintMap {
    steps: BTreeMap<Position, usize>,
}

impl HintMap {
    /// Creates an empty hint map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds hints for the given 1-based steps of `path`.
    ///
    /// Steps outside `1..=path.len()` are skipped.
    #[must_use]
    pub fn from_path_steps<I>(path: &Path, steps: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        steps
            .into_iter()
            .filter_map(|step| path.position_at(step).map(|pos| (pos, step)))
            .collect()
    }

    /// Records the step shown at a cell, returning the previous value.
    pub fn insert(&mut self, pos: Position, step: usize) -> Option<usize> {
        self.steps.insert(pos, step)
    }

    /// Returns the step shown at a cell.
    #[must_use]
    #[inline]
    pub fn step_at(&self, pos: Position) -> Option<usize> {
        self.steps.get(&pos).copied()
    }

    /// Returns the cell showing the given step.
    #[must_use]
    pub fn position_of_step(&self, step: usize) -> Option<Position> {
        self.steps
            .iter()
            .find_map(|(&pos, &s)| (s == step).then_some(pos))
    }

    /// Returns `true` if some cell shows the given step.
    #[must_use]
    pub fn shows_step(&self, step: usize) -> bool {
        self.steps.values().any(|&s| s == step)
    }

    /// Returns the number of hints.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if there are no hints.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates over `(position, step)` pairs in row-major position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, usize)> + '_ {
        self.steps.iter().map(|(&pos, &step)| (pos, step))
    }

    /// Returns `true` if every hint agrees with `path`.
    ///
    /// A hint agrees when the path visits its cell at exactly the hinted step.
    #[must_use]
    pub fn is_satisfied_by(&self, path: &Path) -> bool {
        self.iter()
            .all(|(pos, step)| path.position_at(step) == Some(pos))
    }
}

impl FromIterator<(Position, usize)> for HintMap {
    fn from_iter<T: IntoIterator<Item = (Position, usize)>>(iter: T) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for HintMap {
    type Item = (Position, usize);
    type IntoIter = btree_map::IntoIter<Position, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
