use numpath_core::{GridSize, HintMap, ObstacleSet, Path, Position, Topology};
use numpath_generator::GeneratedPuzzle;

use crate::{GameError, InputBlockReason};

/// What a renderer should show for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellView {
    /// A blocked cell.
    Obstacle,
    /// A free cell that is neither hinted nor drawn.
    Empty,
    /// A hinted cell, either untouched or drawn at the hinted step.
    Hint {
        /// Step shown on the cell.
        step: usize,
        /// Whether the player's path passes through the cell.
        drawn: bool,
    },
    /// A non-hint cell on the player's path.
    Drawn {
        /// Step at which the path visits the cell.
        step: usize,
    },
    /// A hinted cell that the path visits at a different step.
    Conflict {
        /// Step shown on the cell.
        hint: usize,
        /// Step at which the path visits the cell.
        drawn: usize,
    },
    /// A non-hint cell of a solved puzzle.
    Solved {
        /// Step at which the path visits the cell.
        step: usize,
    },
}

/// The effect a path edit has, or would have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PathEdit {
    /// Nothing changes.
    NoOp,
    /// A new path was started.
    Started,
    /// A cell was appended.
    Extended,
    /// The last cell was removed.
    Retracted,
}

/// A single numpath puzzle being played.
///
/// The player draws a path cell by cell: [`Game::start_at`] begins a path,
/// [`Game::extend_to`] follows the pointer (moving back onto the previous cell
/// retracts), and [`Game::undo`] removes the last cell. Every edit keeps the
/// drawn path legal under the puzzle's topology.
///
/// The puzzle is solved once the path covers every free cell and passes through
/// each hinted cell at its hinted step.
///
/// # Example
///
/// ```
/// use numpath_core::{GridSize, Topology};
/// use numpath_game::Game;
/// use numpath_generator::{HiddenRate, PuzzleGenerator, PuzzleParams};
///
/// let params = PuzzleParams {
///     size: GridSize::new(3, 3)?,
///     hidden_rate: HiddenRate::new(0.5)?,
///     obstacle_count: 0,
/// };
/// let mut game = Game::new(PuzzleGenerator::default().generate(params)?);
/// assert!(!game.is_won());
///
/// let solution = game.solution().clone();
/// game.set_player_path(solution)?;
/// assert!(game.is_won());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    puzzle: GeneratedPuzzle,
    hints: HintMap,
    path: Path,
    won: bool,
}

impl Game {
    /// Creates a game from a generated puzzle, with an empty drawn path.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let hints = puzzle.hints.clone();
        let mut game = Self {
            puzzle,
            hints,
            path: Path::new(),
            won: false,
        };
        game.update_won();
        game
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &GeneratedPuzzle {
        &self.puzzle
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.puzzle.size
    }

    /// Returns the movement topology.
    #[must_use]
    pub fn topology(&self) -> Topology {
        self.puzzle.topology
    }

    /// Returns the obstacle cells.
    #[must_use]
    pub fn obstacles(&self) -> &ObstacleSet {
        &self.puzzle.obstacles
    }

    /// Returns the visible hints, including revealed ones.
    #[must_use]
    pub fn hints(&self) -> &HintMap {
        &self.hints
    }

    /// Returns the full solution path.
    #[must_use]
    pub fn solution(&self) -> &Path {
        &self.puzzle.solution
    }

    /// Returns the path drawn by the player.
    #[must_use]
    pub fn player_path(&self) -> &Path {
        &self.path
    }

    /// Returns the length of a complete path.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.size().cell_count() - self.obstacles().len()
    }

    /// Returns `true` once the puzzle is solved.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Returns the view of a cell, or `None` if it is off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<CellView> {
        if !self.size().contains(pos) {
            return None;
        }
        if self.obstacles().contains(pos) {
            return Some(CellView::Obstacle);
        }
        let view = match (self.hints.step_at(pos), self.path.step_of(pos)) {
            (Some(hint), Some(drawn)) if hint != drawn => CellView::Conflict { hint, drawn },
            (Some(step), drawn) => CellView::Hint {
                step,
                drawn: drawn.is_some(),
            },
            (None, Some(step)) if self.won => CellView::Solved { step },
            (None, Some(step)) => CellView::Drawn { step },
            (None, None) => CellView::Empty,
        };
        Some(view)
    }

    /// Returns what [`Game::start_at`] would do.
    ///
    /// # Errors
    ///
    /// - [`InputBlockReason::Solved`] if the puzzle is solved.
    /// - [`InputBlockReason::OutOfBounds`] or [`InputBlockReason::Obstacle`] if
    ///   the cell cannot hold a path.
    /// - [`InputBlockReason::NotFirstHint`] if step 1 is visible elsewhere.
    pub fn start_at_capability(&self, pos: Position) -> Result<PathEdit, InputBlockReason> {
        self.check_cell(pos)?;
        if self
            .hints
            .position_of_step(1)
            .is_some_and(|first| first != pos)
        {
            return Err(InputBlockReason::NotFirstHint);
        }
        if self.path.as_slice() == [pos] {
            return Ok(PathEdit::NoOp);
        }
        Ok(PathEdit::Started)
    }

    /// Discards the drawn path and starts a new one at `pos`.
    ///
    /// # Errors
    ///
    /// See [`Game::start_at_capability`].
    pub fn start_at(&mut self, pos: Position) -> Result<PathEdit, GameError> {
        let edit = self.start_at_capability(pos)?;
        if edit.is_started() {
            self.path.clear();
            self.path.push(pos);
            self.update_won();
        }
        Ok(edit)
    }

    /// Returns what [`Game::extend_to`] would do.
    ///
    /// # Errors
    ///
    /// - [`InputBlockReason::Solved`] if the puzzle is solved.
    /// - [`InputBlockReason::OutOfBounds`] or [`InputBlockReason::Obstacle`] if
    ///   the cell cannot hold a path.
    /// - [`InputBlockReason::NotStarted`] if there is no path to extend.
    /// - [`InputBlockReason::AlreadyVisited`], [`InputBlockReason::NotAdjacent`]
    ///   or [`InputBlockReason::Crossing`] if the move is illegal.
    pub fn extend_to_capability(&self, pos: Position) -> Result<PathEdit, InputBlockReason> {
        self.check_cell(pos)?;
        let steps = self.path.as_slice();
        let Some((&last, rest)) = steps.split_last() else {
            return Err(InputBlockReason::NotStarted);
        };
        if last == pos {
            return Ok(PathEdit::NoOp);
        }
        if rest.last() == Some(&pos) {
            return Ok(PathEdit::Retracted);
        }
        if self.path.contains(pos) {
            return Err(InputBlockReason::AlreadyVisited);
        }
        let topology = self.topology();
        if !topology.is_adjacent(last, pos) {
            return Err(InputBlockReason::NotAdjacent);
        }
        if !topology.accepts_extension(steps, pos) {
            return Err(InputBlockReason::Crossing);
        }
        Ok(PathEdit::Extended)
    }

    /// Moves the end of the drawn path to `pos`.
    ///
    /// Moving onto the previous cell retracts the last step; moving onto an
    /// adjacent free cell appends it.
    ///
    /// # Errors
    ///
    /// See [`Game::extend_to_capability`].
    pub fn extend_to(&mut self, pos: Position) -> Result<PathEdit, GameError> {
        let edit = self.extend_to_capability(pos)?;
        match edit {
            PathEdit::NoOp | PathEdit::Started => return Ok(edit),
            PathEdit::Extended => self.path.push(pos),
            PathEdit::Retracted => {
                self.path.pop();
            }
        }
        self.update_won();
        Ok(edit)
    }

    /// Returns what [`Game::undo`] would do.
    ///
    /// # Errors
    ///
    /// Returns [`InputBlockReason::Solved`] if the puzzle is solved and
    /// [`InputBlockReason::NotStarted`] if the path is empty.
    pub fn undo_capability(&self) -> Result<PathEdit, InputBlockReason> {
        if self.won {
            return Err(InputBlockReason::Solved);
        }
        if self.path.is_empty() {
            return Err(InputBlockReason::NotStarted);
        }
        Ok(PathEdit::Retracted)
    }

    /// Removes the last cell of the drawn path.
    ///
    /// # Errors
    ///
    /// See [`Game::undo_capability`].
    pub fn undo(&mut self) -> Result<PathEdit, GameError> {
        let edit = self.undo_capability()?;
        self.path.pop();
        self.update_won();
        Ok(edit)
    }

    /// Clears the drawn path and resumes play.
    pub fn reset(&mut self) {
        self.path.clear();
        self.update_won();
    }

    /// Replaces the drawn path.
    ///
    /// The path may be partial but every move must be legal.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPath`] describing the first illegal move; the
    /// drawn path is left unchanged.
    pub fn set_player_path(&mut self, path: Path) -> Result<(), GameError> {
        path.check_moves(self.size(), self.obstacles(), self.topology())?;
        self.path = path;
        self.update_won();
        Ok(())
    }

    /// Reveals the lowest step not yet shown and returns its cell and step.
    ///
    /// Returns `None` if every step is already visible.
    pub fn reveal_hint(&mut self) -> Option<(Position, usize)> {
        let (step, pos) = self
            .puzzle
            .solution
            .steps()
            .find(|&(step, _)| !self.hints.shows_step(step))?;
        self.hints.insert(pos, step);
        log::debug!("revealed step {step} at {pos}");
        self.update_won();
        Some((pos, step))
    }

    fn check_cell(&self, pos: Position) -> Result<(), InputBlockReason> {
        if self.won {
            return Err(InputBlockReason::Solved);
        }
        if !self.size().contains(pos) {
            return Err(InputBlockReason::OutOfBounds);
        }
        if self.obstacles().contains(pos) {
            return Err(InputBlockReason::Obstacle);
        }
        Ok(())
    }

    fn update_won(&mut self) {
        self.won = self.path.len() == self.total_steps() && self.hints.is_satisfied_by(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use numpath_generator::{HiddenRate, PuzzleSeed};

    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn path(cells: &[(usize, usize)]) -> Path {
        cells.iter().map(|&(r, c)| p(r, c)).collect()
    }

    fn game(
        rows: usize,
        cols: usize,
        topology: Topology,
        obstacles: &[(usize, usize)],
        solution: &[(usize, usize)],
        hints: &[(usize, usize, usize)],
    ) -> Game {
        let size = GridSize::new(rows, cols).unwrap();
        let obstacles =
            ObstacleSet::from_positions(size, obstacles.iter().map(|&(r, c)| p(r, c))).unwrap();
        Game::new(GeneratedPuzzle {
            size,
            topology,
            obstacles,
            hints: hints.iter().map(|&(r, c, step)| (p(r, c), step)).collect(),
            solution: path(solution),
            hidden_rate: HiddenRate::new(0.5).unwrap(),
            seed: PuzzleSeed::from_bytes([0; 32]),
        })
    }

    /// 2x2 board with hints (0,0):1 and (1,1):4.
    fn corner_hints(topology: Topology) -> Game {
        game(
            2,
            2,
            topology,
            &[],
            &[(0, 0), (0, 1), (1, 0), (1, 1)],
            &[(0, 0, 1), (1, 1, 4)],
        )
    }

    fn permutations(cells: &[Position]) -> Vec<Vec<Position>> {
        if cells.is_empty() {
            return vec![vec![]];
        }
        let mut out = vec![];
        for i in 0..cells.len() {
            let mut rest = cells.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn test_corner_hints_won_diagonally() {
        let mut game = corner_hints(Topology::Diagonal);
        game.start_at(p(0, 0)).unwrap();
        game.extend_to(p(0, 1)).unwrap();
        game.extend_to(p(1, 0)).unwrap();
        assert!(!game.is_won());
        assert_eq!(game.extend_to(p(1, 1)), Ok(PathEdit::Extended));
        assert!(game.is_won());
        assert_eq!(game.cell(p(0, 1)), Some(CellView::Solved { step: 2 }));
        assert_eq!(
            game.cell(p(1, 1)),
            Some(CellView::Hint {
                step: 4,
                drawn: true
            })
        );
    }

    #[test]
    fn test_corner_hints_win_requires_hinted_steps() {
        let cells = [p(0, 0), p(0, 1), p(1, 0), p(1, 1)];
        for topology in Topology::ALL {
            let mut game = corner_hints(topology);
            for candidate in permutations(&cells) {
                let expected_win = topology.is_diagonal()
                    && candidate[0] == p(0, 0)
                    && candidate[3] == p(1, 1);
                game.reset();
                match game.set_player_path(candidate.clone().into()) {
                    Ok(()) => assert_eq!(game.is_won(), expected_win, "{candidate:?}"),
                    Err(_) => assert!(!expected_win, "{candidate:?}"),
                }
            }
        }
    }

    #[test]
    fn test_orthogonal_corner_hints_never_win() {
        // (0,0) and (1,1) share a checkerboard color, so no 4-step
        // orthogonal path joins them.
        let mut game = corner_hints(Topology::Orthogonal);
        game.start_at(p(0, 0)).unwrap();
        game.extend_to(p(0, 1)).unwrap();
        game.extend_to(p(1, 1)).unwrap();
        assert_eq!(game.extend_to(p(1, 0)), Ok(PathEdit::Extended));
        assert!(!game.is_won());
        assert_eq!(
            game.cell(p(1, 1)),
            Some(CellView::Conflict { hint: 4, drawn: 3 })
        );
    }

    #[test]
    fn test_start_must_use_first_hint() {
        let mut game = corner_hints(Topology::Diagonal);
        assert_eq!(
            game.start_at(p(1, 0)),
            Err(GameError::Blocked(InputBlockReason::NotFirstHint))
        );
        assert_eq!(game.start_at(p(0, 0)), Ok(PathEdit::Started));
        assert_eq!(game.start_at_capability(p(0, 0)), Ok(PathEdit::NoOp));
    }

    #[test]
    fn test_start_anywhere_without_first_hint() {
        let mut game = game(
            1,
            3,
            Topology::Orthogonal,
            &[],
            &[(0, 0), (0, 1), (0, 2)],
            &[(0, 1, 2)],
        );
        assert_eq!(game.start_at(p(0, 2)), Ok(PathEdit::Started));
        assert_eq!(
            game.start_at(p(0, 3)),
            Err(GameError::Blocked(InputBlockReason::OutOfBounds))
        );
        assert_eq!(game.player_path().as_slice(), &[p(0, 2)]);
    }

    #[test]
    fn test_extend_rules() {
        let mut game = game(
            3,
            3,
            Topology::Orthogonal,
            &[(1, 1)],
            &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0)],
            &[],
        );
        assert_eq!(game.extend_to_capability(p(0, 0)), Err(InputBlockReason::NotStarted));

        game.start_at(p(0, 0)).unwrap();
        assert_eq!(game.extend_to_capability(p(0, 0)), Ok(PathEdit::NoOp));
        assert_eq!(game.extend_to_capability(p(1, 1)), Err(InputBlockReason::Obstacle));
        assert_eq!(game.extend_to_capability(p(0, 2)), Err(InputBlockReason::NotAdjacent));

        game.extend_to(p(0, 1)).unwrap();
        game.extend_to(p(0, 2)).unwrap();
        assert_eq!(game.extend_to_capability(p(0, 0)), Err(InputBlockReason::AlreadyVisited));

        // Moving back onto the previous cell retracts.
        assert_eq!(game.extend_to(p(0, 1)), Ok(PathEdit::Retracted));
        assert_eq!(game.player_path().as_slice(), &[p(0, 0), p(0, 1)]);
        assert_eq!(game.cell(p(0, 1)), Some(CellView::Drawn { step: 2 }));
        assert_eq!(game.cell(p(0, 2)), Some(CellView::Empty));
        assert_eq!(game.cell(p(1, 1)), Some(CellView::Obstacle));
        assert_eq!(game.cell(p(3, 0)), None);
    }

    #[test]
    fn test_diagonal_extension_cannot_cross() {
        let mut game = game(
            2,
            2,
            Topology::Diagonal,
            &[],
            &[(0, 0), (0, 1), (1, 0), (1, 1)],
            &[],
        );
        game.set_player_path(path(&[(0, 0), (1, 1), (1, 0)])).unwrap();
        assert_eq!(game.extend_to_capability(p(0, 1)), Err(InputBlockReason::Crossing));
    }

    #[test]
    fn test_undo_and_reset() {
        let mut game = corner_hints(Topology::Diagonal);
        assert_eq!(game.undo(), Err(GameError::Blocked(InputBlockReason::NotStarted)));
        game.start_at(p(0, 0)).unwrap();
        game.extend_to(p(0, 1)).unwrap();
        assert_eq!(game.undo(), Ok(PathEdit::Retracted));
        assert_eq!(game.player_path().len(), 1);

        game.set_player_path(path(&[(0, 0), (0, 1), (1, 0), (1, 1)])).unwrap();
        assert!(game.is_won());
        assert_eq!(game.undo_capability(), Err(InputBlockReason::Solved));
        assert_eq!(game.extend_to_capability(p(0, 1)), Err(InputBlockReason::Solved));

        game.reset();
        assert!(!game.is_won());
        assert!(game.player_path().is_empty());
    }

    #[test]
    fn test_set_player_path_rejects_illegal_moves() {
        let mut game = corner_hints(Topology::Orthogonal);
        game.start_at(p(0, 0)).unwrap();
        let result = game.set_player_path(path(&[(0, 0), (1, 1)]));
        assert!(matches!(result, Err(GameError::InvalidPath(_))));
        assert_eq!(game.player_path().as_slice(), &[p(0, 0)]);
    }

    #[test]
    fn test_reveal_hint_lowest_hidden_step() {
        let mut game = game(
            1,
            4,
            Topology::Orthogonal,
            &[],
            &[(0, 0), (0, 1), (0, 2), (0, 3)],
            &[(0, 0, 1), (0, 2, 3)],
        );
        assert_eq!(game.reveal_hint(), Some((p(0, 1), 2)));
        assert_eq!(game.reveal_hint(), Some((p(0, 3), 4)));
        assert_eq!(game.reveal_hint(), None);
        assert_eq!(game.hints().len(), 4);
        assert_eq!(game.puzzle().hints.len(), 2);
    }

    #[test]
    fn test_single_cell_start_wins() {
        let mut game = game(1, 1, Topology::Orthogonal, &[], &[(0, 0)], &[]);
        assert!(!game.is_won());
        game.start_at(p(0, 0)).unwrap();
        assert!(game.is_won());
        assert_eq!(game.cell(p(0, 0)), Some(CellView::Solved { step: 1 }));
    }
}
