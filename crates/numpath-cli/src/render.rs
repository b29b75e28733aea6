use std::fmt::{self, Display};

use numpath_core::Position;
use numpath_game::{CellView, Game};

/// Text rendering of a [`Game`] board.
///
/// Each cell prints its visible number right-aligned: hints and drawn steps
/// show their step, obstacles print as `#`, empty cells as `.`, and a hint the
/// path passes at the wrong step as `!`.
///
/// # Example
///
/// ```
/// use numpath_cli::BoardView;
/// use numpath_core::GridSize;
/// use numpath_game::Game;
/// use numpath_generator::{HiddenRate, PuzzleGenerator, PuzzleParams};
///
/// let params = PuzzleParams {
///     size: GridSize::new(2, 3)?,
///     hidden_rate: HiddenRate::ALL,
///     obstacle_count: 0,
/// };
/// let game = Game::new(PuzzleGenerator::default().generate(params)?);
/// assert_eq!(BoardView::new(&game).to_string(), ". . .\n. . .");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    game: &'a Game,
}

impl<'a> BoardView<'a> {
    /// Creates a renderer for `game`.
    #[must_use]
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }
}

impl Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.game.size();
        let width = self.game.total_steps().max(1).to_string().len();
        for row in 0..size.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..size.cols() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.game.cell(Position::new(row, col)) {
                    Some(CellView::Obstacle) => write!(f, "{:>width$}", "#")?,
                    Some(CellView::Empty) | None => write!(f, "{:>width$}", ".")?,
                    Some(CellView::Conflict { .. }) => write!(f, "{:>width$}", "!")?,
                    Some(
                        CellView::Hint { step, .. }
                        | CellView::Drawn { step }
                        | CellView::Solved { step },
                    ) => write!(f, "{step:>width$}")?,
                }
            }
        }
        Ok(())
    }
}
