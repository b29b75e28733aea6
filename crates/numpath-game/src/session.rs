use numpath_generator::{PuzzleGenerator, PuzzleSeed};
use rand::RngExt as _;
use rand_pcg::Pcg64;

use crate::{Game, GameSettings, LevelConfig, SessionError};

/// Coarse state of a [`GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GameStatus {
    /// No game has been generated yet.
    #[display("idle")]
    Idle,
    /// A game is in progress.
    #[display("playing")]
    Playing,
    /// The current game is solved.
    #[display("won")]
    Won,
}

/// A sequence of levels played one after another.
///
/// The session owns the current [`Game`] and regenerates it when the level
/// changes. Generating a level runs up to
/// [`GameSettings::max_generation_attempts`] full cycles (level
/// configuration, obstacles, solution, hints); if all fail the previous game
/// is kept and [`SessionError::GenerationFailed`] is returned.
///
/// # Example
///
/// ```
/// use numpath_game::{GameSession, GameSettings, GameStatus};
///
/// let mut session = GameSession::new(GameSettings::default());
/// assert_eq!(session.status(), GameStatus::Idle);
///
/// session.start()?;
/// assert_eq!(session.level(), 1);
/// assert_eq!(session.status(), GameStatus::Playing);
///
/// session.next_level()?;
/// assert_eq!(session.level(), 2);
/// # Ok::<(), numpath_game::SessionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    settings: GameSettings,
    generator: PuzzleGenerator,
    rng: Pcg64,
    level: usize,
    game: Option<Game>,
}

impl GameSession {
    /// Creates an idle session at level 1 with a random seed.
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self::with_seed(settings, PuzzleSeed::random())
    }

    /// Creates an idle session whose puzzles are all determined by `seed`.
    #[must_use]
    pub fn with_seed(settings: GameSettings, seed: PuzzleSeed) -> Self {
        Self {
            settings,
            generator: PuzzleGenerator::new(settings.generator_config()),
            rng: seed.rng(),
            level: 1,
            game: None,
        }
    }

    /// Returns the session settings.
    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Returns the current level.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the session status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match &self.game {
            None => GameStatus::Idle,
            Some(game) if game.is_won() => GameStatus::Won,
            Some(_) => GameStatus::Playing,
        }
    }

    /// Returns the current game.
    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Returns the current game for editing.
    pub fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }

    /// Generates a game for the current level.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GenerationFailed`] if no puzzle could be generated.
    pub fn start(&mut self) -> Result<&mut Game, SessionError> {
        self.load_level(self.level)
    }

    /// Advances to the next level.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GenerationFailed`] if no puzzle could be
    /// generated; the level does not change.
    pub fn next_level(&mut self) -> Result<&mut Game, SessionError> {
        self.load_level(self.level + 1)
    }

    /// Goes back to the previous level.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyFirstLevel`] at level 1, or
    /// [`SessionError::GenerationFailed`] if no puzzle could be generated.
    pub fn prev_level(&mut self) -> Result<&mut Game, SessionError> {
        if self.level <= 1 {
            return Err(SessionError::AlreadyFirstLevel);
        }
        self.load_level(self.level - 1)
    }

    /// Jumps to `level`, clamped to at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GenerationFailed`] if no puzzle could be generated.
    pub fn jump_to_level(&mut self, level: usize) -> Result<&mut Game, SessionError> {
        self.load_level(level.max(1))
    }

    /// Generates a new puzzle for the current level.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GenerationFailed`] if no puzzle could be generated.
    pub fn regenerate(&mut self) -> Result<&mut Game, SessionError> {
        self.load_level(self.level)
    }

    /// Clears the drawn path of the current game.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGame`] if the session is idle.
    pub fn reset(&mut self) -> Result<&mut Game, SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoGame)?;
        game.reset();
        Ok(game)
    }

    fn load_level(&mut self, level: usize) -> Result<&mut Game, SessionError> {
        let attempts = self.settings.max_generation_attempts;
        for attempt in 1..=attempts {
            let config = self.settings.level_policy.config(level, &mut self.rng);
            let seed = PuzzleSeed::from_bytes(self.rng.random());
            match self.generator.generate_with_seed(config.params(), seed) {
                Ok(puzzle) => {
                    log_generated(&config, attempt, &seed);
                    self.level = level;
                    return Ok(self.game.insert(Game::new(puzzle)));
                }
                Err(err) => {
                    log::debug!("level {level} generation attempt {attempt} failed: {err}");
                }
            }
        }
        log::warn!("giving up on level {level} after {attempts} attempts");
        Err(SessionError::GenerationFailed { level, attempts })
    }
}

fn log_generated(config: &LevelConfig, attempt: usize, seed: &PuzzleSeed) {
    log::info!(
        "level {} ({}, {}, hidden {:.2}, {} obstacles) generated on attempt {attempt}, seed {seed}",
        config.level,
        config.tier,
        config.size,
        config.hidden_rate.get(),
        config.obstacle_count,
    );
}

#[cfg(test)]
mod tests {
    use numpath_core::Topology;
    use numpath_solver::{SearchLimits, testing::assert_hamiltonian};
    use proptest::prelude::*;

    use super::*;
    use crate::DifficultyTier;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    fn session(topology: Topology) -> GameSession {
        GameSession::with_seed(GameSettings::for_topology(topology), SEED.parse().unwrap())
    }

    fn failing_settings() -> GameSettings {
        let mut settings = GameSettings::default();
        settings.generator.search = SearchLimits {
            max_start_candidates: 1,
            step_budget: 0,
        };
        settings.max_generation_attempts = 3;
        settings
    }

    #[test]
    fn test_idle_until_started() {
        let mut session = session(Topology::Orthogonal);
        assert_eq!(session.status(), GameStatus::Idle);
        assert!(session.game().is_none());
        assert_eq!(session.reset().unwrap_err(), SessionError::NoGame);

        let game = session.start().unwrap();
        assert_eq!(game.size(), DifficultyTier::Tutorial.size());
        assert_eq!(session.status(), GameStatus::Playing);
    }

    #[test]
    fn test_solving_sets_won() {
        for topology in Topology::ALL {
            let mut session = session(topology);
            let game = session.start().unwrap();
            let solution = game.solution().clone();
            assert_hamiltonian(&solution, game.size(), game.obstacles(), topology);
            game.set_player_path(solution).unwrap();
            assert_eq!(session.status(), GameStatus::Won);

            session.reset().unwrap();
            assert_eq!(session.status(), GameStatus::Playing);
        }
    }

    #[test]
    fn test_level_navigation() {
        let mut session = session(Topology::Orthogonal);
        assert_eq!(session.prev_level().unwrap_err(), SessionError::AlreadyFirstLevel);

        session.start().unwrap();
        session.next_level().unwrap();
        session.next_level().unwrap();
        assert_eq!(session.level(), 3);
        assert_eq!(
            session.game().map(Game::size),
            Some(DifficultyTier::Easy.size())
        );

        session.prev_level().unwrap();
        assert_eq!(session.level(), 2);

        session.jump_to_level(13).unwrap();
        assert_eq!(session.level(), 13);
        assert_eq!(session.game().map(|game| game.obstacles().len()), Some(2));

        session.jump_to_level(0).unwrap();
        assert_eq!(session.level(), 1);
        assert_eq!(session.prev_level().unwrap_err(), SessionError::AlreadyFirstLevel);
    }

    #[test]
    fn test_regenerate_keeps_level() {
        let mut session = session(Topology::Diagonal);
        session.jump_to_level(7).unwrap();
        let before = session.game().cloned();
        session.regenerate().unwrap();
        assert_eq!(session.level(), 7);
        assert_ne!(session.game().cloned(), before);
    }

    #[test]
    fn test_generation_failure_keeps_state() {
        let mut session = GameSession::with_seed(failing_settings(), SEED.parse().unwrap());
        assert_eq!(
            session.start().unwrap_err(),
            SessionError::GenerationFailed {
                level: 1,
                attempts: 3
            }
        );
        assert_eq!(session.status(), GameStatus::Idle);
        assert_eq!(session.level(), 1);

        assert_eq!(
            session.jump_to_level(5).unwrap_err(),
            SessionError::GenerationFailed {
                level: 5,
                attempts: 3
            }
        );
        assert_eq!(session.level(), 1);
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = session(Topology::Diagonal);
        let mut b = session(Topology::Diagonal);
        for _ in 0..3 {
            let ga = a.next_level().unwrap().clone();
            let gb = b.next_level().unwrap().clone();
            assert_eq!(ga, gb);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_every_level_is_winnable(level in 1usize..16, bytes: [u8; 32], diagonal: bool) {
            let topology = if diagonal { Topology::Diagonal } else { Topology::Orthogonal };
            let mut session = GameSession::with_seed(
                GameSettings::for_topology(topology),
                PuzzleSeed::from_bytes(bytes),
            );
            let game = session.jump_to_level(level).unwrap();
            prop_assert!(game.hints().is_satisfied_by(game.solution()));
            let solution = game.solution().clone();
            game.set_player_path(solution).unwrap();
            prop_assert!(game.is_won());
        }
    }
}
