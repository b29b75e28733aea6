use numpath_core::Topology;
use numpath_generator::GeneratorConfig;
use numpath_solver::SearchLimits;

use crate::LevelPolicy;

/// Settings for a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// Movement topology for every level.
    pub topology: Topology,
    /// Full generation cycles tried before a level is reported as failed.
    pub max_generation_attempts: usize,
    /// Puzzle generator settings. Its topology is overridden by `topology`.
    pub generator: GeneratorConfig,
    /// Mapping from level numbers to difficulty.
    pub level_policy: LevelPolicy,
}

impl GameSettings {
    /// Default number of generation cycles per level.
    pub const DEFAULT_GENERATION_ATTEMPTS: usize = 10;

    /// Returns the default settings for `topology`.
    #[must_use]
    pub const fn for_topology(topology: Topology) -> Self {
        Self {
            topology,
            max_generation_attempts: Self::DEFAULT_GENERATION_ATTEMPTS,
            generator: GeneratorConfig::for_topology(topology),
            level_policy: LevelPolicy {
                levels_per_tier: LevelPolicy::DEFAULT_LEVELS_PER_TIER,
            },
        }
    }

    /// Returns the generator configuration with the session topology applied.
    ///
    /// Start candidates follow the session topology; the step budget is kept.
    #[must_use]
    pub const fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            topology: self.topology,
            search: SearchLimits {
                step_budget: self.generator.search.step_budget,
                ..SearchLimits::for_topology(self.topology)
            },
            ..self.generator
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::for_topology(Topology::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_config_uses_session_topology() {
        let settings = GameSettings {
            topology: Topology::Diagonal,
            ..GameSettings::default()
        };
        let config = settings.generator_config();
        assert_eq!(settings.generator.topology, Topology::Orthogonal);
        assert_eq!(config.topology, Topology::Diagonal);
        assert_eq!(config.search, SearchLimits::for_topology(Topology::Diagonal));
        assert_eq!(
            config.search.max_start_candidates,
            SearchLimits::DIAGONAL_START_CANDIDATES
        );
        assert_eq!(config.path_attempts, settings.generator.path_attempts);
    }

    #[test]
    fn test_generator_config_keeps_step_budget() {
        let mut settings = GameSettings::for_topology(Topology::Orthogonal);
        settings.topology = Topology::Diagonal;
        settings.generator.search.step_budget = 500;
        let search = settings.generator_config().search;
        assert_eq!(search.step_budget, 500);
        assert_eq!(
            search.max_start_candidates,
            SearchLimits::DIAGONAL_START_CANDIDATES
        );
    }

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.max_generation_attempts, 10);
        assert_eq!(settings.level_policy, LevelPolicy::default());
    }
}
