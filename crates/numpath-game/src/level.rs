use numpath_core::GridSize;
use numpath_generator::{HiddenRate, PuzzleParams};
use rand::{Rng, RngExt as _};

/// Difficulty tiers, from smallest board to largest.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum DifficultyTier {
    /// 3x3, no obstacles.
    Tutorial,
    /// 3x4, no obstacles.
    Easy,
    /// 4x4, no obstacles.
    Normal,
    /// 4x5, no obstacles.
    Hard,
    /// 5x5, no obstacles.
    Expert,
    /// 5x5, one obstacle.
    Master,
    /// 5x5, two obstacles.
    Grandmaster,
}

#[derive(Debug, Clone, Copy)]
struct TierSettings {
    size: GridSize,
    min_hidden: f64,
    max_hidden: f64,
    obstacles: usize,
}

const fn tier(
    rows: usize,
    cols: usize,
    min_hidden: f64,
    max_hidden: f64,
    obstacles: usize,
) -> TierSettings {
    let Ok(size) = GridSize::new(rows, cols) else {
        panic!("tier dimensions must be non-zero");
    };
    TierSettings {
        size,
        min_hidden,
        max_hidden,
        obstacles,
    }
}

const TIERS: [TierSettings; 7] = [
    tier(3, 3, 0.5, 0.6, 0),
    tier(3, 4, 0.55, 0.65, 0),
    tier(4, 4, 0.6, 0.7, 0),
    tier(4, 5, 0.65, 0.75, 0),
    tier(5, 5, 0.7, 0.8, 0),
    tier(5, 5, 0.7, 0.8, 1),
    tier(5, 5, 0.7, 0.8, 2),
];

impl DifficultyTier {
    /// All tiers in ascending difficulty.
    pub const ALL: [Self; 7] = [
        Self::Tutorial,
        Self::Easy,
        Self::Normal,
        Self::Hard,
        Self::Expert,
        Self::Master,
        Self::Grandmaster,
    ];

    const fn settings(self) -> TierSettings {
        TIERS[self as usize]
    }

    /// Returns the board dimensions.
    #[must_use]
    pub const fn size(self) -> GridSize {
        self.settings().size
    }

    /// Returns the `(min, max)` range the hidden rate is drawn from.
    #[must_use]
    pub const fn hidden_range(self) -> (f64, f64) {
        let settings = self.settings();
        (settings.min_hidden, settings.max_hidden)
    }

    /// Returns the number of obstacle cells.
    #[must_use]
    pub const fn obstacle_count(self) -> usize {
        self.settings().obstacles
    }
}

/// Parameters drawn for one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
    /// 1-based level number.
    pub level: usize,
    /// Tier the level belongs to.
    pub tier: DifficultyTier,
    /// Board dimensions.
    pub size: GridSize,
    /// Fraction of solution steps hidden, rounded to two decimals.
    pub hidden_rate: HiddenRate,
    /// Number of obstacle cells.
    pub obstacle_count: usize,
}

impl LevelConfig {
    /// Returns the generator parameters for this level.
    #[must_use]
    pub const fn params(&self) -> PuzzleParams {
        PuzzleParams {
            size: self.size,
            hidden_rate: self.hidden_rate,
            obstacle_count: self.obstacle_count,
        }
    }
}

/// Maps level numbers to difficulty tiers.
///
/// Levels advance through the tiers in groups of `levels_per_tier`; every
/// level past the last group is [`DifficultyTier::Grandmaster`].
///
/// # Examples
///
/// ```
/// use numpath_game::{DifficultyTier, LevelPolicy};
///
/// let policy = LevelPolicy::default();
/// assert_eq!(policy.tier(1), DifficultyTier::Tutorial);
/// assert_eq!(policy.tier(3), DifficultyTier::Easy);
/// assert_eq!(policy.tier(13), DifficultyTier::Grandmaster);
///
/// let config = policy.config(5, &mut rand::rng());
/// assert_eq!(config.size.to_string(), "4x4");
/// let (min, max) = config.tier.hidden_range();
/// assert!((min..=max).contains(&config.hidden_rate.get()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelPolicy {
    /// Number of consecutive levels sharing a tier.
    pub levels_per_tier: usize,
}

impl LevelPolicy {
    /// Default number of levels per tier.
    pub const DEFAULT_LEVELS_PER_TIER: usize = 2;

    /// Returns the tier of a level. Levels below 1 count as level 1.
    #[must_use]
    pub fn tier(&self, level: usize) -> DifficultyTier {
        let group = (level.max(1) - 1) / self.levels_per_tier.max(1);
        let last = DifficultyTier::ALL.len() - 1;
        DifficultyTier::ALL[group.min(last)]
    }

    /// Draws the configuration of a level.
    ///
    /// The hidden rate is uniform over the tier's range, rounded to two
    /// decimals. Levels below 1 are clamped to 1.
    #[must_use]
    pub fn config<R>(&self, level: usize, rng: &mut R) -> LevelConfig
    where
        R: Rng + ?Sized,
    {
        let level = level.max(1);
        let tier = self.tier(level);
        let (min, max) = tier.hidden_range();
        let rate = rng.random_range(min..=max);
        let rate = (rate * 100.0).round() / 100.0;
        LevelConfig {
            level,
            tier,
            size: tier.size(),
            hidden_rate: HiddenRate::saturating(rate),
            obstacle_count: tier.obstacle_count(),
        }
    }
}

impl Default for LevelPolicy {
    fn default() -> Self {
        Self {
            levels_per_tier: Self::DEFAULT_LEVELS_PER_TIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_tier_thresholds() {
        let policy = LevelPolicy::default();
        let expected = [
            (0, DifficultyTier::Tutorial),
            (1, DifficultyTier::Tutorial),
            (2, DifficultyTier::Tutorial),
            (3, DifficultyTier::Easy),
            (5, DifficultyTier::Normal),
            (8, DifficultyTier::Hard),
            (9, DifficultyTier::Expert),
            (11, DifficultyTier::Master),
            (12, DifficultyTier::Master),
            (13, DifficultyTier::Grandmaster),
            (1000, DifficultyTier::Grandmaster),
        ];
        for (level, tier) in expected {
            assert_eq!(policy.tier(level), tier, "level {level}");
        }
    }

    #[test]
    fn test_custom_levels_per_tier() {
        let policy = LevelPolicy { levels_per_tier: 3 };
        assert_eq!(policy.tier(3), DifficultyTier::Tutorial);
        assert_eq!(policy.tier(4), DifficultyTier::Easy);

        let degenerate = LevelPolicy { levels_per_tier: 0 };
        assert_eq!(degenerate.tier(2), DifficultyTier::Easy);
    }

    #[test]
    fn test_tier_table() {
        assert_eq!(DifficultyTier::Tutorial.size().cell_count(), 9);
        assert_eq!(DifficultyTier::Hard.size().to_string(), "4x5");
        assert_eq!(DifficultyTier::Expert.obstacle_count(), 0);
        assert_eq!(DifficultyTier::Master.obstacle_count(), 1);
        assert_eq!(DifficultyTier::Grandmaster.obstacle_count(), 2);
        for pair in DifficultyTier::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].size().cell_count() <= pair[1].size().cell_count());
        }
    }

    #[test]
    fn test_config_clamps_level() {
        let config = LevelPolicy::default().config(0, &mut Pcg64::seed_from_u64(0));
        assert_eq!(config.level, 1);
        assert_eq!(config.tier, DifficultyTier::Tutorial);
        assert_eq!(config.params().size, config.size);
    }

    proptest! {
        #[test]
        fn prop_config_rate_in_tier_range(level in 1usize..30, seed: u64) {
            let config = LevelPolicy::default().config(level, &mut Pcg64::seed_from_u64(seed));
            let (min, max) = config.tier.hidden_range();
            let rate = config.hidden_rate.get();
            prop_assert!(rate >= min - 1e-9 && rate <= max + 1e-9);
            let cents = rate * 100.0;
            prop_assert!((cents - cents.round()).abs() < 1e-6);
            prop_assert_eq!(config.obstacle_count, config.tier.obstacle_count());
        }
    }
}
