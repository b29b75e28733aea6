use numpath_core::{HintMap, Path};
use rand::{Rng, seq::SliceRandom as _};

/// Fraction of solution steps hidden from the player, in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use numpath_generator::HiddenRate;
///
/// let rate = HiddenRate::new(0.65)?;
/// assert_eq!(rate.hide_count(9), 5);
/// assert!(HiddenRate::new(1.5).is_err());
/// # Ok::<(), numpath_generator::HiddenRateError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct HiddenRate(f64);

/// A hidden rate outside `[0, 1]` (or NaN) was requested.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
#[display("hidden rate {rate} is outside [0, 1]")]
pub struct HiddenRateError {
    /// Rejected value.
    pub rate: f64,
}

impl HiddenRate {
    /// Shows every step.
    pub const NONE: Self = Self(0.0);

    /// Hides every step.
    pub const ALL: Self = Self(1.0);

    /// Creates a hidden rate.
    ///
    /// # Errors
    ///
    /// Returns [`HiddenRateError`] if `rate` is not in `[0, 1]`.
    pub fn new(rate: f64) -> Result<Self, HiddenRateError> {
        if (0.0..=1.0).contains(&rate) {
            Ok(Self(rate))
        } else {
            Err(HiddenRateError { rate })
        }
    }

    /// Creates a hidden rate, clamping `rate` into `[0, 1]`.
    ///
    /// NaN becomes zero.
    #[must_use]
    pub fn saturating(rate: f64) -> Self {
        if rate.is_nan() {
            Self::NONE
        } else {
            Self(rate.clamp(0.0, 1.0))
        }
    }

    /// Returns the rate as a fraction.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns how many of `total` steps are hidden: `floor(total * rate)`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn hide_count(self, total: usize) -> usize {
        let hidden = (total as f64 * self.0).floor() as usize;
        hidden.min(total)
    }
}

impl TryFrom<f64> for HiddenRate {
    type Error = HiddenRateError;

    fn try_from(rate: f64) -> Result<Self, Self::Error> {
        Self::new(rate)
    }
}

/// Chooses which steps of `solution` stay visible as hints.
///
/// Exactly [`HiddenRate::hide_count`] steps, chosen uniformly at random, are
/// hidden; every other step appears in the result at its solution position. No
/// step is special: the first and last steps may be hidden like any other.
///
/// # Examples
///
/// ```
/// use numpath_core::{Path, Position};
/// use numpath_generator::{HiddenRate, mask_puzzle};
///
/// let solution: Path = (0..4).map(|col| Position::new(0, col)).collect();
/// let hints = mask_puzzle(&solution, HiddenRate::new(0.5)?, &mut rand::rng());
///
/// assert_eq!(hints.len(), 2);
/// assert!(hints.is_satisfied_by(&solution));
/// # Ok::<(), numpath_generator::HiddenRateError>(())
/// ```
pub fn mask_puzzle<R>(solution: &Path, rate: HiddenRate, rng: &mut R) -> HintMap
where
    R: Rng + ?Sized,
{
    let total = solution.len();
    let hidden = rate.hide_count(total);
    let mut steps: Vec<usize> = (1..=total).collect();
    steps.shuffle(rng);
    HintMap::from_path_steps(solution, steps.into_iter().skip(hidden))
}

#[cfg(test)]
mod tests {
    use numpath_core::Position;
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn corridor(len: usize) -> Path {
        (0..len).map(|col| Position::new(0, col)).collect()
    }

    fn rate(r: f64) -> HiddenRate {
        HiddenRate::new(r).unwrap()
    }

    #[test]
    fn test_hidden_rate_bounds() {
        assert!(HiddenRate::new(0.0).is_ok());
        assert!(HiddenRate::new(1.0).is_ok());
        assert_eq!(HiddenRate::new(-0.1), Err(HiddenRateError { rate: -0.1 }));
        assert!(HiddenRate::new(f64::NAN).is_err());
        assert!(HiddenRate::try_from(1.01).is_err());
    }

    #[test]
    fn test_saturating() {
        assert_eq!(HiddenRate::saturating(1.7), HiddenRate::ALL);
        assert_eq!(HiddenRate::saturating(-3.0), HiddenRate::NONE);
        assert_eq!(HiddenRate::saturating(f64::NAN), HiddenRate::NONE);
        assert!((HiddenRate::saturating(0.42).get() - 0.42).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hide_count_floors() {
        assert_eq!(rate(0.5).hide_count(4), 2);
        assert_eq!(rate(0.5).hide_count(9), 4);
        assert_eq!(rate(0.75).hide_count(25), 18);
        assert_eq!(HiddenRate::ALL.hide_count(7), 7);
        assert_eq!(HiddenRate::NONE.hide_count(7), 0);
    }

    #[test]
    fn test_half_of_four() {
        let mut rng = Pcg64::seed_from_u64(1);
        let hints = mask_puzzle(&corridor(4), rate(0.5), &mut rng);
        assert_eq!(hints.len(), 2);
    }

    #[test]
    fn test_extreme_rates() {
        let path = corridor(6);
        let mut rng = Pcg64::seed_from_u64(2);
        let all = mask_puzzle(&path, HiddenRate::NONE, &mut rng);
        assert_eq!(all.len(), 6);
        assert!(all.is_satisfied_by(&path));
        assert!(mask_puzzle(&path, HiddenRate::ALL, &mut rng).is_empty());
        assert!(mask_puzzle(&Path::new(), rate(0.5), &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_hints() {
        let path = corridor(12);
        let a = mask_puzzle(&path, rate(0.6), &mut Pcg64::seed_from_u64(3));
        let b = mask_puzzle(&path, rate(0.6), &mut Pcg64::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_step_can_be_hidden() {
        // Over many draws both endpoints must be hidden at least once.
        let path = corridor(5);
        let mut rng = Pcg64::seed_from_u64(4);
        let mut first_hidden = false;
        let mut last_hidden = false;
        for _ in 0..200 {
            let hints = mask_puzzle(&path, rate(0.4), &mut rng);
            first_hidden |= !hints.shows_step(1);
            last_hidden |= !hints.shows_step(5);
        }
        assert!(first_hidden && last_hidden);
    }

    proptest! {
        #[test]
        fn prop_mask_cardinality(len in 0usize..40, r in 0.0f64..=1.0, seed: u64) {
            let path = corridor(len);
            let rate = rate(r);
            let hints = mask_puzzle(&path, rate, &mut Pcg64::seed_from_u64(seed));
            prop_assert_eq!(hints.len(), len - rate.hide_count(len));
            for (pos, step) in hints.iter() {
                prop_assert_eq!(path.step_of(pos), Some(step));
            }
        }
    }
}
