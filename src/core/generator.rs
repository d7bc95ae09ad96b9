//! Random secret generation

use super::Secret;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Draws secrets from a random number generator
///
/// Each digit is sampled independently and uniformly from the requested range.
#[derive(Debug)]
pub struct SecretGenerator<R: Rng = StdRng> {
    rng: R,
}

impl SecretGenerator<StdRng> {
    /// Generator seeded from OS entropy, so separate runs differ
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible generator for a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SecretGenerator<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a secret of `length` digits drawn from `digits`
    ///
    /// `length` must be at least 1 and the range must lie within 0-9; both are
    /// guaranteed by a validated `GameConfig`.
    ///
    /// # Examples
    /// ```
    /// use pica_centro::core::SecretGenerator;
    ///
    /// let mut generator = SecretGenerator::seeded(7);
    /// let secret = generator.generate(6, 0..=8);
    /// assert_eq!(secret.len(), 6);
    /// assert!(secret.digits().iter().all(|&d| d <= 8));
    /// ```
    pub fn generate(&mut self, length: usize, digits: RangeInclusive<u8>) -> Secret {
        debug_assert!(length > 0, "secret length must be positive");
        debug_assert!(
            *digits.end() <= super::MAX_DIGIT_VALUE,
            "digit range must stay within 0-9"
        );

        let values = (0..length)
            .map(|_| self.rng.random_range(digits.clone()))
            .collect();

        tracing::debug!(length, "generated secret");
        let secret = Secret::from_valid(values);
        tracing::trace!(%secret, "secret value");
        secret
    }
}
