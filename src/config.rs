//! Game configuration
//!
//! A validated, immutable value passed into the game and the secret
//! generator. There is no process-wide state.

use crate::core::MAX_DIGIT_VALUE;
use std::fmt;
use std::ops::RangeInclusive;

/// Secret length used when none is given on the command line
pub const DEFAULT_SECRET_LENGTH: usize = 4;
/// Longest secret a game may use
pub const MAX_SECRET_LENGTH: usize = 10;
/// Attempts allowed per game by default
pub const MAX_GUESS_COUNT: u32 = 20;
/// Upper bound of the default digit range (0-8)
pub const DEFAULT_MAX_DIGIT: u8 = 8;

/// Error type for invalid game settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    SecretLength(usize),
    MaxAttempts(u32),
    MaxDigit(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecretLength(_) => write!(
                f,
                "Sorry, the secret number can only be from 1 to {MAX_SECRET_LENGTH} digits"
            ),
            Self::MaxAttempts(n) => write!(f, "Maximum attempts must be at least 1, got {n}"),
            Self::MaxDigit(d) => {
                write!(f, "Largest digit must be at most {MAX_DIGIT_VALUE}, got {d}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    secret_length: usize,
    max_attempts: u32,
    max_digit: u8,
}

impl GameConfig {
    /// Create a configuration with the given secret length and default limits
    ///
    /// # Errors
    /// Returns `ConfigError::SecretLength` unless `1 <= secret_length <= 10`.
    ///
    /// # Examples
    /// ```
    /// use pica_centro::config::GameConfig;
    ///
    /// let config = GameConfig::new(4).unwrap();
    /// assert_eq!(config.max_attempts(), 20);
    /// assert_eq!(config.digit_range(), 0..=8);
    ///
    /// assert!(GameConfig::new(0).is_err());
    /// assert!(GameConfig::new(11).is_err());
    /// ```
    pub fn new(secret_length: usize) -> Result<Self, ConfigError> {
        if !(1..=MAX_SECRET_LENGTH).contains(&secret_length) {
            return Err(ConfigError::SecretLength(secret_length));
        }

        Ok(Self {
            secret_length,
            max_attempts: MAX_GUESS_COUNT,
            max_digit: DEFAULT_MAX_DIGIT,
        })
    }

    /// # Errors
    /// Returns `ConfigError::MaxAttempts` if `max_attempts` is zero.
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::MaxAttempts(max_attempts));
        }
        self.max_attempts = max_attempts;
        Ok(self)
    }

    /// # Errors
    /// Returns `ConfigError::MaxDigit` if `max_digit` exceeds 9.
    pub const fn with_max_digit(mut self, max_digit: u8) -> Result<Self, ConfigError> {
        if max_digit > MAX_DIGIT_VALUE {
            return Err(ConfigError::MaxDigit(max_digit));
        }
        self.max_digit = max_digit;
        Ok(self)
    }

    #[inline]
    #[must_use]
    pub const fn secret_length(&self) -> usize {
        self.secret_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Digits the secret generator draws from
    #[inline]
    #[must_use]
    pub const fn digit_range(&self) -> RangeInclusive<u8> {
        0..=self.max_digit
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            secret_length: DEFAULT_SECRET_LENGTH,
            max_attempts: MAX_GUESS_COUNT,
            max_digit: DEFAULT_MAX_DIGIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.secret_length(), DEFAULT_SECRET_LENGTH);
        assert_eq!(config.max_attempts(), MAX_GUESS_COUNT);
        assert_eq!(config.digit_range(), 0..=DEFAULT_MAX_DIGIT);
        assert_eq!(GameConfig::new(DEFAULT_SECRET_LENGTH).unwrap(), config);
    }

    #[test]
    fn length_boundaries() {
        assert!(GameConfig::new(1).is_ok());
        assert!(GameConfig::new(MAX_SECRET_LENGTH).is_ok());
        assert_eq!(GameConfig::new(0), Err(ConfigError::SecretLength(0)));
        assert_eq!(GameConfig::new(11), Err(ConfigError::SecretLength(11)));
    }

    #[test]
    fn length_error_message() {
        let err = GameConfig::new(11).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Sorry, the secret number can only be from 1 to 10 digits"
        );
    }

    #[test]
    fn max_attempts_must_be_positive() {
        let config = GameConfig::default().with_max_attempts(3).unwrap();
        assert_eq!(config.max_attempts(), 3);
        assert_eq!(
            GameConfig::default().with_max_attempts(0),
            Err(ConfigError::MaxAttempts(0))
        );
    }

    #[test]
    fn max_digit_within_decimal_range() {
        let config = GameConfig::default().with_max_digit(9).unwrap();
        assert_eq!(config.digit_range(), 0..=9);
        assert_eq!(
            GameConfig::default().with_max_digit(10),
            Err(ConfigError::MaxDigit(10))
        );
    }
}
