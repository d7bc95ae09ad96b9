//! Secret and guess digit sequences
//!
//! A [`Secret`] stores its digits along with a digit position index used by
//! clue calculation. A [`Guess`] is a plain digit sequence built once per
//! attempt.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Largest value a single digit may take
pub const MAX_DIGIT_VALUE: u8 = 9;

/// Error type for invalid digit sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitsError {
    Empty,
    DigitOutOfRange(u8),
    InvalidCharacter(char),
}

impl fmt::Display for DigitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Digit sequence must not be empty"),
            Self::DigitOutOfRange(d) => {
                write!(f, "Digit {d} is out of range 0-{MAX_DIGIT_VALUE}")
            }
            Self::InvalidCharacter(c) => write!(f, "'{c}' is not a digit"),
        }
    }
}

impl std::error::Error for DigitsError {}

fn validate(digits: &[u8]) -> Result<(), DigitsError> {
    if digits.is_empty() {
        return Err(DigitsError::Empty);
    }
    match digits.iter().find(|&&d| d > MAX_DIGIT_VALUE) {
        Some(&d) => Err(DigitsError::DigitOutOfRange(d)),
        None => Ok(()),
    }
}

fn parse_digits(s: &str) -> Result<Vec<u8>, DigitsError> {
    s.trim()
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or(DigitsError::InvalidCharacter(c))
        })
        .collect()
}

fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[u8]) -> fmt::Result {
    for d in digits {
        write!(f, "{d}")?;
    }
    Ok(())
}

/// The hidden digit sequence for one game
///
/// Immutable once created. Keeps a map of digit positions so presence
/// checks during scoring do not rescan the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    digits: Vec<u8>,
    digit_positions: FxHashMap<u8, Vec<usize>>,
}

impl Secret {
    /// Create a secret from a digit sequence
    ///
    /// # Errors
    /// Returns `DigitsError` if the sequence is empty or any digit exceeds 9.
    ///
    /// # Examples
    /// ```
    /// use pica_centro::core::Secret;
    ///
    /// let secret = Secret::new(vec![0, 4, 4, 3]).unwrap();
    /// assert_eq!(secret.to_string(), "0443");
    /// assert!(Secret::new(vec![]).is_err());
    /// ```
    pub fn new(digits: Vec<u8>) -> Result<Self, DigitsError> {
        validate(&digits)?;
        Ok(Self::from_valid(digits))
    }

    /// Build a secret from digits already known to be in range
    pub(crate) fn from_valid(digits: Vec<u8>) -> Self {
        let mut digit_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &d) in digits.iter().enumerate() {
            digit_positions.entry(d).or_default().push(i);
        }

        Self {
            digits,
            digit_positions,
        }
    }

    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Check if the secret contains a digit anywhere
    #[inline]
    #[must_use]
    pub fn has_digit(&self, digit: u8) -> bool {
        self.digit_positions.contains_key(&digit)
    }

    /// Get all positions where a digit appears, in ascending order
    ///
    /// Returns an empty slice if the digit doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, digit: u8) -> &[usize] {
        self.digit_positions
            .get(&digit)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.digits)
    }
}

impl FromStr for Secret {
    type Err = DigitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_digits(s)?)
    }
}

/// One submitted candidate sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess(Vec<u8>);

impl Guess {
    /// Create a guess from a digit sequence
    ///
    /// # Errors
    /// Returns `DigitsError` if the sequence is empty or any digit exceeds 9.
    pub fn new(digits: Vec<u8>) -> Result<Self, DigitsError> {
        validate(&digits)?;
        Ok(Self(digits))
    }

    pub(crate) const fn from_valid(digits: Vec<u8>) -> Self {
        Self(digits)
    }

    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

impl FromStr for Guess {
    type Err = DigitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_digits(s)?)
    }
}
