//! Clue calculation and representation
//!
//! Each guess position receives one clue:
//! - `C` = Centro (digit matches the secret at this position)
//! - `P` = Pica (digit is in the secret, but elsewhere)
//! - `X` = Absent (digit is not in the secret)
//!
//! Clues are decided per position by membership alone. A guess digit is
//! never "used up" by another position, so guessing `1111` against a secret
//! holding a single `1` yields one `C` and three `P`s.

use super::{Guess, Secret};
use std::fmt;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clue {
    /// Right digit, right position
    Centro,
    /// Right digit, wrong position
    Pica,
    /// Digit not in the secret
    Absent,
}

impl Clue {
    /// Display character for this clue
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Centro => 'C',
            Self::Pica => 'P',
            Self::Absent => 'X',
        }
    }

    /// Classify guess digit `digit` at `position` against `secret`
    ///
    /// An occurrence at `position` makes it a centro; any other occurrence
    /// makes it a pica.
    #[must_use]
    pub fn classify(digit: u8, position: usize, secret: &Secret) -> Self {
        if !secret.has_digit(digit) {
            return Self::Absent;
        }

        if secret.positions_of(digit).contains(&position) {
            Self::Centro
        } else {
            Self::Pica
        }
    }
}

/// Per-position feedback for one guess, aligned with the guess digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClueSequence(Vec<Clue>);

impl ClueSequence {
    /// Calculate the clues when `guess` is scored against `secret`
    ///
    /// Both sequences must have the same length.
    ///
    /// # Examples
    /// ```
    /// use pica_centro::core::{ClueSequence, Guess, Secret};
    ///
    /// let secret: Secret = "5144".parse().unwrap();
    /// let guess: Guess = "1111".parse().unwrap();
    /// let clues = ClueSequence::calculate(&guess, &secret);
    ///
    /// assert_eq!(clues.to_string(), "PCPP");
    /// assert!(!clues.is_solved());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Guess, secret: &Secret) -> Self {
        debug_assert_eq!(
            guess.len(),
            secret.len(),
            "guess and secret must have equal length"
        );

        let clues = guess
            .digits()
            .iter()
            .enumerate()
            .map(|(i, &digit)| Clue::classify(digit, i, secret))
            .collect();

        Self(clues)
    }

    #[inline]
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
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

    /// True iff every position is a centro
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&c| c == Clue::Centro)
    }

    #[must_use]
    pub fn count_centros(&self) -> usize {
        self.0.iter().filter(|&&c| c == Clue::Centro).count()
    }
}

impl fmt::Display for ClueSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clue in &self.0 {
            write!(f, "{}", clue.symbol())?;
        }
        Ok(())
    }
}

/// Score `guess` against `secret`, returning the clues and whether it is solved
#[must_use]
pub fn score(guess: &Guess, secret: &Secret) -> (ClueSequence, bool) {
    let clues = ClueSequence::calculate(guess, secret);
    let solved = clues.is_solved();
    (clues, solved)
}
