//! Single-guess scoring command
//!
//! Scores one guess against a given secret without starting a game.

use crate::core::{ClueSequence, Guess, Secret, score};
use anyhow::{Context, Result, ensure};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub secret: Secret,
    pub guess: Guess,
    pub clues: ClueSequence,
    pub solved: bool,
}

/// Score `guess` against `secret`, both given as digit strings
///
/// # Errors
///
/// Returns an error if either string is not a non-empty run of digits or if
/// their lengths differ.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult> {
    let secret: Secret = secret
        .parse()
        .with_context(|| format!("Invalid secret '{secret}'"))?;
    let guess: Guess = guess
        .parse()
        .with_context(|| format!("Invalid guess '{guess}'"))?;

    ensure!(
        guess.len() == secret.len(),
        "Guess must be {} digits long, got {}",
        secret.len(),
        guess.len()
    );

    let (clues, solved) = score(&guess, &secret);
    Ok(ScoreResult {
        secret,
        guess,
        clues,
        solved,
    })
}
