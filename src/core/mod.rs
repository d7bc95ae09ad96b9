//! Core domain types for Pica Centro
//!
//! Secrets, guesses, clue scoring and secret generation. Nothing here touches
//! the terminal, so every type is testable in isolation.

mod clue;
mod digits;
mod generator;

pub use clue::{Clue, ClueSequence, score};
pub use digits::{DigitsError, Guess, MAX_DIGIT_VALUE, Secret};
pub use generator::SecretGenerator;
