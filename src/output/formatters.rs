//! Formatting utilities for terminal output

use crate::core::{Clue, ClueSequence, Secret};
use colored::{ColoredString, Colorize};

/// Colour a single clue character
#[must_use]
fn styled_clue(clue: Clue) -> ColoredString {
    let symbol = clue.symbol().to_string();
    match clue {
        Clue::Centro => symbol.green().bold(),
        Clue::Pica => symbol.yellow().bold(),
        Clue::Absent => symbol.bright_black(),
    }
}

/// Render a clue sequence as `C`/`P`/`X` characters
///
/// With `styled` set, each character is coloured; the characters themselves
/// are the same either way.
#[must_use]
pub fn render_clues(clues: &ClueSequence, styled: bool) -> String {
    if !styled {
        return clues.to_string();
    }
    clues
        .clues()
        .iter()
        .map(|&clue| styled_clue(clue).to_string())
        .collect()
}

/// "guess" or "guesses"
#[must_use]
const fn guess_noun(count: u32) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

#[must_use]
pub fn success_message(attempts: u32) -> String {
    format!(
        "Success! You got the secret number in {attempts} {}!",
        guess_noun(attempts)
    )
}

#[must_use]
pub fn failure_message(secret: &Secret) -> String {
    format!("Failure! The secret number was {secret}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guess;

    fn clues(secret: &str, guess: &str) -> ClueSequence {
        let secret: Secret = secret.parse().unwrap();
        let guess: Guess = guess.parse().unwrap();
        ClueSequence::calculate(&guess, &secret)
    }

    #[test]
    fn unstyled_clues_are_plain() {
        let clues = clues("1234", "1494");
        assert_eq!(render_clues(&clues, false), "CPXC");
    }

    #[test]
    fn styled_clues_keep_symbols() {
        let clues = clues("123", "139");
        let rendered = render_clues(&clues, true);
        // Colour codes may or may not be present depending on the terminal
        let visible: String = rendered.chars().filter(|c| "CPX".contains(*c)).collect();
        assert_eq!(visible, "CPX");
    }

    #[test]
    fn success_message_pluralises() {
        assert_eq!(
            success_message(1),
            "Success! You got the secret number in 1 guess!"
        );
        assert_eq!(
            success_message(7),
            "Success! You got the secret number in 7 guesses!"
        );
    }

    #[test]
    fn failure_message_reveals_secret() {
        let secret: Secret = "0443".parse().unwrap();
        assert_eq!(
            failure_message(&secret),
            "Failure! The secret number was 0443"
        );
    }
}
