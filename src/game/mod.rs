//! Game state machine
//!
//! A [`Game`] owns the secret and the attempt counter and moves through
//! [`GameState`]s as guesses are submitted:
//!
//! ```text
//! AwaitingGuess(1) -> AwaitingGuess(2) -> ... -> AwaitingGuess(max)
//!        |                  |                          |
//!        +---- Solved <-----+--------------------------+--> Exhausted
//!        +---- Cancelled (from any AwaitingGuess)
//! ```
//!
//! The type is independent of any terminal; front ends drive it with
//! [`Game::submit`] and [`Game::cancel`].

use crate::config::GameConfig;
use crate::core::{ClueSequence, Guess, Secret, SecretGenerator};
use rand::Rng;
use std::fmt;

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for guess number `attempt` (1-based)
    AwaitingGuess { attempt: u32 },
    /// The secret was found on guess number `attempts`
    Solved { attempts: u32 },
    /// Every attempt was used without finding the secret
    Exhausted,
    /// The player gave up or input failed
    Cancelled,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess { .. })
    }
}

/// Error type for invalid moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    LengthMismatch { expected: usize, actual: usize },
    GameOver(GameState),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Guess must be {expected} digits long, got {actual}")
            }
            Self::GameOver(state) => write!(f, "Game is already over ({state:?})"),
        }
    }
}

impl std::error::Error for GameError {}

/// One scored attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub attempt: u32,
    pub guess: Guess,
    pub clues: ClueSequence,
}

impl Turn {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.clues.is_solved()
    }
}

/// A single game against one fixed secret
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    secret: Secret,
    state: GameState,
    history: Vec<Turn>,
}

impl Game {
    /// Start a game against a known secret
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the secret length differs from
    /// the configured length.
    pub fn new(config: GameConfig, secret: Secret) -> Result<Self, GameError> {
        if secret.len() != config.secret_length() {
            return Err(GameError::LengthMismatch {
                expected: config.secret_length(),
                actual: secret.len(),
            });
        }

        Ok(Self {
            config,
            secret,
            state: GameState::AwaitingGuess { attempt: 1 },
            history: Vec::new(),
        })
    }

    /// Start a game with a freshly generated secret
    pub fn generate<R: Rng>(config: GameConfig, generator: &mut SecretGenerator<R>) -> Self {
        let secret = generator.generate(config.secret_length(), config.digit_range());
        Self {
            config,
            secret,
            state: GameState::AwaitingGuess { attempt: 1 },
            history: Vec::new(),
        }
    }

    /// Score a guess and advance the state machine
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the game has ended, and
    /// `GameError::LengthMismatch` if the guess length is wrong. Neither
    /// consumes an attempt.
    ///
    /// # Examples
    /// ```
    /// use pica_centro::config::GameConfig;
    /// use pica_centro::core::Secret;
    /// use pica_centro::game::{Game, GameState};
    ///
    /// let config = GameConfig::new(4).unwrap();
    /// let mut game = Game::new(config, "0443".parse::<Secret>().unwrap()).unwrap();
    ///
    /// let turn = game.submit("4034".parse().unwrap()).unwrap();
    /// assert_eq!(turn.clues.to_string(), "PPPP");
    ///
    /// game.submit("0443".parse().unwrap()).unwrap();
    /// assert_eq!(game.state(), GameState::Solved { attempts: 2 });
    /// ```
    pub fn submit(&mut self, guess: Guess) -> Result<&Turn, GameError> {
        let GameState::AwaitingGuess { attempt } = self.state else {
            return Err(GameError::GameOver(self.state));
        };

        if guess.len() != self.secret.len() {
            return Err(GameError::LengthMismatch {
                expected: self.secret.len(),
                actual: guess.len(),
            });
        }

        let clues = ClueSequence::calculate(&guess, &self.secret);
        tracing::debug!(attempt, %guess, %clues, "scored guess");

        self.state = if clues.is_solved() {
            GameState::Solved { attempts: attempt }
        } else if attempt >= self.config.max_attempts() {
            GameState::Exhausted
        } else {
            GameState::AwaitingGuess {
                attempt: attempt + 1,
            }
        };

        if self.state.is_over() {
            tracing::info!(state = ?self.state, "game finished");
        }

        self.history.push(Turn {
            attempt,
            guess,
            clues,
        });
        let index = self.history.len() - 1;
        Ok(&self.history[index])
    }

    /// Abandon the game; a no-op once it has already ended
    pub fn cancel(&mut self) {
        if !self.state.is_over() {
            self.state = GameState::Cancelled;
            tracing::info!("game cancelled");
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Attempt number currently awaited, if the game is still running
    #[must_use]
    pub const fn current_attempt(&self) -> Option<u32> {
        match self.state {
            GameState::AwaitingGuess { attempt } => Some(attempt),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(secret: &str, max_attempts: u32) -> Game {
        let secret: Secret = secret.parse().unwrap();
        let config = GameConfig::new(secret.len())
            .unwrap()
            .with_max_attempts(max_attempts)
            .unwrap();
        Game::new(config, secret).unwrap()
    }

    fn guess(s: &str) -> Guess {
        s.parse().unwrap()
    }

    #[test]
    fn starts_awaiting_first_guess() {
        let game = game("0443", 20);
        assert_eq!(game.state(), GameState::AwaitingGuess { attempt: 1 });
        assert_eq!(game.current_attempt(), Some(1));
        assert!(game.history().is_empty());
    }

    #[test]
    fn solved_on_first_guess() {
        let mut game = game("0443", 20);
        let turn = game.submit(guess("0443")).unwrap();
        assert_eq!(turn.clues.to_string(), "CCCC");
        assert!(turn.is_solved());
        assert_eq!(game.state(), GameState::Solved { attempts: 1 });
        assert_eq!(game.current_attempt(), None);
    }

    #[test]
    fn wrong_guess_advances_attempt() {
        let mut game = game("5144", 20);
        let turn = game.submit(guess("1111")).unwrap();
        assert_eq!(turn.attempt, 1);
        assert_eq!(turn.clues.to_string(), "PCPP");
        assert_eq!(game.state(), GameState::AwaitingGuess { attempt: 2 });
    }

    #[test]
    fn exhausted_after_exactly_max_attempts() {
        let mut game = game("0443", 3);
        for _ in 0..2 {
            game.submit(guess("1111")).unwrap();
            assert!(!game.is_over());
        }
        game.submit(guess("1111")).unwrap();
        assert_eq!(game.state(), GameState::Exhausted);
        assert_eq!(game.history().len(), 3);

        assert_eq!(
            game.submit(guess("0443")),
            Err(GameError::GameOver(GameState::Exhausted))
        );
    }

    #[test]
    fn solving_on_last_attempt_wins() {
        let mut game = game("12", 2);
        game.submit(guess("21")).unwrap();
        game.submit(guess("12")).unwrap();
        assert_eq!(game.state(), GameState::Solved { attempts: 2 });
    }

    #[test]
    fn wrong_length_does_not_consume_attempt() {
        let mut game = game("0443", 20);
        assert_eq!(
            game.submit(guess("044")),
            Err(GameError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(game.current_attempt(), Some(1));
    }

    #[test]
    fn cancel_is_terminal() {
        let mut game = game("0443", 20);
        game.submit(guess("1234")).unwrap();
        game.cancel();
        assert_eq!(game.state(), GameState::Cancelled);
        assert!(game.submit(guess("0443")).is_err());
    }

    #[test]
    fn cancel_after_win_keeps_result() {
        let mut game = game("7", 20);
        game.submit(guess("7")).unwrap();
        game.cancel();
        assert_eq!(game.state(), GameState::Solved { attempts: 1 });
    }

    #[test]
    fn secret_length_must_match_config() {
        let config = GameConfig::new(5).unwrap();
        let secret: Secret = "0443".parse().unwrap();
        assert!(matches!(
            Game::new(config, secret),
            Err(GameError::LengthMismatch {
                expected: 5,
                actual: 4
            })
        ));
    }

    #[test]
    fn generated_game_uses_config() {
        let config = GameConfig::new(7).unwrap().with_max_digit(2).unwrap();
        let mut generator = SecretGenerator::seeded(9);
        let game = Game::generate(config, &mut generator);
        assert_eq!(game.secret().len(), 7);
        assert!(game.secret().digits().iter().all(|&d| d <= 2));
        assert_eq!(game.config().max_attempts(), crate::config::MAX_GUESS_COUNT);
    }
}
