//! Console game mode
//!
//! The classic line-by-line game: a prompt per attempt, digits typed in raw
//! mode, one clue line per guess.

use crate::config::GameConfig;
use crate::core::SecretGenerator;
use crate::game::{Game, GameState};
use crate::input::{GuessInput, GuessSource, TerminalInput};
use crate::output::{failure_message, render_clues, success_message, write_banner};
use anyhow::Result;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

/// Options for the console game
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    pub config: GameConfig,
    /// Print the secret before the first guess
    pub reveal: bool,
}

impl PlayOptions {
    #[must_use]
    pub const fn new(config: GameConfig) -> Self {
        Self {
            config,
            reveal: false,
        }
    }
}

/// Run the interactive console game on stdin/stdout with a secret drawn
/// from `generator`
///
/// Exits with failure when the player gives up or input breaks; a solved
/// or exhausted game is a normal exit.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn run_play(options: PlayOptions, mut generator: SecretGenerator) -> Result<ExitCode> {
    let mut stdout = io::stdout();
    write_banner(&mut stdout, &options.config)?;

    let mut game = Game::generate(options.config, &mut generator);

    if options.reveal {
        writeln!(stdout, "Secret number is {}", game.secret())?;
    }

    let styled = stdout.is_terminal();
    let mut input = TerminalInput::stdout();
    let state = play(&mut game, &mut input, &mut stdout, styled)?;

    Ok(match state {
        GameState::Cancelled => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

/// Drive `game` to a terminal state with guesses from `source`
///
/// Prints a clue line after each wrong guess, the success message on a win,
/// and the secret when the game is lost. A failed read ends the game the
/// same way the player giving up does.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn play<S: GuessSource, W: Write>(
    game: &mut Game,
    source: &mut S,
    out: &mut W,
    styled: bool,
) -> Result<GameState> {
    let length = game.config().secret_length();

    while let Some(attempt) = game.current_attempt() {
        match source.read_guess(attempt, length) {
            Ok(GuessInput::Submitted(guess)) => {
                let turn = game.submit(guess)?;
                if turn.is_solved() {
                    writeln!(out, "{}", success_message(turn.attempt))?;
                } else {
                    writeln!(out, "{}", render_clues(&turn.clues, styled))?;
                }
            }
            Ok(GuessInput::Cancelled) => game.cancel(),
            Err(err) => {
                tracing::warn!(%err, attempt, "guess input failed");
                game.cancel();
            }
        }
    }

    let state = game.state();
    if matches!(state, GameState::Exhausted | GameState::Cancelled) {
        writeln!(out, "{}", failure_message(game.secret()))?;
    }
    out.flush()?;

    Ok(state)
}
