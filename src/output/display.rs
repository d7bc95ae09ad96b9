//! Display functions for command results

use super::formatters::render_clues;
use crate::commands::ScoreResult;
use crate::config::GameConfig;
use colored::Colorize;
use std::io::{self, Write};

/// Write the startup banner
///
/// # Errors
/// Returns any error from the writer.
pub fn write_banner<W: Write>(out: &mut W, config: &GameConfig) -> io::Result<()> {
    writeln!(out, "Welcome to Pica Centro")?;
    writeln!(out, "Press ESC to give up")?;
    writeln!(
        out,
        "The secret number is {} digits long",
        config.secret_length()
    )?;
    out.flush()
}

/// Write the result of scoring a single guess
///
/// Always the clue line; an exact match adds a `Solved` line.
///
/// # Errors
/// Returns any error from the writer.
pub fn write_score_result<W: Write>(
    out: &mut W,
    result: &ScoreResult,
    styled: bool,
) -> io::Result<()> {
    writeln!(out, "{}", render_clues(&result.clues, styled))?;
    if result.solved {
        if styled {
            writeln!(out, "{}", "Solved".green().bold())?;
        } else {
            writeln!(out, "Solved")?;
        }
    }
    out.flush()
}
