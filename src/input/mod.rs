//! Guess entry
//!
//! Guesses are typed one keystroke at a time. [`GuessBuffer`] holds the
//! in-progress digits and applies edits; [`collect_guess`] drives a buffer
//! from any [`KeySource`], echoing to a writer as the player types.
//! The real terminal lives in [`terminal`].

pub mod terminal;

use crate::core::Guess;
use std::io::{self, Write};

pub use terminal::{CrosstermKeys, RawModeGuard, TerminalInput};

/// A single keystroke relevant to guess entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// Any typed character; non-digits count as `0`
    Char(char),
    /// Backspace, Ctrl-H or Delete
    Erase,
    /// ESC or Ctrl-C
    Cancel,
}

/// Effect of applying a keystroke to a [`GuessBuffer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Pushed(u8),
    Erased,
    Unchanged,
    Cancelled,
}

/// In-progress guess digits for one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessBuffer {
    digits: Vec<u8>,
    length: usize,
}

impl GuessBuffer {
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            digits: Vec::with_capacity(length),
            length,
        }
    }

    /// Apply one keystroke
    ///
    /// Characters are ignored once the buffer is full. Erasing an empty
    /// buffer does nothing.
    ///
    /// # Examples
    /// ```
    /// use pica_centro::input::{Edit, GuessBuffer, Keystroke};
    ///
    /// let mut buffer = GuessBuffer::new(2);
    /// assert_eq!(buffer.apply(Keystroke::Char('7')), Edit::Pushed(7));
    /// assert_eq!(buffer.apply(Keystroke::Char('x')), Edit::Pushed(0));
    /// assert_eq!(buffer.take_guess().unwrap().to_string(), "70");
    /// ```
    pub fn apply(&mut self, key: Keystroke) -> Edit {
        match key {
            Keystroke::Cancel => {
                self.digits.clear();
                Edit::Cancelled
            }
            Keystroke::Erase => {
                if self.digits.pop().is_some() {
                    Edit::Erased
                } else {
                    Edit::Unchanged
                }
            }
            Keystroke::Char(_) if self.is_complete() => Edit::Unchanged,
            Keystroke::Char(ch) => {
                let digit = coerce_digit(ch);
                self.digits.push(digit);
                Edit::Pushed(digit)
            }
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.digits.len() >= self.length
    }

    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Take the finished guess, leaving the buffer empty
    ///
    /// Returns `None` while digits are still missing.
    pub fn take_guess(&mut self) -> Option<Guess> {
        if self.length == 0 || !self.is_complete() {
            return None;
        }
        Some(Guess::from_valid(std::mem::take(&mut self.digits)))
    }
}

/// Digit value for a typed character; anything that is not `0`-`9` is `0`
#[must_use]
pub fn coerce_digit(ch: char) -> u8 {
    ch.to_digit(10).map_or(0, |d| d as u8)
}

/// Result of asking the player for a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessInput {
    Submitted(Guess),
    Cancelled,
}

/// Source of keystrokes, one blocking read at a time
pub trait KeySource {
    /// # Errors
    /// Returns an I/O error if the underlying device cannot be read.
    fn next_key(&mut self) -> io::Result<Keystroke>;
}

/// Anything that can produce a complete guess for an attempt
pub trait GuessSource {
    /// # Errors
    /// Returns an I/O error if reading input fails; the partial guess is lost.
    fn read_guess(&mut self, attempt: u32, length: usize) -> io::Result<GuessInput>;
}

/// Collect one guess keystroke by keystroke
///
/// Writes the prompt, shows a `_` cursor at the next digit slot, echoes
/// digits and moves back over erased ones. Line endings are `\r\n` since the
/// terminal is in raw mode while this runs.
///
/// # Errors
/// Returns any error from the key source or the writer.
pub fn collect_guess<K: KeySource, W: Write>(
    keys: &mut K,
    out: &mut W,
    attempt: u32,
    length: usize,
) -> io::Result<GuessInput> {
    write!(out, "Enter {length}-digit guess #{attempt}: ")?;

    let mut buffer = GuessBuffer::new(length);
    while !buffer.is_complete() {
        write!(out, "_\x08")?;
        out.flush()?;

        match buffer.apply(keys.next_key()?) {
            Edit::Cancelled => {
                write!(out, "\r\n")?;
                out.flush()?;
                return Ok(GuessInput::Cancelled);
            }
            Edit::Erased => write!(out, "\x08")?,
            Edit::Pushed(digit) => write!(out, "{digit}")?,
            Edit::Unchanged => {}
        }
    }
    write!(out, "\r\n")?;
    out.flush()?;

    Ok(buffer
        .take_guess()
        .map_or(GuessInput::Cancelled, GuessInput::Submitted))
}
