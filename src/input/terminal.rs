//! Raw-mode keyboard input via crossterm

use super::{GuessInput, GuessSource, KeySource, Keystroke, collect_guess};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, Write};

/// Keeps the terminal in raw mode for as long as it is alive
///
/// Cooked mode is restored on drop, so every early return and `?` in the
/// owning scope leaves the terminal usable.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// # Errors
    /// Returns an error if stdin is not a terminal or raw mode cannot be set.
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!(%err, "failed to restore terminal mode");
        }
    }
}

/// Map a crossterm key event onto guess entry
///
/// Returns `None` for releases and keys that do not produce a character,
/// such as arrows or function keys.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<Keystroke> {
    // Only process key press events (Windows also reports releases)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(Keystroke::Cancel),
        KeyCode::Char('c' | 'C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Keystroke::Cancel)
        }
        KeyCode::Backspace | KeyCode::Delete => Some(Keystroke::Erase),
        // ^H, the 0x08 byte some terminals send for backspace
        KeyCode::Char('h' | 'H') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Keystroke::Erase)
        }
        KeyCode::Char(ch) => Some(Keystroke::Char(ch)),
        KeyCode::Enter => Some(Keystroke::Char('\r')),
        KeyCode::Tab => Some(Keystroke::Char('\t')),
        _ => None,
    }
}

/// Blocking keystroke reader over crossterm's event queue
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<Keystroke> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(keystroke) = map_key_event(key) {
                    return Ok(keystroke);
                }
            }
        }
    }
}

/// Guess source for an interactive terminal
///
/// Raw mode is held only while a guess is being typed.
pub struct TerminalInput<W: Write> {
    keys: CrosstermKeys,
    out: W,
}

impl TerminalInput<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalInput<W> {
    pub const fn new(out: W) -> Self {
        Self {
            keys: CrosstermKeys,
            out,
        }
    }
}

impl<W: Write> GuessSource for TerminalInput<W> {
    fn read_guess(&mut self, attempt: u32, length: usize) -> io::Result<GuessInput> {
        let _raw = RawModeGuard::acquire()?;

        let result = collect_guess(&mut self.keys, &mut self.out, attempt, length);
        if let Err(err) = &result {
            // Still in raw mode here
            write!(self.out, "\r\n{err}\r\n")?;
            self.out.flush()?;
        }
        result
    }
}
