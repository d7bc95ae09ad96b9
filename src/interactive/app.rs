//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::SecretGenerator;
use crate::game::{Game, GameState};
use crate::input::terminal::map_key_event;
use crate::input::{Edit, GuessBuffer, Keystroke, RawModeGuard};
use crate::output::{failure_message, success_message};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub(crate) config: GameConfig,
    generator: SecretGenerator,
    pub(crate) game: Game,
    pub(crate) buffer: GuessBuffer,
    pub(crate) messages: Vec<Message>,
    pub(crate) stats: Statistics,
    should_quit: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct Message {
    pub(crate) text: String,
    pub(crate) style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Statistics {
    pub(crate) total_games: usize,
    pub(crate) games_won: usize,
    pub(crate) best_attempts: Option<u32>,
}

impl Statistics {
    #[must_use]
    pub(crate) fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig, mut generator: SecretGenerator) -> Self {
        let game = Game::generate(config, &mut generator);

        let mut app = Self {
            config,
            generator,
            game,
            buffer: GuessBuffer::new(config.secret_length()),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message("Welcome to Pica Centro!", MessageStyle::Info);
        app.add_message(
            &format!(
                "The secret number is {} digits long. Press ESC to give up.",
                config.secret_length()
            ),
            MessageStyle::Info,
        );
        app
    }

    /// Handle one key event from the terminal
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.game.is_over() {
            match key.code {
                KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                _ => {}
            }
            return;
        }

        if let Some(keystroke) = map_key_event(key) {
            self.handle_keystroke(keystroke);
        }
    }

    /// Apply a guess-entry keystroke, submitting the guess once it is complete
    pub(crate) fn handle_keystroke(&mut self, keystroke: Keystroke) {
        if self.game.is_over() {
            return;
        }

        if self.buffer.apply(keystroke) == Edit::Cancelled {
            self.game.cancel();
            self.finish_game();
            return;
        }

        if let Some(guess) = self.buffer.take_guess() {
            match self.game.submit(guess).map(|_| ()) {
                Ok(()) if self.game.is_over() => self.finish_game(),
                Ok(()) => {}
                Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            }
        }
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;

        match self.game.state() {
            GameState::Solved { attempts } => {
                self.stats.games_won += 1;
                self.stats.best_attempts =
                    Some(self.stats.best_attempts.map_or(attempts, |b| b.min(attempts)));
                self.add_message(&success_message(attempts), MessageStyle::Success);
            }
            GameState::Exhausted | GameState::Cancelled => {
                let text = failure_message(self.game.secret());
                self.add_message(&text, MessageStyle::Error);
            }
            GameState::AwaitingGuess { .. } => return,
        }

        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
    }

    fn new_game(&mut self) {
        self.game = Game::generate(self.config, &mut self.generator);
        self.buffer.clear();
        self.messages.clear();
        self.add_message(
            &format!(
                "New game! The secret number is {} digits long.",
                self.config.secret_length()
            ),
            MessageStyle::Info,
        );
    }

    pub(crate) fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Attempts used so far in the current game
    #[must_use]
    pub(crate) fn attempts_used(&self) -> usize {
        self.game.history().len()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    let raw_mode = RawModeGuard::acquire()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    drop(raw_mode);

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(length: usize, max_attempts: u32) -> App {
        let config = GameConfig::new(length)
            .unwrap()
            .with_max_attempts(max_attempts)
            .unwrap();
        App::new(config, SecretGenerator::seeded(11))
    }

    fn type_digits(app: &mut App, digits: &str) {
        for ch in digits.chars() {
            app.handle_keystroke(Keystroke::Char(ch));
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn complete_buffer_submits_guess() {
        let mut app = app(4, 20);
        // 9 is outside the default digit range, so this can never solve
        type_digits(&mut app, "9999");
        assert_eq!(app.attempts_used(), 1);
        assert!(app.buffer.digits().is_empty());
        assert_eq!(app.game.current_attempt(), Some(2));
    }

    #[test]
    fn solving_updates_stats() {
        let mut app = app(3, 20);
        let secret = app.game.secret().to_string();

        type_digits(&mut app, &secret);
        assert_eq!(app.game.state(), GameState::Solved { attempts: 1 });
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.best_attempts, Some(1));
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn escape_gives_up_and_reveals_secret() {
        let mut app = app(4, 20);
        type_digits(&mut app, "12");
        app.handle_key(press(KeyCode::Esc));

        assert_eq!(app.game.state(), GameState::Cancelled);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        let expected = failure_message(app.game.secret());
        assert!(app.messages.iter().any(|m| m.text == expected));
        assert!(!app.should_quit);
    }

    #[test]
    fn exhaustion_ends_game() {
        let mut app = app(1, 2);
        // Digit 9 never appears: the generator draws from 0-8
        type_digits(&mut app, "99");
        assert_eq!(app.game.state(), GameState::Exhausted);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn new_game_after_finish() {
        let mut app = app(2, 20);
        app.handle_key(press(KeyCode::Esc));
        app.handle_key(press(KeyCode::Char('n')));

        assert_eq!(app.game.state(), GameState::AwaitingGuess { attempt: 1 });
        assert_eq!(app.attempts_used(), 0);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn ctrl_h_erases_during_play() {
        let mut app = app(4, 20);
        type_digits(&mut app, "57");
        app.handle_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL));
        assert_eq!(app.buffer.digits(), &[5]);
    }

    #[test]
    fn q_is_a_digit_while_playing_and_quits_after() {
        let mut app = app(4, 20);
        app.handle_key(press(KeyCode::Char('q')));
        assert_eq!(app.buffer.digits(), &[0]);
        assert!(!app.should_quit);

        app.handle_key(press(KeyCode::Esc));
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(4, 20);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }

    #[test]
    fn win_rate() {
        let stats = Statistics {
            total_games: 4,
            games_won: 1,
            best_attempts: Some(3),
        };
        assert!((stats.win_rate() - 25.0).abs() < f64::EPSILON);
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
