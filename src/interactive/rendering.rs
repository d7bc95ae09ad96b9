//! TUI rendering with ratatui
//!
//! Board, attempt gauge, messages and input line for the game.

use super::app::{App, MessageStyle};
use crate::core::{Clue, ClueSequence};
use crate::game::GameState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub(super) fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("PICA CENTRO")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn clue_color(clue: Clue) -> Color {
    match clue {
        Clue::Centro => Color::Green,
        Clue::Pica => Color::Yellow,
        Clue::Absent => Color::DarkGray,
    }
}

fn clue_spans(clues: &ClueSequence) -> Vec<Span<'static>> {
    clues
        .clues()
        .iter()
        .map(|&clue| {
            Span::styled(
                clue.symbol().to_string(),
                Style::default()
                    .fg(clue_color(clue))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    // Newest turns last; keep the tail visible when the board overflows
    let visible = area.height.saturating_sub(2) as usize;
    let history = app.game.history();
    let skip = history.len().saturating_sub(visible);

    let items: Vec<ListItem> = history
        .iter()
        .skip(skip)
        .map(|turn| {
            let mut spans = vec![
                Span::styled(
                    format!("{:>2}. ", turn.attempt),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    turn.guess.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
            ];
            spans.extend(clue_spans(&turn.clues));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let board = List::new(items).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempt gauge
            Constraint::Length(5), // Legend
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_legend(f, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let max = app.config.max_attempts();
    let used = app.attempts_used() as u32;
    let percent = (used * 100 / max).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(if percent >= 75 {
            Color::Red
        } else {
            Color::Cyan
        }))
        .percent(percent)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_legend(f: &mut Frame, area: Rect) {
    let entry = |clue: Clue, text: &'static str| {
        Line::from(vec![
            Span::styled(
                format!(" {} ", clue.symbol()),
                Style::default()
                    .fg(clue_color(clue))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(text),
        ])
    };

    let legend = Paragraph::new(vec![
        entry(Clue::Centro, "centro: right digit, right place"),
        entry(Clue::Pica, "pica: right digit, wrong place"),
        entry(Clue::Absent, "not in the secret"),
    ])
    .block(Block::default().title(" Clues ").borders(Borders::ALL));

    f.render_widget(legend, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

/// Typed digits followed by `_` placeholders for the missing ones
#[must_use]
fn input_slots(digits: &[u8], length: usize) -> String {
    let mut slots: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    slots.extend(std::iter::repeat_n('_', length.saturating_sub(digits.len())));
    slots
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.game.current_attempt() {
        Some(attempt) => (
            format!(
                " Enter {}-digit guess #{attempt} | ESC to give up ",
                app.config.secret_length()
            ),
            input_slots(app.buffer.digits(), app.buffer.length()),
            Color::Yellow,
        ),
        None => (
            " Game over | 'n' new game, 'q' quit ".to_string(),
            String::new(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let state_text = match app.game.state() {
        GameState::AwaitingGuess { .. } => "Playing",
        GameState::Solved { .. } => "Solved",
        GameState::Exhausted => "Out of guesses",
        GameState::Cancelled => "Gave up",
    };
    let best = app
        .stats
        .best_attempts
        .map_or_else(|| "-".to_string(), |b| b.to_string());

    let status = Paragraph::new(format!(
        "{state_text} | Games: {} | Win Rate: {:.0}% | Best: {best}",
        app.stats.total_games,
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));

    f.render_widget(status, area);
}
