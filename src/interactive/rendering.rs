//! TUI rendering with ratatui
//!
//! Board, keyboard and messages for the full-screen game.

use super::app::{App, MessageStyle};
use crate::core::{LetterMark, Word};
use crate::game::{KeyboardState, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board_height = u16::try_from(app.rules.max_guesses() * 2 + 1).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Length(board_height + 2), // Board
            Constraint::Length(3),                // Alert
            Constraint::Length(5),                // Keyboard
            Constraint::Min(0),                   // Spacer
            Constraint::Length(3),                // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_alert(f, app, chunks[2]);
    render_keyboard(f, app.session.keyboard(), chunks[3]);
    render_status(f, app, chunks[5]);
}

fn mark_style(mark: Option<LetterMark>) -> Style {
    match mark {
        Some(LetterMark::Hit) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterMark::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterMark::Miss) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style),
        Span::raw(" "),
    ]
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
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

fn scored_line(guess: &Word, marks: impl Iterator<Item = LetterMark>) -> Line<'static> {
    let spans: Vec<Span> = guess
        .letters()
        .iter()
        .zip(marks)
        .flat_map(|(&letter, mark)| tile(char::from(letter), mark_style(Some(mark))))
        .collect();
    Line::from(spans)
}

fn input_line(app: &App) -> Line<'static> {
    let style = if app.is_shaking() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let mut letters = app.input.chars();
    let spans: Vec<Span> = (0..app.rules.answer_length())
        .flat_map(|_| tile(letters.next().unwrap_or('_'), style))
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut lines = Vec::with_capacity(app.rules.max_guesses() * 2 + 1);
    lines.push(Line::from(""));

    for record in session.history() {
        lines.push(scored_line(&record.guess, record.row.iter()));
        lines.push(Line::from(""));
    }

    let mut empty_rows = session.remaining_guesses();
    if !session.is_over() && empty_rows > 0 {
        lines.push(input_line(app));
        lines.push(Line::from(""));
        empty_rows -= 1;
    }

    let empty_style = Style::default().fg(Color::DarkGray);
    for _ in 0..empty_rows {
        let spans: Vec<Span> = (0..app.rules.answer_length())
            .flat_map(|_| tile('·', empty_style))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = format!(
        " Guess {}/{} ",
        (session.turns_used() + 1).min(app.rules.max_guesses()),
        app.rules.max_guesses()
    );
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_alert(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match &app.alert {
        Some(alert) => {
            let color = match alert.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            (alert.text.as_str(), color)
        }
        None => ("", Color::White),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, area: Rect) {
    let lines: Vec<Line> = keyboard
        .qwerty_rows()
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .flat_map(|(letter, mark)| tile(letter, mark_style(mark)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let streak_text = format!(
        "Streak: {} | Best: {}",
        app.stats.current_streak, app.stats.max_streak
    );
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.session.outcome() {
        Outcome::InProgress => "Enter: Submit | Backspace: Delete | Ctrl+N: New | Esc: Quit",
        Outcome::Won | Outcome::Lost => "Enter/n: New Game | q/Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
