//! Game screen rendering
//!
//! Gallows figure, error counter, masked title, the A-Z letter grid with
//! used letters dimmed, and an outcome banner once the round ends.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use libreelhang::round::progress_art;
use libreelhang::{RoundState, MAX_ERRORS};

use crate::app::AppState;
use crate::ui::{centered_rect, render_status_bar};

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Render the game screen
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),  // Gallows + error counter
            Constraint::Length(3),  // Masked title
            Constraint::Min(4),     // Letter grid
            Constraint::Length(4),  // Status bar
        ])
        .split(area);

    render_gallows(frame, chunks[0], state);
    render_masked_title(frame, chunks[1], state);
    render_letter_grid(frame, chunks[2], state);
    render_status_bar(frame, chunks[3], state);

    if let Some(round) = state.game.round.as_ref() {
        if round.is_terminal() {
            render_outcome_banner(frame, area, round);
        }
    }
}

fn render_gallows(frame: &mut Frame, area: Rect, state: &AppState) {
    let error_count = state
        .game
        .round
        .as_ref()
        .map(|round| round.error_count)
        .unwrap_or(0);

    let mut lines: Vec<Line> = progress_art(error_count)
        .lines()
        .map(Line::from)
        .collect();
    lines.push(Line::from(Span::styled(
        format!("Errors: {}/{}", error_count, MAX_ERRORS),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));

    let gallows = Paragraph::new(lines)
        .block(Block::default().title(" Reelhang ").borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(gallows, area);
}

fn render_masked_title(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = match state.game.round.as_ref() {
        Some(round) => {
            // Spaced out so placeholders are easy to count
            round
                .masked_progress
                .chars()
                .map(|ch| ch.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        }
        None if state.game.loading => "Loading movies...".to_string(),
        None => "No round in progress".to_string(),
    };

    let title = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_letter_grid(frame: &mut Frame, area: Rect, state: &AppState) {
    let used = state
        .game
        .round
        .as_ref()
        .map(|round| round.used_letters.clone())
        .unwrap_or_default();

    // Two rows of thirteen keys
    let rows: Vec<Line> = ALPHABET
        .as_bytes()
        .chunks(13)
        .map(|chunk| {
            let spans: Vec<Span> = chunk
                .iter()
                .flat_map(|byte| {
                    let letter = *byte as char;
                    let style = if used.contains(&letter) {
                        Style::default().fg(Color::DarkGray)
                    } else {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    };
                    [Span::styled(letter.to_string(), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(rows)
        .block(Block::default().title(" Letters ").borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(grid, area);
}

/// Modal banner naming the outcome; reveals the title on a loss.
fn render_outcome_banner(frame: &mut Frame, area: Rect, round: &RoundState) {
    let popup_area = centered_rect(60, 30, area);

    let (headline, detail, color) = if round.outcome == libreelhang::Outcome::Won {
        (
            "You won!",
            format!("You guessed: {}", round.secret_title),
            Color::Green,
        )
    } else {
        (
            "You lost!",
            format!("The movie was: {}", round.secret_title),
            Color::Red,
        )
    };

    let text = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(detail),
        Line::from(""),
        Line::from("Press n for a new round"),
    ];

    let banner = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Round over ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(banner, popup_area);
}
