//! Gallery screen rendering
//!
//! One numbered tile per fetched movie: display identifier, title, and
//! the image URL when the record carries one. A failed fetch leaves the
//! list empty with no error surface.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::ui::render_status_bar;

/// Render the gallery screen
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Movie list
            Constraint::Length(4), // Status bar
        ])
        .split(area);

    render_movie_list(frame, chunks[0], state);
    render_status_bar(frame, chunks[1], state);
}

fn render_movie_list(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.gallery.items.is_empty() {
        let message = if state.gallery.loading {
            "Loading movies..."
        } else {
            "No movies to show"
        };
        let placeholder = Paragraph::new(message)
            .block(Block::default().title(" Gallery ").borders(Borders::ALL))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = state
        .gallery
        .items
        .iter()
        .map(|item| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{} ", item.display_id),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    item.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])];

            if let Some(ref image) = item.image {
                lines.push(Line::from(Span::styled(
                    format!("  {}", image),
                    Style::default().fg(Color::DarkGray),
                )));
            }

            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Gallery ({} movies) ", state.gallery.items.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}
