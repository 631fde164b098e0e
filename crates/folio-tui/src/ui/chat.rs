//! Scrollable transcript: visitor on the left in yellow, assistant in green.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use folio_core::types::Role;

use crate::app::App;

/// `HH:MM` from an RFC 3339 timestamp, blank if it doesn't parse.
fn clock(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&chrono::Local).format("%H:%M").to_string())
        .unwrap_or_default()
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.tagline.is_empty() {
        format!(" {} ", app.title)
    } else {
        format!(" {} · {} ", app.title, app.tagline)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // scroll_offset counts messages hidden below the pane
    let transcript = &app.session.transcript;
    let end = transcript.len().saturating_sub(app.scroll_offset);

    let mut lines: Vec<Line> = Vec::new();
    for msg in &transcript[..end] {
        let (fg, who) = match msg.role {
            Role::User => (Color::Yellow, "You"),
            Role::Assistant => (Color::Green, "Assistant"),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", clock(&msg.timestamp)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format!("{}: ", who), Style::default().fg(fg).bold()),
            Span::styled(msg.content.clone(), Style::default().fg(fg)),
        ]));
    }

    if app.is_typing() && app.scroll_offset == 0 {
        lines.push(Line::styled(
            "Assistant is typing...",
            Style::default().fg(Color::DarkGray).italic(),
        ));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

    // Pin the last wrapped row to the bottom of the pane.
    let rows = paragraph.line_count(inner.width);
    let top = rows.saturating_sub(inner.height as usize);
    let paragraph = paragraph.scroll((u16::try_from(top).unwrap_or(u16::MAX), 0));

    frame.render_widget(paragraph, inner);
}
