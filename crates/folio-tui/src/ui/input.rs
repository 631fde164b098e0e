//! Text input bar.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

/// Columns to skip and the cursor column, so the cursor stays inside `width`.
fn visible_tail(input: &str, width: u16) -> (u16, u16) {
    let len = input.chars().count();
    let room = usize::from(width.saturating_sub(1));
    let skip = len.saturating_sub(room);
    let skip = u16::try_from(skip).unwrap_or(u16::MAX);
    let col = u16::try_from(len.min(room)).unwrap_or(0);
    (skip, col)
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Ask me something (Enter to send, /reset to start over, Esc to quit) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (skip, col) = visible_tail(&app.input, inner.width);
    let input = Paragraph::new(app.input.as_str())
        .style(Style::default().fg(Color::White))
        .scroll((0, skip));
    frame.render_widget(input, inner);

    frame.set_cursor_position(Position::new(inner.x + col, inner.y));
}
