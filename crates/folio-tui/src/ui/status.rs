//! Status bar: conversation state, message count, typing indicator.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use folio_core::types::ConversationState;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let (state_str, state_color) = match app.session.state {
        ConversationState::Idle => ("idle", Color::DarkGray),
        ConversationState::AwaitingResumeVersion => ("resume: UK or India?", Color::Magenta),
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", state_str),
            Style::default().fg(Color::Black).bg(state_color),
        ),
        Span::raw(format!(" messages: {} ", app.session.transcript.len())),
    ];

    if app.is_typing() {
        spans.push(Span::styled(" typing ", Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}
