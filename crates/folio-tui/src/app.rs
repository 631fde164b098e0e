//! App state, input handling, delayed replies.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use folio_core::config::Config;
use folio_core::responder::Responder;
use folio_core::session::Session;

/// An accepted utterance whose reply is held back until `due`.
struct PendingReply {
    utterance: String,
    due: Instant,
}

/// The main application state.
pub struct App {
    pub session: Session,
    pub responder: Responder,
    pub title: String,
    pub tagline: String,
    pub input: String,
    pub scroll_offset: usize,
    pub should_quit: bool,
    typing_delay: Duration,
    pending: VecDeque<PendingReply>,
}

impl App {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let responder = config.responder()?;
        let session = Session::new(responder.script());

        Ok(App {
            session,
            responder,
            title: config.profile.name.clone(),
            tagline: config.profile.tagline.clone(),
            input: String::new(),
            scroll_offset: 0,
            should_quit: false,
            typing_delay: config.typing_delay(),
            pending: VecDeque::new(),
        })
    }

    /// True while at least one reply is still "being typed".
    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Submit the input line. `/reset` starts the conversation over.
    pub fn send_message(&mut self, now: Instant) {
        let text = std::mem::take(&mut self.input);

        if text.trim() == "/reset" {
            self.pending.clear();
            self.session.reset(self.responder.script());
            self.scroll_offset = 0;
            return;
        }

        if let Some(utterance) = self.session.accept(&text) {
            self.pending.push_back(PendingReply {
                utterance,
                due: now + self.typing_delay,
            });
            self.scroll_offset = 0;
        }
    }

    /// Deliver every reply whose delay has elapsed. Returns whether any did.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut delivered = false;
        while self.pending.front().is_some_and(|p| p.due <= now) {
            if let Some(p) = self.pending.pop_front() {
                self.session.reply(&self.responder, &p.utterance);
                delivered = true;
            }
        }
        if delivered {
            self.scroll_offset = 0;
        }
        delivered
    }

    /// Scroll back three messages, keeping at least one on screen.
    pub fn scroll_up(&mut self) {
        let limit = self.session.transcript.len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add(3).min(limit);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::types::{ConversationState, Role};

    fn app_with_delay(ms: u64) -> App {
        let config = Config {
            typing_delay_ms: ms,
            ..Config::default()
        };
        App::new(&config).unwrap()
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut app = app_with_delay(1000);
        app.input = "   ".into();
        app.send_message(Instant::now());
        assert!(!app.is_typing());
        assert_eq!(app.session.transcript.len(), 1);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_reply_waits_for_delay() {
        let mut app = app_with_delay(1000);
        let start = Instant::now();
        app.input = "what do you work on?".into();
        app.send_message(start);

        assert!(app.is_typing());
        assert_eq!(app.session.transcript.len(), 2);
        assert!(!app.tick(start + Duration::from_millis(500)));
        assert_eq!(app.session.transcript.len(), 2);

        assert!(app.tick(start + Duration::from_millis(1000)));
        assert!(!app.is_typing());
        assert_eq!(app.session.transcript.len(), 3);
        assert_eq!(app.session.transcript[2].role, Role::Assistant);
    }

    #[test]
    fn test_queued_replies_keep_order() {
        let mut app = app_with_delay(0);
        let now = Instant::now();
        app.input = "resume".into();
        app.send_message(now);
        app.input = "india".into();
        app.send_message(now);

        app.tick(now);
        assert_eq!(app.session.transcript.len(), 5);
        assert!(app.session.transcript[4].content.contains("India"));
        assert_eq!(app.session.state, ConversationState::Idle);
    }

    #[test]
    fn test_reset_command() {
        let mut app = app_with_delay(0);
        let now = Instant::now();
        app.input = "cv".into();
        app.send_message(now);
        app.tick(now);
        assert_eq!(app.session.state, ConversationState::AwaitingResumeVersion);

        app.input = "/reset".into();
        app.send_message(now);
        assert_eq!(app.session.state, ConversationState::Idle);
        assert_eq!(app.session.transcript.len(), 1);
    }

    #[test]
    fn test_scroll_saturates() {
        let mut app = app_with_delay(0);
        let now = Instant::now();
        for question in ["skills", "projects", "contact"] {
            app.input = question.into();
            app.send_message(now);
        }
        app.tick(now);
        assert_eq!(app.session.transcript.len(), 7);

        app.scroll_down();
        assert_eq!(app.scroll_offset, 0);
        app.scroll_up();
        assert_eq!(app.scroll_offset, 3);
        for _ in 0..10 {
            app.scroll_up();
        }
        assert_eq!(app.scroll_offset, 6);
        app.scroll_down();
        assert_eq!(app.scroll_offset, 3);
    }

    #[test]
    fn test_scroll_on_fresh_session_stays_put() {
        let mut app = app_with_delay(0);
        app.scroll_up();
        assert_eq!(app.scroll_offset, 0);
    }
}
