//! One visitor's conversation: the carried state plus the transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::responder::Responder;
use crate::script::Script;
use crate::types::{ChatMessage, ConversationState, Reply};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub state: ConversationState,
    pub transcript: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Start a conversation: idle, with the assistant's greeting on screen.
    pub fn new(script: &Script) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            state: ConversationState::Idle,
            transcript: vec![ChatMessage::assistant(script.greeting.clone())],
            created_at: Utc::now(),
        }
    }

    /// Record a user message. Blank input is dropped and yields `None`.
    pub fn accept(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        self.transcript.push(ChatMessage::user(text));
        Some(text.to_string())
    }

    /// Answer an accepted utterance and carry the next state forward.
    pub fn reply(&mut self, responder: &Responder, utterance: &str) -> Reply {
        let reply = responder.respond(self.state, utterance);
        if reply.next_state != self.state {
            info!(
                "Session {}: {} -> {}",
                self.id, self.state, reply.next_state
            );
        }
        self.state = reply.next_state;
        self.transcript.push(ChatMessage::assistant(reply.text.clone()));
        reply
    }

    /// `accept` followed immediately by `reply`.
    pub fn submit(&mut self, responder: &Responder, text: &str) -> Option<Reply> {
        let utterance = self.accept(text)?;
        Some(self.reply(responder, &utterance))
    }

    pub fn reset(&mut self, script: &Script) {
        self.state = ConversationState::Idle;
        self.transcript = vec![ChatMessage::assistant(script.greeting.clone())];
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.transcript.last()
    }
}
