//! ChatEvent enum: pushed from a session to live chat clients.

use serde::{Deserialize, Serialize};

use crate::types::{ChatMessage, ConversationState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingData {
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateData {
    pub state: ConversationState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ChatEvent {
    /// A message was appended to the transcript (either side)
    #[serde(rename = "message")]
    Message(ChatMessage),

    /// Assistant typing indicator on/off
    #[serde(rename = "typing")]
    Typing(TypingData),

    /// Conversation state after a reply
    #[serde(rename = "state")]
    State(StateData),
}

impl ChatEvent {
    pub fn typing(active: bool) -> Self {
        ChatEvent::Typing(TypingData { active })
    }

    pub fn state(state: ConversationState) -> Self {
        ChatEvent::State(StateData { state })
    }

    /// Serialize to the JSON format the frontend expects:
    /// `{"event": "...", "data": {...}}`
    pub fn to_ws_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_event_shape() {
        let json = ChatEvent::typing(true).to_ws_json();
        assert_eq!(json["event"], "typing");
        assert_eq!(json["data"]["active"], true);
    }

    #[test]
    fn test_message_event_shape() {
        let json = ChatEvent::Message(ChatMessage::user("hi")).to_ws_json();
        assert_eq!(json["event"], "message");
        assert_eq!(json["data"]["role"], "user");
        assert_eq!(json["data"]["content"], "hi");
    }

    #[test]
    fn test_state_event_shape() {
        let json = ChatEvent::state(ConversationState::AwaitingResumeVersion).to_ws_json();
        assert_eq!(json["data"]["state"], "awaiting_resume_version");
    }
}
