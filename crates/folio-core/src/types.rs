//! Core types: ConversationState, Topic, Reply, ChatMessage.

use serde::{Deserialize, Serialize};

// ── Conversation state ──

/// Where a session sits in the dialogue. Owned by the session and threaded
/// through every call to the responder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingResumeVersion,
}

impl std::fmt::Display for ConversationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversationState::Idle => write!(f, "idle"),
            ConversationState::AwaitingResumeVersion => write!(f, "awaiting_resume_version"),
        }
    }
}

// ── Topics ──

/// Which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    ResumeOffer,
    ResumeUk,
    ResumeIndia,
    ResumeReprompt,
    Skills,
    Projects,
    Education,
    Contact,
    Experience,
    Focus,
    Greeting,
    Fallback,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::ResumeOffer => "resume_offer",
            Topic::ResumeUk => "resume_uk",
            Topic::ResumeIndia => "resume_india",
            Topic::ResumeReprompt => "resume_reprompt",
            Topic::Skills => "skills",
            Topic::Projects => "projects",
            Topic::Education => "education",
            Topic::Contact => "contact",
            Topic::Experience => "experience",
            Topic::Focus => "focus",
            Topic::Greeting => "greeting",
            Topic::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Reply ──

/// One responder output: the text to show and the state to carry forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub topic: Topic,
    pub next_state: ConversationState,
}

impl Reply {
    pub fn into_parts(self) -> (String, ConversationState) {
        (self.text, self.next_state)
    }
}

// ── Transcript ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serializes_snake_case() {
        let json = serde_json::to_string(&ConversationState::AwaitingResumeVersion).unwrap();
        assert_eq!(json, "\"awaiting_resume_version\"");
        assert_eq!(ConversationState::default(), ConversationState::Idle);
        assert_eq!(
            ConversationState::AwaitingResumeVersion.to_string(),
            "awaiting_resume_version"
        );
    }

    #[test]
    fn test_topic_display_matches_serde() {
        for topic in [Topic::ResumeOffer, Topic::Skills, Topic::Fallback] {
            let json = serde_json::to_string(&topic).unwrap();
            assert_eq!(json, format!("\"{}\"", topic));
        }
    }

    #[test]
    fn test_reply_into_parts() {
        let reply = Reply {
            text: "hi there".into(),
            topic: Topic::Greeting,
            next_state: ConversationState::Idle,
        };
        let (text, state) = reply.into_parts();
        assert_eq!(text, "hi there");
        assert_eq!(state, ConversationState::Idle);
    }
}
