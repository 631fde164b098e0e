//! Scripted dialogue responder: keyword rules over a two-state machine.
//!
//! `respond` is a pure function of (state, utterance): the responder owns
//! only its script and match mode, and the caller carries the
//! `ConversationState` from one call to the next.

use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::script::{Script, ScriptError};
use crate::types::{ConversationState, Reply, Topic};

/// Answers accepted while a resume version is pending, in priority order.
pub const RESUME_CHOICE_RULES: &[(Topic, &[&str])] = &[
    (Topic::ResumeUk, &["uk", "united kingdom"]),
    (Topic::ResumeIndia, &["india"]),
];

/// Topic keywords tested while idle. First group with any hit wins.
pub const IDLE_RULES: &[(Topic, &[&str])] = &[
    (Topic::ResumeOffer, &["resume", "cv", "download", "profile"]),
    (Topic::Skills, &["skill", "stack", "tech"]),
    (Topic::Projects, &["project", "work"]),
    (Topic::Education, &["education", "study", "degree"]),
    (Topic::Contact, &["contact", "email", "hire"]),
    (Topic::Experience, &["experience", "job"]),
    (Topic::Focus, &["focus", "doing now"]),
    (Topic::Greeting, &["hello", "hi"]),
];

/// How a keyword must appear in the lower-cased utterance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Anywhere, including inside longer words ("which" hits "hi").
    #[default]
    Substring,
    /// Only at the start of a word ("hiring" hits "hi", "which" does not).
    /// Any Unicode letter or digit before the keyword joins it to a word.
    WordStart,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "word_start" | "word-start" => Ok(MatchMode::WordStart),
            other => Err(format!("unknown match mode: {}", other)),
        }
    }
}

fn word_start_patterns(rules: &[(Topic, &[&str])]) -> Vec<(Topic, Regex)> {
    rules
        .iter()
        .map(|(topic, keywords)| {
            let alternation = keywords
                .iter()
                .map(|k| regex_lite::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            let re = Regex::new(&format!(r"\b(?:{})", alternation))
                .expect("escaped keyword alternation is a valid pattern");
            (*topic, re)
        })
        .collect()
}

/// `\b` in regex-lite only knows ASCII, so recheck the char before the hit.
fn starts_word(haystack: &str, at: usize) -> bool {
    haystack[..at]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric() && c != '_')
}

static RESUME_CHOICE_WORDS: LazyLock<Vec<(Topic, Regex)>> =
    LazyLock::new(|| word_start_patterns(RESUME_CHOICE_RULES));

static IDLE_WORDS: LazyLock<Vec<(Topic, Regex)>> =
    LazyLock::new(|| word_start_patterns(IDLE_RULES));

#[derive(Debug, Clone, Default)]
pub struct Responder {
    script: Script,
    mode: MatchMode,
}

impl Responder {
    /// Fails if any reply in `script` is blank, so every `Reply` carries text.
    pub fn new(script: Script, mode: MatchMode) -> Result<Self, ScriptError> {
        script.validate()?;
        Ok(Self { script, mode })
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Pick the reply for one utterance and the state that follows it.
    pub fn respond(&self, state: ConversationState, utterance: &str) -> Reply {
        let lowered = utterance.to_lowercase();

        let (topic, next_state) = match state {
            ConversationState::AwaitingResumeVersion => {
                match self.classify(&lowered, RESUME_CHOICE_RULES, &RESUME_CHOICE_WORDS) {
                    Some(topic) => (topic, ConversationState::Idle),
                    None => (
                        Topic::ResumeReprompt,
                        ConversationState::AwaitingResumeVersion,
                    ),
                }
            }
            ConversationState::Idle => {
                match self.classify(&lowered, IDLE_RULES, &IDLE_WORDS) {
                    Some(Topic::ResumeOffer) => {
                        (Topic::ResumeOffer, ConversationState::AwaitingResumeVersion)
                    }
                    Some(topic) => (topic, ConversationState::Idle),
                    None => (Topic::Fallback, ConversationState::Idle),
                }
            }
        };

        debug!(%state, %topic, %next_state, "classified utterance");

        Reply {
            text: self.script.text(topic).to_string(),
            topic,
            next_state,
        }
    }

    fn classify(
        &self,
        lowered: &str,
        rules: &[(Topic, &[&str])],
        words: &[(Topic, Regex)],
    ) -> Option<Topic> {
        match self.mode {
            MatchMode::Substring => rules
                .iter()
                .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
                .map(|(topic, _)| *topic),
            MatchMode::WordStart => words
                .iter()
                .find(|(_, re)| {
                    re.find_iter(lowered)
                        .any(|m| starts_word(lowered, m.start()))
                })
                .map(|(topic, _)| *topic),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_state() -> impl Strategy<Value = ConversationState> {
        prop_oneof![
            Just(ConversationState::Idle),
            Just(ConversationState::AwaitingResumeVersion),
        ]
    }

    fn arb_mode() -> impl Strategy<Value = MatchMode> {
        prop_oneof![Just(MatchMode::Substring), Just(MatchMode::WordStart)]
    }

    proptest! {
        #[test]
        fn reply_is_never_empty(state in arb_state(), mode in arb_mode(), utterance in ".{0,80}") {
            let reply = Responder::new(Script::default(), mode).unwrap().respond(state, &utterance);
            prop_assert!(!reply.text.is_empty());
        }

        #[test]
        fn respond_is_pure(state in arb_state(), utterance in "[a-zA-Z ]{0,40}") {
            let r = Responder::default();
            prop_assert_eq!(r.respond(state, &utterance), r.respond(state, &utterance));
        }

        #[test]
        fn only_resume_offer_leaves_idle(utterance in "[a-zA-Z ]{0,40}") {
            let reply = Responder::default().respond(ConversationState::Idle, &utterance);
            let awaiting = reply.next_state == ConversationState::AwaitingResumeVersion;
            prop_assert_eq!(awaiting, reply.topic == Topic::ResumeOffer);
        }

        #[test]
        fn pending_choice_holds_until_answered(utterance in "[a-zA-Z ]{0,40}") {
            let reply = Responder::default()
                .respond(ConversationState::AwaitingResumeVersion, &utterance);
            let lowered = utterance.to_lowercase();
            let answered = lowered.contains("uk")
                || lowered.contains("united kingdom")
                || lowered.contains("india");
            prop_assert_eq!(reply.next_state == ConversationState::Idle, answered);
        }
    }
}
