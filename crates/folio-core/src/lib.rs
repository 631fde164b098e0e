//! folio-core: Pure domain logic, no UI.
//!
//! The scripted portfolio assistant: a keyword-rule responder over a
//! two-state conversation, the reply script it draws from, sessions that
//! carry state and transcript between turns, plus the site profile and
//! contact-form validation. Frontends (TUI, Web) drive sessions and render
//! `ChatEvent`s however they like.

pub mod config;
pub mod contact;
pub mod events;
pub mod profile;
pub mod responder;
pub mod script;
pub mod session;
pub mod types;
