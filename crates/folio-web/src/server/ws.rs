//! WebSocket: live chat. Each connection owns a private session.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::{error, info};

use folio_core::events::ChatEvent;
use folio_core::session::Session;
use folio_core::types::Reply;

use super::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/ws", get(ws_handler))
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Send one event; `false` means the client is gone.
async fn send_event(socket: &mut WebSocket, event: &ChatEvent) -> bool {
    match serde_json::to_string(event) {
        Ok(json) => socket.send(Message::Text(json.into())).await.is_ok(),
        Err(e) => {
            error!("Failed to serialize event: {}", e);
            true
        }
    }
}

async fn send_all(socket: &mut WebSocket, events: &[ChatEvent]) -> bool {
    for event in events {
        if !send_event(socket, event).await {
            return false;
        }
    }
    true
}

/// The newest transcript entry as a `message` event.
fn transcript_tail(session: &Session) -> Vec<ChatEvent> {
    session
        .last_message()
        .cloned()
        .map(ChatEvent::Message)
        .into_iter()
        .collect()
}

/// Take one text frame. Blank frames yield nothing; otherwise the
/// utterance plus the user echo and typing-on events.
fn accept_frame(session: &mut Session, text: &str) -> Option<(String, Vec<ChatEvent>)> {
    let utterance = session.accept(text)?;
    let mut events = transcript_tail(session);
    events.push(ChatEvent::typing(true));
    Some((utterance, events))
}

/// Assistant message, the state it left behind, typing off.
fn reply_events(session: &Session, reply: &Reply) -> Vec<ChatEvent> {
    let mut events = transcript_tail(session);
    events.push(ChatEvent::state(reply.next_state));
    events.push(ChatEvent::typing(false));
    events
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    let mut session = Session::new(state.responder.script());
    let delay = state.config.typing_delay();

    info!("WebSocket client connected (session {})", session.id);

    if !send_all(&mut socket, &transcript_tail(&session)).await {
        return;
    }

    while let Some(msg) = socket.recv().await {
        let text = match msg {
            Ok(Message::Text(text)) => text.to_string(),
            Ok(Message::Close(_)) | Err(_) => break,
            Ok(_) => continue, // ping/pong/binary
        };

        let Some((utterance, events)) = accept_frame(&mut session, &text) else {
            continue;
        };
        if !send_all(&mut socket, &events).await {
            break;
        }

        tokio::time::sleep(delay).await;

        let reply = session.reply(&state.responder, &utterance);
        if !send_all(&mut socket, &reply_events(&session, &reply)).await {
            break;
        }
    }

    info!("WebSocket client disconnected (session {})", session.id);
}

#[cfg(test)]
mod tests {
    use folio_core::responder::Responder;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_transcript_tail_follows_last_entry() {
        let responder = Responder::default();
        let mut session = Session::new(responder.script());

        let events = transcript_tail(&session);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].to_ws_json()["data"]["role"], "assistant");

        session.accept("hello");
        let events = transcript_tail(&session);
        assert_eq!(events[0].to_ws_json()["data"]["content"], "hello");
    }

    /// `(event, key field)` pairs, enough to pin down order and payload.
    fn summarize(events: &[ChatEvent]) -> Vec<(String, serde_json::Value)> {
        events
            .iter()
            .map(|e| {
                let json = e.to_ws_json();
                let key = match json["event"].as_str() {
                    Some("message") => json["data"]["role"].clone(),
                    Some("typing") => json["data"]["active"].clone(),
                    _ => json["data"]["state"].clone(),
                };
                (json["event"].as_str().unwrap_or_default().to_string(), key)
            })
            .collect()
    }

    #[test]
    fn test_blank_frame_sends_nothing() {
        let mut session = Session::new(Responder::default().script());
        assert!(accept_frame(&mut session, "   ").is_none());
        assert!(accept_frame(&mut session, "").is_none());
        assert_eq!(session.transcript.len(), 1);
    }

    #[test]
    fn test_turn_event_order() {
        let responder = Responder::default();
        let mut session = Session::new(responder.script());

        let (utterance, events) = accept_frame(&mut session, "what tech do you use?").unwrap();
        assert_eq!(
            summarize(&events),
            vec![
                ("message".to_string(), json!("user")),
                ("typing".to_string(), json!(true)),
            ]
        );
        assert_eq!(events[0].to_ws_json()["data"]["content"], "what tech do you use?");

        let reply = session.reply(&responder, &utterance);
        let events = reply_events(&session, &reply);
        assert_eq!(
            summarize(&events),
            vec![
                ("message".to_string(), json!("assistant")),
                ("state".to_string(), json!("idle")),
                ("typing".to_string(), json!(false)),
            ]
        );
        assert_eq!(
            events[0].to_ws_json()["data"]["content"],
            responder.script().skills.as_str()
        );
    }

    #[test]
    fn test_resume_round_trip_over_two_turns() {
        let responder = Responder::default();
        let mut session = Session::new(responder.script());

        let (utterance, _) = accept_frame(&mut session, "send your resume").unwrap();
        let reply = session.reply(&responder, &utterance);
        let events = reply_events(&session, &reply);
        assert_eq!(events[1].to_ws_json()["data"]["state"], "awaiting_resume_version");
        assert!(events[0].to_ws_json()["data"]["content"]
            .as_str()
            .unwrap()
            .contains("United Kingdom"));

        let (utterance, _) = accept_frame(&mut session, "UK").unwrap();
        let reply = session.reply(&responder, &utterance);
        let events = reply_events(&session, &reply);
        assert_eq!(events[1].to_ws_json()["data"]["state"], "idle");
        assert!(events[0].to_ws_json()["data"]["content"]
            .as_str()
            .unwrap()
            .contains("Resume_UK.pdf"));
        assert_eq!(session.transcript.len(), 5);
    }
}
