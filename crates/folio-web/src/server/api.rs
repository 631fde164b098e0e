//! REST API endpoints: profile, chat sessions, contact form.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use folio_core::contact::ContactForm;
use folio_core::session::Session;

use super::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(get_health))
        .route("/api/profile", get(get_profile))
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/{id}", get(get_session).delete(delete_session))
        .route("/api/sessions/{id}/messages", post(post_message))
        .route("/api/contact", post(post_contact))
}

fn session_json(session: &Session) -> Value {
    json!({
        "id": session.id,
        "state": session.state,
        "transcript": session.transcript,
    })
}

fn not_found(id: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"ok": false, "error": format!("session '{}' not found", id)})),
    )
}

// --- Health ---

async fn get_health() -> Json<Value> {
    Json(json!({"ok": true}))
}

// --- Profile ---

async fn get_profile(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(serde_json::to_value(&state.config.profile).unwrap_or(json!({})))
}

// --- Sessions ---

async fn create_session(State(state): State<Arc<AppState>>) -> Json<Value> {
    let session = state.create_session().await;
    Json(session_json(&session))
}

async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    let sessions = state.sessions.read().await;
    match sessions.get(&id) {
        Some(session) => (StatusCode::OK, Json(session_json(session))),
        None => not_found(&id),
    }
}

async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<Value> {
    let removed = state.sessions.write().await.remove(&id).is_some();
    if removed {
        info!("Closed session {}", id);
    }
    Json(json!({"ok": removed}))
}

// --- Message ---

#[derive(Deserialize)]
struct MessageBody {
    text: Option<String>,
}

async fn post_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<MessageBody>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    let mut sessions = state.sessions.write().await;
    let Some(session) = sessions.get_mut(&id) else {
        return not_found(&id);
    };

    let text = match payload {
        Ok(Json(body)) => body.text.unwrap_or_default(),
        Err(e) => {
            warn!("Rejected message payload for session {}: {}", id, e);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"ok": false, "error": "Invalid request body"})),
            );
        }
    };

    match session.submit(&state.responder, &text) {
        Some(reply) => (
            StatusCode::OK,
            Json(json!({
                "ok": true,
                "reply": reply.text,
                "topic": reply.topic,
                "state": reply.next_state,
            })),
        ),
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({"ok": false, "error": "empty message"})),
        ),
    }
}

// --- Contact ---

async fn post_contact(
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(e) => {
            warn!("Rejected contact payload: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"success": false, "error": "Invalid request body"})),
            );
        }
    };

    match form.validate() {
        Ok(submission) => {
            info!(
                name = %submission.name,
                email = %submission.email,
                message = %submission.message,
                "Contact form submission"
            );
            (StatusCode::OK, Json(json!({"success": true})))
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": e.to_string()})),
        ),
    }
}
