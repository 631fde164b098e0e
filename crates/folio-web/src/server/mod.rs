//! Web server: Axum router + shared state.

pub mod api;
pub mod ws;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use folio_core::config::Config;
use folio_core::responder::Responder;
use folio_core::session::Session;

/// Shared application state: one responder, many sessions keyed by id.
pub struct AppState {
    pub config: Config,
    pub responder: Responder,
    pub sessions: RwLock<HashMap<String, Session>>,
    pub project_root: PathBuf,
}

impl AppState {
    pub fn new(config: Config, project_root: PathBuf) -> anyhow::Result<Self> {
        Ok(Self {
            responder: config.responder()?,
            config,
            sessions: RwLock::new(HashMap::new()),
            project_root,
        })
    }

    /// Register a fresh session, evicting the oldest once the store is full.
    pub async fn create_session(&self) -> Session {
        let session = Session::new(self.responder.script());
        let mut sessions = self.sessions.write().await;

        while sessions.len() >= self.config.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|s| s.created_at)
                .map(|s| s.id.clone());
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    info!("Evicted session {}", id);
                }
                None => break,
            }
        }

        sessions.insert(session.id.clone(), session.clone());
        info!("Created session {} ({} live)", session.id, sessions.len());
        session
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::very_permissive();

    let mut app = Router::new()
        .merge(api::routes())
        .merge(ws::routes())
        .layer(cors)
        .with_state(state.clone());

    // Serve the static site if a public/ directory exists
    let public_dir = state.project_root.join("public");
    if public_dir.is_dir() {
        let index_html = public_dir.join("index.html");
        app = app.fallback_service(
            ServeDir::new(&public_dir).not_found_service(ServeFile::new(index_html)),
        );
    }

    app
}
