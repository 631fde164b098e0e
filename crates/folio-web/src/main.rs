//! folio-web: Axum web server entry point.
//! Loads config, builds the responder, serves the chat API.

mod server;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use folio_core::config::Config;

use server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let config = if project_root.join("config.yaml").is_file() {
        Config::load_from_dir(&project_root)?
    } else {
        warn!("No config.yaml in {}, using defaults", project_root.display());
        let mut config = Config::default();
        config.apply_overrides(|var| std::env::var(var).ok())?;
        config
    };

    info!(
        "Assistant for {} (match mode {:?}, typing delay {}ms)",
        config.profile.name, config.match_mode, config.typing_delay_ms
    );

    let port = config.port;
    let state = Arc::new(AppState::new(config, project_root)?);
    let app = server::router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    eprintln!("\n  Open http://localhost:{} to chat\n", port);

    // Graceful shutdown on Ctrl+C
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Shutdown signal received");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    info!("Server stopped.");
    Ok(())
}
