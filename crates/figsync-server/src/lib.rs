//! HTTP API for figsync.
//!
//! A thin JSON layer over [`SyncOrchestrator`] for the CMS editor:
//! - `POST /api/figma/sync` syncs one Figma URL
//! - `GET`/`DELETE /api/figma/cache` reports or clears the disk cache
//! - `POST /api/figma/refresh-page` re-syncs every asset on a page
//! - `GET /api/figma/debug` compares a cached and a busted sync
//! - `GET /api/figma/components` lists a file's components and design tokens
//!
//! # Architecture
//!
//! ```text
//! CMS editor ──HTTP──► axum router (figsync-server)
//!                        │
//!                        └─► spawn_blocking ──► SyncOrchestrator
//!                                                 ├─► SyncCache (disk)
//!                                                 └─► FigmaClient (ureq)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use figsync_core::SyncOrchestrator;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Application version (reported by the health endpoint).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener cannot bind.
pub async fn run_server(
    config: ServerConfig,
    orchestrator: SyncOrchestrator,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        orchestrator: Arc::new(orchestrator),
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from figsync config.
#[must_use]
pub fn server_config_from_config(config: &figsync_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        version,
    }
}
