//! Application state.

use std::sync::Arc;

use figsync_core::SyncOrchestrator;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Sync pipeline (blocking; call via `spawn_blocking`).
    pub(crate) orchestrator: Arc<SyncOrchestrator>,
    /// Application version.
    pub(crate) version: String,
}
