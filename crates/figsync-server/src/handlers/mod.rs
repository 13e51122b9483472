//! HTTP request handlers.

pub(crate) mod cache;
pub(crate) mod components;
pub(crate) mod debug;
pub(crate) mod health;
pub(crate) mod refresh;
pub(crate) mod sync;

use std::sync::Arc;

use figsync_core::SyncOrchestrator;

use crate::error::ServerError;
use crate::state::AppState;

/// Run a blocking orchestrator call off the async runtime.
pub(crate) async fn run_blocking<T, F>(state: &AppState, f: F) -> Result<T, ServerError>
where
    F: FnOnce(&SyncOrchestrator) -> T + Send + 'static,
    T: Send + 'static,
{
    let orchestrator = Arc::clone(&state.orchestrator);
    Ok(tokio::task::spawn_blocking(move || f(&orchestrator)).await?)
}
