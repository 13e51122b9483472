//! Single-asset sync endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use figsync_core::SyncResult;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::handlers::run_blocking;
use crate::state::AppState;

/// Request body for POST /api/figma/sync.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SyncRequest {
    url: Option<String>,
    name: Option<String>,
    #[serde(default)]
    bust_cache: bool,
}

/// Response for POST /api/figma/sync.
#[derive(Serialize)]
pub(crate) struct SyncResponse {
    success: bool,
    data: SyncResult,
}

/// Handle POST /api/figma/sync.
pub(crate) async fn post_sync(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SyncRequest>,
) -> Result<Json<SyncResponse>, ServerError> {
    let url = request
        .url
        .filter(|u| !u.is_empty())
        .ok_or(ServerError::BadRequest("Figma URL is required"))?;

    let data = run_blocking(&state, move |sync| {
        sync.sync(&url, request.name.as_deref(), request.bust_cache)
    })
    .await??;

    Ok(Json(SyncResponse {
        success: true,
        data,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: SyncRequest =
            serde_json::from_str(r#"{"url": "https://www.figma.com/design/abc"}"#).unwrap();
        assert_eq!(request.url.as_deref(), Some("https://www.figma.com/design/abc"));
        assert!(request.name.is_none());
        assert!(!request.bust_cache);
    }

    #[test]
    fn test_request_camel_case() {
        let request: SyncRequest =
            serde_json::from_str(r#"{"url": "u", "name": "Button", "bustCache": true}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Button"));
        assert!(request.bust_cache);
    }
}
