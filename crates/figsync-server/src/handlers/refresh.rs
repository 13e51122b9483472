//! Page-level refresh endpoint.
//!
//! The CMS posts the whole page document after an edit; every distinct
//! `figmaUrl` in it is re-synced with cache busting.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use figsync_core::RefreshReport;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ServerError;
use crate::handlers::run_blocking;
use crate::state::AppState;

/// Request body for POST /api/figma/refresh-page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefreshRequest {
    page_data: Option<Value>,
}

/// Response for POST /api/figma/refresh-page.
#[derive(Serialize)]
pub(crate) struct RefreshResponse {
    success: bool,
    message: String,
    details: RefreshReport,
}

impl From<RefreshReport> for RefreshResponse {
    fn from(details: RefreshReport) -> Self {
        Self {
            success: true,
            message: details.message(),
            details,
        }
    }
}

/// Handle POST /api/figma/refresh-page.
pub(crate) async fn post_refresh_page(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ServerError> {
    let page = request
        .page_data
        .ok_or(ServerError::BadRequest("Page data is required"))?;

    let report = run_blocking(&state, move |sync| sync.refresh_page(&page)).await?;
    Ok(Json(report.into()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_null_page_data_is_missing() {
        let request: RefreshRequest = serde_json::from_str(r#"{"pageData": null}"#).unwrap();
        assert!(request.page_data.is_none());
    }

    #[test]
    fn test_response_serialization() {
        let response = RefreshResponse::from(RefreshReport {
            total: 0,
            successful: 0,
            failed: 0,
            assets: Vec::new(),
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": true,
                "message": "Refreshed 0 assets",
                "details": {"total": 0, "successful": 0, "failed": 0, "assets": []},
            })
        );
    }
}
