//! Component listing endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use figsync_core::ComponentCatalog;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::handlers::run_blocking;
use crate::state::AppState;

/// Query parameters for GET /api/figma/components.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ComponentsQuery {
    file_key: Option<String>,
}

/// Response for GET /api/figma/components.
#[derive(Serialize)]
pub(crate) struct ComponentsResponse {
    success: bool,
    data: ComponentCatalog,
}

/// Handle GET /api/figma/components?fileKey=.
pub(crate) async fn get_components(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ComponentsQuery>,
) -> Result<Json<ComponentsResponse>, ServerError> {
    let file_key = query
        .file_key
        .filter(|k| !k.is_empty())
        .ok_or(ServerError::BadRequest("fileKey parameter is required"))?;

    let catalog = run_blocking(&state, move |sync| sync.component_catalog(&file_key)).await??;
    Ok(Json(ComponentsResponse {
        success: true,
        data: catalog,
    }))
}
