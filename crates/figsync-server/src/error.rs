//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use figsync_core::SyncError;
use figsync_figma::FigmaError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Missing or malformed request parameter.
    #[error("{0}")]
    BadRequest(&'static str),

    /// Sync pipeline failure.
    #[error(transparent)]
    Sync(#[from] SyncError),

    /// The blocking task panicked or was cancelled.
    #[error("Sync task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Sync(SyncError::InvalidUrl(_)) => StatusCode::BAD_REQUEST,
            Self::Sync(SyncError::NoComponentFound { .. }) => StatusCode::NOT_FOUND,
            Self::Sync(SyncError::Remote(FigmaError::MissingToken)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Sync(SyncError::Remote(_)) => StatusCode::BAD_GATEWAY,
            Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Sync(SyncError::Remote(e)) => json!({
                "success": false,
                "error": self.to_string(),
                "kind": e.kind().as_str(),
            }),
            _ => json!({"success": false, "error": self.to_string()}),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        }

        (status, axum::Json(body)).into_response()
    }
}
