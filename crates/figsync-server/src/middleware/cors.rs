//! CORS headers for the CMS editor.
//!
//! The editor runs on another origin and calls the API directly, including
//! preflighted JSON POSTs.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Methods the API answers to.
const ALLOWED_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];

/// Create layer allowing any origin with `Content-Type` request headers.
pub(crate) fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE])
}
