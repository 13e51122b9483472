//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let figma_routes = Router::new()
        .route("/api/figma/sync", post(handlers::sync::post_sync))
        .route(
            "/api/figma/cache",
            get(handlers::cache::get_cache_stats).delete(handlers::cache::delete_cache),
        )
        .route(
            "/api/figma/refresh-page",
            post(handlers::refresh::post_refresh_page),
        )
        .route("/api/figma/debug", get(handlers::debug::get_debug))
        .route(
            "/api/figma/components",
            get(handlers::components::get_components),
        );

    Router::new()
        .merge(figma_routes)
        .route("/api/health", get(handlers::health::get_health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors::cors_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use figsync_cache::{DEFAULT_EXPIRATION, MemoryStore, SyncCache};
    use figsync_core::SyncOrchestrator;
    use figsync_figma::{
        Component, FigmaError, FileMetadata, ImagesResponse, RemoteClient, Style, StyleType,
    };
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    /// Remote that knows one component and renders only `1-2`.
    struct StubClient {
        token: bool,
    }

    impl RemoteClient for StubClient {
        fn file_metadata(&self, _file_id: &str) -> Result<FileMetadata, FigmaError> {
            if !self.token {
                return Err(FigmaError::MissingToken);
            }
            Ok(FileMetadata {
                name: "Kit".to_owned(),
                components: vec![Component {
                    id: "4:7".to_owned(),
                    name: "Button".to_owned(),
                    description: "Primary action".to_owned(),
                    ..Component::default()
                }],
                component_sets: Vec::new(),
                styles: vec![Style {
                    id: "S:1".to_owned(),
                    name: "Brand Blue".to_owned(),
                    description: "#0d99ff".to_owned(),
                    style_type: StyleType::Fill,
                    ..Style::default()
                }],
            })
        }

        fn render_images(
            &self,
            _file_id: &str,
            node_ids: &[&str],
            _scale: f32,
        ) -> Result<ImagesResponse, FigmaError> {
            let images: HashMap<String, Option<String>> = node_ids
                .iter()
                .map(|id| {
                    let url = (*id == "1-2").then(|| "https://img/1-2.png".to_owned());
                    ((*id).to_owned(), url)
                })
                .collect();
            Ok(ImagesResponse { err: None, images })
        }
    }

    fn test_router(token: bool) -> Router {
        let cache = SyncCache::new(Arc::new(MemoryStore::new()), DEFAULT_EXPIRATION);
        let orchestrator = SyncOrchestrator::new(Arc::new(StubClient { token }), cache);
        create_router(Arc::new(AppState {
            orchestrator: Arc::new(orchestrator),
            version: "0.1.0-test".to_owned(),
        }))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(test_router(true), get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "version": "0.1.0-test"}));
    }

    #[tokio::test]
    async fn test_sync_frame_then_cached() {
        let router = test_router(true);
        let request = json!({"url": "https://www.figma.com/design/abc/Kit?node-id=1-2"});

        let (status, body) = send(router.clone(), post_json("/api/figma/sync", &request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["displayName"], "Button - Design Example");
        assert_eq!(body["data"]["renderedAssetUrl"], "https://img/1-2.png");
        assert_eq!(body["data"]["properties"]["servedFromCache"], false);

        let (_, body) = send(router, post_json("/api/figma/sync", &request)).await;
        assert_eq!(body["data"]["properties"]["servedFromCache"], true);
        assert_eq!(body["data"]["renderedAssetUrl"], "https://img/1-2.png");
    }

    #[tokio::test]
    async fn test_sync_component_by_name() {
        let request = json!({"url": "https://www.figma.com/file/abc/Kit", "name": "button"});
        let (status, body) = send(test_router(true), post_json("/api/figma/sync", &request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["displayName"], "Button");
        assert_eq!(body["data"]["properties"]["resolvedKind"], "component");
        assert_eq!(body["data"]["properties"]["nodeId"], "4:7");
    }

    #[tokio::test]
    async fn test_sync_requires_url() {
        let (status, body) =
            send(test_router(true), post_json("/api/figma/sync", &json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Figma URL is required");
    }

    #[tokio::test]
    async fn test_sync_invalid_url() {
        let request = json!({"url": "https://example.com/design"});
        let (status, body) = send(test_router(true), post_json("/api/figma/sync", &request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_sync_without_token() {
        let request = json!({"url": "https://www.figma.com/design/abc/Kit"});
        let (status, body) = send(test_router(false), post_json("/api/figma/sync", &request)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["kind"], "remote_error");
    }

    #[tokio::test]
    async fn test_cache_stats_and_clear() {
        let router = test_router(true);
        let request = json!({"url": "https://www.figma.com/design/abc/Kit?node-id=1-2"});
        send(router.clone(), post_json("/api/figma/sync", &request)).await;

        let (status, body) = send(router.clone(), get_request("/api/figma/cache")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cache"]["files"], 1);
        assert_eq!(body["cache"]["oldestFile"], "abc_1-2");

        let delete = Request::builder()
            .method("DELETE")
            .uri("/api/figma/cache")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router.clone(), delete).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deletedCount"], 1);

        let (_, body) = send(router, get_request("/api/figma/cache")).await;
        assert_eq!(body["cache"]["files"], 0);
    }

    #[tokio::test]
    async fn test_refresh_page() {
        let request = json!({
            "pageData": {
                "blocks": [
                    {"figmaUrl": "https://www.figma.com/design/abc/Kit?node-id=1-2"},
                    {"figmaUrl": "https://www.figma.com/design/abc/Kit?node-id=1-2"}
                ]
            }
        });
        let (status, body) = send(
            test_router(true),
            post_json("/api/figma/refresh-page", &request),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Refreshed 1 assets");
        assert_eq!(body["details"]["total"], 1);
    }

    #[tokio::test]
    async fn test_refresh_page_requires_page_data() {
        let (status, body) = send(
            test_router(true),
            post_json("/api/figma/refresh-page", &json!({"other": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Page data is required");
    }

    #[tokio::test]
    async fn test_debug_requires_url() {
        let (status, _) = send(test_router(true), get_request("/api/figma/debug")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_debug_compares_results() {
        let uri = "/api/figma/debug?url=https%3A%2F%2Fwww.figma.com%2Fdesign%2Fabc%2FKit%3Fnode-id%3D1-2";
        let (status, body) = send(test_router(true), get_request(uri)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"]["normal"]["servedFromCache"], false);
        assert_eq!(body["results"]["bustCache"]["servedFromCache"], false);
        assert_eq!(body["comparison"]["sameImageUrl"], true);
    }

    #[tokio::test]
    async fn test_components() {
        let (status, body) = send(
            test_router(true),
            get_request("/api/figma/components?fileKey=abc"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["components"][0]["id"], "4:7");
        assert_eq!(body["data"]["components"][0]["type"], "component");
        assert_eq!(body["data"]["tokens"]["colors"]["brand-blue"], "#0d99ff");
        assert_eq!(body["data"]["tokens"]["typography"], json!({}));
    }

    #[tokio::test]
    async fn test_components_requires_file_key() {
        let (status, body) = send(test_router(true), get_request("/api/figma/components")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "fileKey parameter is required");
    }

    #[tokio::test]
    async fn test_cors_headers() {
        let response = test_router(true)
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let response = test_router(true)
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/figma/refresh-page")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS)
        );
    }
}
