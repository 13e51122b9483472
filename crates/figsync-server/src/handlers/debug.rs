//! Cache debugging endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use chrono::{SecondsFormat, Utc};
use figsync_core::{DebugOutcome, DebugReport};
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::handlers::run_blocking;
use crate::state::AppState;

/// Query parameters for GET /api/figma/debug.
#[derive(Debug, Deserialize)]
pub(crate) struct DebugQuery {
    url: Option<String>,
}

/// Response for GET /api/figma/debug.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DebugResponse {
    success: bool,
    figma_url: String,
    timestamp: String,
    results: DebugResults,
    comparison: Comparison,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DebugResults {
    normal: DebugOutcome,
    bust_cache: DebugOutcome,
}

/// Whether busting the cache changed anything.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Comparison {
    same_image_url: bool,
    both_from_cache: bool,
    message: &'static str,
}

impl Comparison {
    fn of(report: &DebugReport) -> Self {
        let same_image_url =
            report.normal.rendered_asset_url == report.bust_cache.rendered_asset_url;
        Self {
            same_image_url,
            both_from_cache: report.normal.served_from_cache && report.bust_cache.served_from_cache,
            message: if same_image_url {
                "Same image URL returned - either content unchanged or Figma API cached"
            } else {
                "Different image URLs - cache busting worked"
            },
        }
    }
}

impl From<DebugReport> for DebugResponse {
    fn from(report: DebugReport) -> Self {
        let comparison = Comparison::of(&report);
        Self {
            success: true,
            figma_url: report.source_url,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            results: DebugResults {
                normal: report.normal,
                bust_cache: report.bust_cache,
            },
            comparison,
        }
    }
}

/// Handle GET /api/figma/debug?url=.
pub(crate) async fn get_debug(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DebugQuery>,
) -> Result<Json<DebugResponse>, ServerError> {
    let url = query
        .url
        .filter(|u| !u.is_empty())
        .ok_or(ServerError::BadRequest("Figma URL is required"))?;

    tracing::debug!(url = %url, "Debugging Figma sync");
    let report = run_blocking(&state, move |sync| sync.debug(&url)).await??;
    Ok(Json(report.into()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn outcome(url: &str, cached: bool) -> DebugOutcome {
        DebugOutcome {
            rendered_asset_url: Some(url.to_owned()),
            served_from_cache: cached,
            node_id: Some("1:2".to_owned()),
        }
    }

    #[test]
    fn test_comparison_detects_change() {
        let report = DebugReport {
            source_url: "https://www.figma.com/design/abc".to_owned(),
            normal: outcome("https://img/old.png", true),
            bust_cache: outcome("https://img/new.png", false),
        };

        assert_eq!(
            Comparison::of(&report),
            Comparison {
                same_image_url: false,
                both_from_cache: false,
                message: "Different image URLs - cache busting worked",
            }
        );
    }

    #[test]
    fn test_response_shape() {
        let report = DebugReport {
            source_url: "https://www.figma.com/design/abc".to_owned(),
            normal: outcome("https://img/1.png", true),
            bust_cache: outcome("https://img/1.png", false),
        };

        let json = serde_json::to_value(DebugResponse::from(report)).unwrap();
        assert_eq!(json["figmaUrl"], "https://www.figma.com/design/abc");
        assert_eq!(json["results"]["normal"]["servedFromCache"], true);
        assert_eq!(json["results"]["bustCache"]["nodeId"], "1:2");
        assert_eq!(json["comparison"]["sameImageUrl"], true);
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }
}
