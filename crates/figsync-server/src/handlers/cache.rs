//! Cache statistics and clearing.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use figsync_cache::CacheStats;
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::run_blocking;
use crate::state::AppState;

/// Response for GET /api/figma/cache.
#[derive(Serialize)]
pub(crate) struct StatsResponse {
    success: bool,
    cache: CacheSummary,
}

/// Cache statistics for serialization.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct CacheSummary {
    files: usize,
    total_size_bytes: u64,
    #[serde(rename = "totalSizeKB")]
    total_size_kb: u64,
    oldest_file: Option<String>,
}

impl From<CacheStats> for CacheSummary {
    fn from(stats: CacheStats) -> Self {
        Self {
            files: stats.file_count,
            total_size_bytes: stats.total_bytes,
            total_size_kb: (stats.total_bytes + 512) / 1024,
            oldest_file: stats.oldest_entry_id,
        }
    }
}

/// Response for DELETE /api/figma/cache.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClearResponse {
    success: bool,
    deleted_count: usize,
    message: String,
}

/// Handle GET /api/figma/cache.
pub(crate) async fn get_cache_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatsResponse>, ServerError> {
    let stats = run_blocking(&state, figsync_core::SyncOrchestrator::cache_stats).await?;
    Ok(Json(StatsResponse {
        success: true,
        cache: stats.into(),
    }))
}

/// Handle DELETE /api/figma/cache.
pub(crate) async fn delete_cache(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClearResponse>, ServerError> {
    let deleted_count = run_blocking(&state, figsync_core::SyncOrchestrator::clear_cache).await?;
    tracing::info!(deleted_count, "Cache cleared");
    Ok(Json(ClearResponse {
        success: true,
        deleted_count,
        message: "Cache cleared successfully".to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_summary_rounds_kilobytes() {
        let summary = CacheSummary::from(CacheStats {
            file_count: 3,
            total_bytes: 1536,
            oldest_entry_id: Some("abc_1-2".to_owned()),
        });

        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "files": 3,
                "totalSizeBytes": 1536,
                "totalSizeKB": 2,
                "oldestFile": "abc_1-2",
            })
        );
    }

    #[test]
    fn test_summary_empty_cache() {
        let summary = CacheSummary::from(CacheStats::default());
        assert_eq!(summary.total_size_kb, 0);
        assert_eq!(summary.oldest_file, None);
    }
}
