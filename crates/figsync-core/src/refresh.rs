//! Bulk refresh of every Figma asset on a page, and the debug probe.

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::SyncError;
use crate::orchestrator::SyncOrchestrator;

/// Field name under which page blocks store their Figma link.
const FIGMA_URL_FIELD: &str = "figmaUrl";

/// Host that marks a string as a Figma link.
const FIGMA_HOST: &str = "figma.com";

/// Name passed to sync for refreshed assets.
const REFRESH_NAME: &str = "Asset";

/// Name passed to sync by the debug probe.
const DEBUG_NAME: &str = "Debug Test";

/// Outcome of refreshing one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshedAsset {
    /// Figma URL.
    pub url: String,
    /// Whether the re-sync succeeded.
    pub success: bool,
    /// Failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of [`SyncOrchestrator::refresh_page`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    /// Number of distinct URLs found.
    pub total: usize,
    /// Number refreshed successfully.
    pub successful: usize,
    /// Number that failed.
    pub failed: usize,
    /// Per-URL outcomes, in page order.
    pub assets: Vec<RefreshedAsset>,
}

impl RefreshReport {
    /// Human-readable summary, e.g. `Refreshed 3 assets, 1 failed`.
    #[must_use]
    pub fn message(&self) -> String {
        if self.failed > 0 {
            format!("Refreshed {} assets, {} failed", self.successful, self.failed)
        } else {
            format!("Refreshed {} assets", self.successful)
        }
    }
}

/// Cache-relevant view of one sync call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugOutcome {
    /// Rendered image URL, if any.
    pub rendered_asset_url: Option<String>,
    /// Whether it came from the cache.
    pub served_from_cache: bool,
    /// Node that was rendered.
    pub node_id: Option<String>,
}

/// Outcome of [`SyncOrchestrator::debug`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugReport {
    /// Probed URL.
    pub source_url: String,
    /// Plain sync (may be served from cache).
    pub normal: DebugOutcome,
    /// Sync with cache busting.
    pub bust_cache: DebugOutcome,
}

impl SyncOrchestrator {
    /// Re-sync every Figma asset referenced by a page document.
    ///
    /// Collects each distinct `figmaUrl` string (at any depth) and syncs it
    /// with cache busting. Failures are recorded per URL and never abort the
    /// batch.
    pub fn refresh_page(&self, page: &Value) -> RefreshReport {
        let urls = collect_figma_urls(page);
        info!(count = urls.len(), "refreshing Figma assets");

        let assets: Vec<RefreshedAsset> = urls
            .into_iter()
            .map(|url| match self.sync(&url, Some(REFRESH_NAME), true) {
                Ok(_) => RefreshedAsset {
                    url,
                    success: true,
                    error: None,
                },
                Err(e) => {
                    warn!(url = %url, "failed to refresh: {e}");
                    RefreshedAsset {
                        url,
                        success: false,
                        error: Some(e.to_string()),
                    }
                }
            })
            .collect();

        let successful = assets.iter().filter(|a| a.success).count();
        RefreshReport {
            total: assets.len(),
            successful,
            failed: assets.len() - successful,
            assets,
        }
    }

    /// Sync `url` normally, then again with cache busting, and report both.
    ///
    /// # Errors
    ///
    /// Returns the first [`SyncError`] encountered.
    pub fn debug(&self, url: &str) -> Result<DebugReport, SyncError> {
        let normal = self.sync(url, Some(DEBUG_NAME), false)?;
        let busted = self.sync(url, Some(DEBUG_NAME), true)?;

        let outcome = |result: crate::SyncResult| DebugOutcome {
            rendered_asset_url: result.rendered_asset_url,
            served_from_cache: result.properties.served_from_cache,
            node_id: result.properties.node_id,
        };
        Ok(DebugReport {
            source_url: url.to_owned(),
            normal: outcome(normal),
            bust_cache: outcome(busted),
        })
    }
}

/// Distinct Figma URLs stored under `figmaUrl` keys, in first-seen order.
pub fn collect_figma_urls(page: &Value) -> Vec<String> {
    let mut urls = Vec::new();
    collect_into(page, &mut urls);
    urls
}

fn collect_into(value: &Value, urls: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_into(item, urls);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                match child {
                    Value::String(url) if key == FIGMA_URL_FIELD && url.contains(FIGMA_HOST) => {
                        if !urls.contains(url) {
                            urls.push(url.clone());
                        }
                    }
                    _ => collect_into(child, urls),
                }
            }
        }
        _ => {}
    }
}
