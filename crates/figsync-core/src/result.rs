//! Sync result types.

use figsync_figma::{ComponentMetadata, DesignTokens};
use serde::Serialize;

/// How the render target was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedKind {
    /// The URL named a node (frame, group, or any other node).
    Frame,
    /// No node in the URL; a component was picked from the file.
    Component,
}

/// Outcome of a sync request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResult {
    /// Name to display for the asset.
    pub display_name: String,
    /// Description (empty when served from cache).
    pub description: String,
    /// The URL that was synced.
    pub source_url: String,
    /// Rendered image URL; `None` means "no preview".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_asset_url: Option<String>,
    /// Resolution details.
    pub properties: SyncProperties,
}

/// Resolution details of a [`SyncResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncProperties {
    /// Node that was (or would be) rendered.
    pub node_id: Option<String>,
    /// Frame or component resolution.
    pub resolved_kind: ResolvedKind,
    /// Whether the image URL came from the cache.
    pub served_from_cache: bool,
}

/// Components and design tokens of one Figma file.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentCatalog {
    /// Components followed by component sets.
    pub components: Vec<ComponentMetadata>,
    /// Tokens derived from shared styles.
    pub tokens: DesignTokens,
}
