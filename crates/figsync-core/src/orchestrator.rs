//! Sync orchestration: cache lookup, identity resolution, rendering.

use std::sync::Arc;

use figsync_cache::{CacheKey, CacheStats, SyncCache};
use figsync_figma::{Component, FileMetadata, RemoteClient, extract_file_id, extract_node_id};
use tracing::{debug, info, warn};

use crate::encoding::NodeIdEncoding;
use crate::error::SyncError;
use crate::result::{ComponentCatalog, ResolvedKind, SyncProperties, SyncResult};

/// Render scale used unless overridden.
pub const DEFAULT_SCALE: f32 = 2.0;

/// Label used when the caller gives no name.
const DEFAULT_LABEL: &str = "Figma Asset";

/// Placeholder name the CMS fills in for new blocks; treated as "no name".
const PLACEHOLDER_NAME: &str = "Component";

/// Produces [`SyncResult`]s for Figma URLs, caching rendered image URLs.
pub struct SyncOrchestrator {
    client: Arc<dyn RemoteClient>,
    cache: SyncCache,
    scale: f32,
}

/// Resolved render target and display identity.
struct Target {
    display_name: String,
    description: String,
    node_id: String,
}

impl SyncOrchestrator {
    /// Create an orchestrator rendering at [`DEFAULT_SCALE`].
    #[must_use]
    pub fn new(client: Arc<dyn RemoteClient>, cache: SyncCache) -> Self {
        Self {
            client,
            cache,
            scale: DEFAULT_SCALE,
        }
    }

    /// Set the render scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Sync one Figma URL.
    ///
    /// Serves the image URL from cache when possible (unless `bust_cache`),
    /// otherwise resolves the node, renders it, and caches the result. A
    /// missing image is not an error: the result simply has no
    /// `rendered_asset_url`.
    ///
    /// # Errors
    ///
    /// - [`SyncError::InvalidUrl`] if the URL has no file id
    /// - [`SyncError::Remote`] if file metadata cannot be fetched
    /// - [`SyncError::NoComponentFound`] if the URL has no node id and the
    ///   file has no components
    pub fn sync(
        &self,
        url: &str,
        requested_name: Option<&str>,
        bust_cache: bool,
    ) -> Result<SyncResult, SyncError> {
        let file_id = extract_file_id(url).ok_or_else(|| SyncError::InvalidUrl(url.to_owned()))?;
        let node_id = extract_node_id(url);
        let cache_key = CacheKey::new(&file_id, node_id.as_deref());
        let requested_name = requested_name.filter(|n| !n.is_empty() && *n != PLACEHOLDER_NAME);
        let resolved_kind = if node_id.is_some() {
            ResolvedKind::Frame
        } else {
            ResolvedKind::Component
        };

        if let Some(cached) = self.cache.get(cache_key.as_str(), bust_cache) {
            return Ok(SyncResult {
                display_name: requested_name.unwrap_or(DEFAULT_LABEL).to_owned(),
                description: String::new(),
                source_url: url.to_owned(),
                rendered_asset_url: Some(cached),
                properties: SyncProperties {
                    node_id,
                    resolved_kind,
                    served_from_cache: true,
                },
            });
        }

        let file = self.client.file_metadata(&file_id)?;
        let target = match &node_id {
            Some(node_id) => {
                debug!(%node_id, "using URL node id as render target");
                frame_target(&file, node_id, requested_name)
            }
            None => {
                debug!("no node id in URL, falling back to component search");
                component_target(&file, &file_id, requested_name)?
            }
        };

        let image_url = self.render(&file_id, &target.node_id);
        match &image_url {
            Some(image_url) => self.cache.put(cache_key.as_str(), image_url),
            None => warn!(
                %file_id,
                node_id = %target.node_id,
                "no image URL for any node id encoding (node missing, private, or token lacks access)"
            ),
        }

        Ok(SyncResult {
            display_name: target.display_name,
            description: target.description,
            source_url: url.to_owned(),
            rendered_asset_url: image_url,
            properties: SyncProperties {
                node_id: Some(target.node_id),
                resolved_kind,
                served_from_cache: false,
            },
        })
    }

    /// List the components, component sets and design tokens of a file.
    ///
    /// Always hits the remote API; listings are not cached.
    pub fn component_catalog(&self, file_id: &str) -> Result<ComponentCatalog, SyncError> {
        let file = self.client.file_metadata(file_id)?;
        Ok(ComponentCatalog {
            components: file.component_metadata(),
            tokens: file.design_tokens(),
        })
    }

    /// Cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Remove every cache entry. Returns the number removed.
    pub fn clear_cache(&self) -> usize {
        self.cache.clear_all()
    }

    /// Request a render, trying each node id encoding until one yields a URL.
    fn render(&self, file_id: &str, node_id: &str) -> Option<String> {
        for candidate in NodeIdEncoding::candidates(node_id) {
            debug!(file_id, %candidate, "requesting render");
            match self
                .client
                .render_images(file_id, &[candidate.as_str()], self.scale)
            {
                Ok(images) => {
                    if let Some(url) = images.url_for(&candidate) {
                        info!(file_id, %candidate, "rendered image");
                        return Some(url.to_owned());
                    }
                    debug!(
                        %candidate,
                        available = ?images.images.keys().collect::<Vec<_>>(),
                        "no image for encoding"
                    );
                }
                Err(e) => warn!(%candidate, "render request failed: {e}"),
            }
        }
        None
    }
}

/// Identity for a URL that names a node directly.
fn frame_target(file: &FileMetadata, node_id: &str, requested_name: Option<&str>) -> Target {
    let (display_name, description) = match (requested_name, file.components.first()) {
        (Some(name), _) => (name.to_owned(), String::new()),
        (None, Some(first)) => (
            format!("{} - Design Example", first.name),
            format!(
                "Design example or showcase frame containing {} and related elements",
                first.name
            ),
        ),
        (None, None) => (
            "Design Example".to_owned(),
            "Design example or showcase frame from Figma".to_owned(),
        ),
    };

    Target {
        display_name,
        description,
        node_id: node_id.to_owned(),
    }
}

/// Identity for a URL without a node id: best-matching component.
fn component_target(
    file: &FileMetadata,
    file_id: &str,
    requested_name: Option<&str>,
) -> Result<Target, SyncError> {
    let component = requested_name
        .and_then(|name| find_by_name(&file.components, name))
        .or_else(|| file.components.first())
        .ok_or_else(|| SyncError::NoComponentFound {
            file_id: file_id.to_owned(),
        })?;
    debug!(component = %component.name, "resolved component");

    Ok(Target {
        display_name: component.name.clone(),
        description: component.description.clone(),
        node_id: component.id.clone(),
    })
}

/// First component whose name contains `name`, case-insensitively.
fn find_by_name<'a>(components: &'a [Component], name: &str) -> Option<&'a Component> {
    let needle = name.to_lowercase();
    components
        .iter()
        .find(|c| c.name.to_lowercase().contains(&needle))
}
