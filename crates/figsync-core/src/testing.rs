//! Test doubles shared by the unit tests of this crate.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use figsync_cache::{DEFAULT_EXPIRATION, KvStore, MemoryStore, SyncCache};
use figsync_figma::{
    Component, FigmaError, FileMetadata, ImagesResponse, RemoteClient, Style, StyleType,
};

use crate::SyncOrchestrator;

/// In-memory [`RemoteClient`] that renders only the ids it was given.
#[derive(Default)]
pub(crate) struct FakeClient {
    components: Vec<Component>,
    styles: Vec<Style>,
    images: Mutex<HashMap<String, String>>,
    failing: HashSet<String>,
    offline: AtomicBool,
    metadata_calls: AtomicUsize,
    render_requests: Mutex<Vec<String>>,
    last_scale: Mutex<Option<f32>>,
}

impl FakeClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_component(mut self, id: &str, name: &str, description: &str) -> Self {
        self.components.push(Component {
            id: id.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            ..Component::default()
        });
        self
    }

    pub(crate) fn with_style(
        mut self,
        name: &str,
        description: &str,
        style_type: StyleType,
    ) -> Self {
        self.styles.push(Style {
            id: format!("S:{}", self.styles.len() + 1),
            name: name.to_owned(),
            description: description.to_owned(),
            style_type,
            ..Style::default()
        });
        self
    }

    pub(crate) fn with_image(self, node_id: &str, url: &str) -> Self {
        self.set_image(node_id, url);
        self
    }

    /// Render requests for `node_id` fail with a server error.
    pub(crate) fn failing_render(mut self, node_id: &str) -> Self {
        self.failing.insert(node_id.to_owned());
        self
    }

    pub(crate) fn set_image(&self, node_id: &str, url: &str) {
        self.images
            .lock()
            .unwrap()
            .insert(node_id.to_owned(), url.to_owned());
    }

    /// Make every call fail as if the API were unreachable.
    pub(crate) fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub(crate) fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn render_requests(&self) -> Vec<String> {
        self.render_requests.lock().unwrap().clone()
    }

    pub(crate) fn last_scale(&self) -> Option<f32> {
        *self.last_scale.lock().unwrap()
    }

    fn outage() -> FigmaError {
        FigmaError::Api {
            status: 503,
            body: "service unavailable".to_owned(),
        }
    }
}

impl RemoteClient for FakeClient {
    fn file_metadata(&self, _file_id: &str) -> Result<FileMetadata, FigmaError> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(Self::outage());
        }
        Ok(FileMetadata {
            name: "Kit".to_owned(),
            components: self.components.clone(),
            component_sets: Vec::new(),
            styles: self.styles.clone(),
        })
    }

    fn render_images(
        &self,
        _file_id: &str,
        node_ids: &[&str],
        scale: f32,
    ) -> Result<ImagesResponse, FigmaError> {
        *self.last_scale.lock().unwrap() = Some(scale);
        self.render_requests
            .lock()
            .unwrap()
            .extend(node_ids.iter().map(|id| (*id).to_owned()));

        let failing = node_ids.iter().any(|id| self.failing.contains(*id));
        if self.offline.load(Ordering::SeqCst) || failing {
            return Err(Self::outage());
        }

        let known = self.images.lock().unwrap();
        let images = node_ids
            .iter()
            .map(|id| ((*id).to_owned(), known.get(*id).cloned()))
            .collect();
        Ok(ImagesResponse { err: None, images })
    }
}

/// Orchestrator over `client` with an in-memory cache; the store is returned
/// for direct inspection.
pub(crate) fn orchestrator(
    client: impl Into<Arc<FakeClient>>,
) -> (Arc<MemoryStore>, SyncOrchestrator) {
    let store = Arc::new(MemoryStore::new());
    let cache = SyncCache::new(Arc::clone(&store) as Arc<dyn KvStore>, DEFAULT_EXPIRATION);
    let client: Arc<FakeClient> = client.into();
    (store, SyncOrchestrator::new(client, cache))
}
