//! Figma asset synchronization.
//!
//! [`SyncOrchestrator`] turns a Figma URL into a [`SyncResult`]:
//!
//! ```text
//! sync(url, name, bust)
//!   ├─► SyncCache::get ── hit ──► SyncResult { served_from_cache: true }
//!   └─► miss
//!        ├─► RemoteClient::file_metadata   (identity: frame or component)
//!        ├─► RemoteClient::render_images   (per NodeIdEncoding candidate)
//!        └─► SyncCache::put ─────────────► SyncResult { served_from_cache: false }
//! ```
//!
//! Page-level refresh and the debug probe are built on the same call.

mod encoding;
mod error;
mod orchestrator;
mod refresh;
mod result;
#[cfg(test)]
mod testing;

pub use encoding::NodeIdEncoding;
pub use error::SyncError;
pub use orchestrator::{DEFAULT_SCALE, SyncOrchestrator};
pub use refresh::{
    DebugOutcome, DebugReport, RefreshReport, RefreshedAsset, collect_figma_urls,
};
pub use result::{ComponentCatalog, ResolvedKind, SyncProperties, SyncResult};
