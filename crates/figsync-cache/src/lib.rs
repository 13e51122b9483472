//! Cache layer for synced Figma assets.
//!
//! The crate separates *where* bytes live from *what* the cache means:
//!
//! - [`KvStore`]: Key-value storage seam (`get`/`put`/`delete`/`list`)
//! - [`SyncCache`]: Time-expiring store of rendered asset URLs on top of a [`KvStore`]
//!
//! # Implementations
//!
//! - [`FileStore`]: One JSON file per key in a cache directory
//! - [`MemoryStore`]: In-process map, useful for tests and embedding
//! - [`NullStore`]: No-op store (always misses), used when caching is disabled
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use figsync_cache::{MemoryStore, SyncCache};
//!
//! let cache = SyncCache::new(Arc::new(MemoryStore::new()), Duration::from_secs(60));
//! cache.put("abc123_1-2", "https://cdn.example/img.png");
//! assert_eq!(
//!     cache.get("abc123_1-2", false).as_deref(),
//!     Some("https://cdn.example/img.png")
//! );
//! ```

mod ext;
mod file;
mod key;
mod memory;
mod sync_cache;

pub use ext::KvStoreExt;
pub use file::FileStore;
pub use key::CacheKey;
pub use memory::MemoryStore;
pub use sync_cache::{CacheEntry, CacheStats, DEFAULT_EXPIRATION, SyncCache};

/// Raw key-value storage used by [`SyncCache`].
///
/// Stores are best-effort: implementations swallow I/O failures (logging them)
/// and report a miss or a no-op instead. A store must never make its caller
/// fail.
pub trait KvStore: Send + Sync {
    /// Read the bytes stored under `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &[u8]);

    /// Remove the entry for `key`.
    ///
    /// Returns `true` if an entry existed and was removed.
    fn delete(&self, key: &str) -> bool;

    /// List every key currently held by the store.
    fn list(&self) -> Vec<String>;
}

/// No-op [`KvStore`] that never stores or retrieves data.
///
/// Use when caching is disabled. Every `get` returns `None` and every `put`
/// is discarded.
pub struct NullStore;

impl KvStore for NullStore {
    fn get(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }

    fn put(&self, _key: &str, _value: &[u8]) {}

    fn delete(&self, _key: &str) -> bool {
        false
    }

    fn list(&self) -> Vec<String> {
        Vec::new()
    }
}
