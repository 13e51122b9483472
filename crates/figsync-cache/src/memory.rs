//! In-memory store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::KvStore;

/// [`KvStore`] backed by an in-process map.
///
/// Contents are lost when the store is dropped. Lock poisoning is treated as
/// a miss, like any other store failure.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, value: &[u8]) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_owned(), value.to_vec());
        }
    }

    fn delete(&self, key: &str) -> bool {
        self.entries
            .write()
            .is_ok_and(|mut entries| entries.remove(key).is_some())
    }

    fn list(&self) -> Vec<String> {
        self.entries
            .read()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }
}
