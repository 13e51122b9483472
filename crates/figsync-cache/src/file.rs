//! File-based store.
//!
//! [`FileStore`] keeps one file per key in a single directory:
//!
//! ```text
//! {root}/
//! +-- abc123_12-34.json
//! +-- abc123_none.json
//! ```
//!
//! Only `*.json` files count as entries, so unrelated files dropped into the
//! directory are neither listed nor cleared. The directory is created lazily
//! on first write. Failures are logged and reported as a miss or a no-op.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::KvStore;

/// Extension of entry files.
const ENTRY_EXTENSION: &str = "json";

/// [`KvStore`] rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. Nothing is touched on disk yet.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Cache directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the entry file for `key`, or `None` if the key cannot be a
    /// plain file name.
    fn entry_path(&self, key: &str) -> Option<PathBuf> {
        if key.is_empty() || key.starts_with('.') || key.contains(['/', '\\']) {
            tracing::warn!(key, "rejecting cache key that is not a plain file name");
            return None;
        }
        Some(self.root.join(format!("{key}.{ENTRY_EXTENSION}")))
    }

    fn ensure_root(&self) -> bool {
        match fs::create_dir_all(&self.root) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(dir = %self.root.display(), "failed to create cache directory: {e}");
                false
            }
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.entry_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, "cache read error: {e}");
                None
            }
        }
    }

    fn put(&self, key: &str, value: &[u8]) {
        let Some(path) = self.entry_path(key) else {
            return;
        };
        if !self.ensure_root() {
            return;
        }
        if let Err(e) = fs::write(&path, value) {
            tracing::warn!(key, "cache write error: {e}");
        }
    }

    fn delete(&self, key: &str) -> bool {
        let Some(path) = self.entry_path(key) else {
            return false;
        };
        match fs::remove_file(&path) {
            Ok(()) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                tracing::warn!(key, "cache delete error: {e}");
                false
            }
        }
    }

    fn list(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(dir = %self.root.display(), "failed to list cache directory: {e}");
                return Vec::new();
            }
        };

        let mut keys: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some(ENTRY_EXTENSION) {
                    return None;
                }
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .map(ToOwned::to_owned)
            })
            .collect();
        keys.sort();
        keys
    }
}
