//! Cache key derivation.

use std::fmt;

/// Placeholder used in place of a missing node id.
const NO_NODE: &str = "none";

/// Filesystem-safe key derived from a `(file_id, node_id)` pair.
///
/// The raw form is `{file_id}_{node_id}` (or `{file_id}_none`); every
/// character outside `[A-Za-z0-9_-]` is replaced by `_`. The same pair always
/// yields the same key. Distinct pairs collide only when they differ solely in
/// replaced characters, e.g. `12:34` and `12_34`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a file and optional node.
    #[must_use]
    pub fn new(file_id: &str, node_id: Option<&str>) -> Self {
        let raw = format!("{file_id}_{}", node_id.unwrap_or(NO_NODE));
        Self(sanitize(&raw))
    }

    /// Key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
