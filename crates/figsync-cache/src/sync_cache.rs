//! Time-expiring cache of rendered asset URLs.
//!
//! Each entry is stored as a small JSON record:
//!
//! ```json
//! {
//!   "value": "https://figma-alpha-api.s3.us-west-2.amazonaws.com/images/...",
//!   "timestamp": 1767225600000,
//!   "created": "2026-01-01T00:00:00.000Z"
//! }
//! ```
//!
//! Expiration is lazy: an entry's age is only checked when it is read, and a
//! stale entry is deleted at that point. There is no background sweep.

use std::sync::Arc;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::{KvStore, KvStoreExt};

/// Default entry lifetime (7 days).
pub const DEFAULT_EXPIRATION: Duration = Duration::from_secs(7 * 24 * 60 * 60);

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Persisted cache record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Cached value (a rendered asset URL).
    pub value: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Creation time in RFC 3339, for humans reading the cache directory.
    pub created: String,
}

impl CacheEntry {
    /// Create an entry stamped with the current time.
    #[must_use]
    pub fn now(value: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            value: value.into(),
            timestamp: now.timestamp_millis(),
            created: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Entry age in milliseconds relative to `now_millis`.
    fn age_millis(&self, now_millis: i64) -> i64 {
        now_millis.saturating_sub(self.timestamp)
    }
}

/// Read-only cache statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of entries, including unreadable ones.
    pub file_count: usize,
    /// Total stored bytes, including unreadable entries.
    pub total_bytes: u64,
    /// Key of the entry with the oldest timestamp, ignoring unreadable entries.
    pub oldest_entry_id: Option<String>,
}

/// Keyed, time-expiring store for one string value per key.
///
/// Backed by any [`KvStore`]. The cache is an optimization layer: every
/// failure is recovered locally and reported as a miss.
#[derive(Clone)]
pub struct SyncCache {
    store: Arc<dyn KvStore>,
    expiration: Duration,
}

impl SyncCache {
    /// Create a cache over `store` whose entries live for `expiration`.
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>, expiration: Duration) -> Self {
        Self { store, expiration }
    }

    /// Configured entry lifetime.
    #[must_use]
    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    /// Look up a value.
    ///
    /// With `bust_cache`, an existing entry is deleted and `None` is returned.
    /// Otherwise returns the stored value unless it is missing, unreadable, or
    /// at least `expiration` old (in which case it is deleted).
    pub fn get(&self, key: &str, bust_cache: bool) -> Option<String> {
        if bust_cache {
            if self.store.delete(key) {
                tracing::info!(key, "cache busted");
            }
            return None;
        }

        let bytes = self.store.get(key)?;
        let entry: CacheEntry = match serde_json::from_slice(&bytes) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(key, "unreadable cache entry: {e}");
                return None;
            }
        };

        let age = entry.age_millis(Utc::now().timestamp_millis());
        let age_days = age / MILLIS_PER_DAY;
        if age < self.expiration_millis() {
            tracing::debug!(key, age_days, "cache hit");
            Some(entry.value)
        } else {
            tracing::info!(key, age_days, "cache entry expired");
            self.store.delete(key);
            None
        }
    }

    /// Store `value` under `key` with the current timestamp.
    pub fn put(&self, key: &str, value: &str) {
        self.store.put_json(key, &CacheEntry::now(value));
        tracing::debug!(key, "cached value");
    }

    /// Delete every entry. Returns the number of entries removed.
    pub fn clear_all(&self) -> usize {
        let cleared = self
            .store
            .list()
            .iter()
            .filter(|key| self.store.delete(key))
            .count();
        tracing::info!(cleared, "cleared cache");
        cleared
    }

    /// Gather entry statistics without modifying the cache.
    pub fn stats(&self) -> CacheStats {
        let mut stats = CacheStats::default();
        let mut oldest: Option<i64> = None;

        for key in self.store.list() {
            let Some(bytes) = self.store.get(&key) else {
                // Vanished between list and read
                continue;
            };
            stats.file_count += 1;
            stats.total_bytes += bytes.len() as u64;

            let Ok(entry) = serde_json::from_slice::<CacheEntry>(&bytes) else {
                continue;
            };
            if oldest.is_none_or(|ts| entry.timestamp < ts) {
                oldest = Some(entry.timestamp);
                stats.oldest_entry_id = Some(key);
            }
        }

        stats
    }

    fn expiration_millis(&self) -> i64 {
        i64::try_from(self.expiration.as_millis()).unwrap_or(i64::MAX)
    }
}
