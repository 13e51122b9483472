//! Extension trait for [`KvStore`] with typed JSON access.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::KvStore;

/// Typed convenience methods for [`KvStore`].
///
/// [`KvStore`] stays object-safe and byte-oriented; the blanket impl gives
/// every store (including `dyn KvStore`) JSON helpers.
pub trait KvStoreExt: KvStore {
    /// Retrieve a JSON-deserialized value.
    ///
    /// Returns `None` on miss or deserialization failure.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = self.get(key)?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Store a value as pretty-printed JSON.
    ///
    /// Silently does nothing if serialization fails.
    fn put_json<T: Serialize>(&self, key: &str, value: &T) {
        if let Ok(bytes) = serde_json::to_vec_pretty(value) {
            self.put(key, &bytes);
        }
    }
}

impl<S: KvStore + ?Sized> KvStoreExt for S {}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::MemoryStore;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        value: String,
    }

    #[test]
    fn test_json_helpers_through_dyn_store() {
        let store: Box<dyn KvStore> = Box::new(MemoryStore::new());
        store.put_json(
            "k",
            &Record {
                value: "v".to_owned(),
            },
        );

        let back: Option<Record> = store.get_json("k");
        assert_eq!(
            back,
            Some(Record {
                value: "v".to_owned()
            })
        );
    }

    #[test]
    fn test_get_json_invalid_bytes_is_none() {
        let store = MemoryStore::new();
        store.put("k", b"not json");

        let back: Option<Record> = store.get_json("k");
        assert_eq!(back, None);
    }
}
