//! Key-value store contract for short link attributes.

use async_trait::async_trait;

/// Errors surfaced by a [`RecordStore`] backend. Never retried internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store write failed: {0}")]
    Write(String),

    #[error("store read failed: {0}")]
    Read(String),

    #[error("store delete failed: {0}")]
    Delete(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository interface over the external key-value backend.
///
/// Keys are fully namespaced by the caller; the store does no key building.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis via `ConnectionManager`
/// - [`crate::infrastructure::store::MemoryStore`] - In-process map for tests and local runs
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Writes `value` under `key`.
    ///
    /// `ttl_seconds == 0` means the backend does not expire the key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] or [`StoreError::Write`].
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> StoreResult<()>;

    /// Writes several entries with the same TTL.
    ///
    /// The default writes one entry at a time and stops at the first failure;
    /// entries written before the failure stay in place.
    async fn put_many(&self, entries: &[(String, String)], ttl_seconds: u64) -> StoreResult<()> {
        for (key, value) in entries {
            self.put(key, value, ttl_seconds).await?;
        }
        Ok(())
    }

    /// Reads the value under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if present
    /// - `Ok(None)` if the key does not exist
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] or [`StoreError::Read`].
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Removes every key matching `pattern` in one delete.
    ///
    /// Patterns are a literal prefix followed by a single trailing `*`.
    /// Returns the number of keys removed; zero is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] or [`StoreError::Delete`].
    async fn delete(&self, pattern: &str) -> StoreResult<u64>;

    /// Checks if the backend is reachable.
    async fn ping(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Store that records writes and fails on a chosen key.
    struct FlakyStore {
        fail_on: &'static str,
        written: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RecordStore for FlakyStore {
        async fn put(&self, key: &str, _value: &str, _ttl_seconds: u64) -> StoreResult<()> {
            if key == self.fail_on {
                return Err(StoreError::Write(format!("cannot write {}", key)));
            }
            self.written.lock().unwrap().push(key.to_string());
            Ok(())
        }

        async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }

        async fn delete(&self, _pattern: &str) -> StoreResult<u64> {
            Ok(0)
        }

        async fn ping(&self) -> bool {
            true
        }
    }

    fn entries() -> Vec<(String, String)> {
        ["a", "b", "c"]
            .iter()
            .map(|k| (k.to_string(), "v".to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_default_put_many_writes_in_order() {
        let store = FlakyStore {
            fail_on: "none",
            written: Mutex::new(Vec::new()),
        };

        store.put_many(&entries(), 0).await.unwrap();

        assert_eq!(*store.written.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_default_put_many_stops_at_first_failure() {
        let store = FlakyStore {
            fail_on: "b",
            written: Mutex::new(Vec::new()),
        };

        let result = store.put_many(&entries(), 0).await;

        assert!(matches!(result, Err(StoreError::Write(_))));
        // "a" stays written, "c" is never attempted
        assert_eq!(*store.written.lock().unwrap(), vec!["a"]);
    }
}
