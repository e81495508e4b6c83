//! In-process record store for tests and local development.

use crate::domain::repositories::{RecordStore, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| now < at)
    }
}

/// A [`RecordStore`] backed by a `HashMap`.
///
/// TTLs are honoured lazily: expired entries are invisible to reads and are
/// dropped on the next write or delete touching the map.
///
/// # Use Cases
///
/// - HTTP handler tests without a Redis server
/// - `STORE_BACKEND=memory` local runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using MemoryStore (data is not persisted)");
        Self::default()
    }

    /// Number of live keys.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|e| e.is_live(now))
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Matches a trailing-`*` prefix pattern, or the exact key otherwise.
fn matches_pattern(key: &str, pattern: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => key.starts_with(prefix),
        None => key == pattern,
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> StoreResult<()> {
        self.put_many(&[(key.to_string(), value.to_string())], ttl_seconds)
            .await
    }

    /// Inserts all entries under one write lock.
    async fn put_many(&self, entries: &[(String, String)], ttl_seconds: u64) -> StoreResult<()> {
        let now = Instant::now();
        let expires_at = (ttl_seconds > 0).then(|| now + Duration::from_secs(ttl_seconds));

        let mut map = self.entries.write().await;
        map.retain(|_, e| e.is_live(now));

        for (key, value) in entries {
            map.insert(
                key.clone(),
                Entry {
                    value: value.clone(),
                    expires_at,
                },
            );
        }

        Ok(())
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let now = Instant::now();
        let map = self.entries.read().await;

        Ok(map
            .get(key)
            .filter(|e| e.is_live(now))
            .map(|e| e.value.clone()))
    }

    async fn delete(&self, pattern: &str) -> StoreResult<u64> {
        let now = Instant::now();
        let mut map = self.entries.write().await;
        map.retain(|_, e| e.is_live(now));

        let before = map.len();
        map.retain(|key, _| !matches_pattern(key, pattern));

        Ok((before - map.len()) as u64)
    }

    async fn ping(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_pattern() {
        assert!(matches_pattern("p:abc:full", "p:abc:*"));
        assert!(!matches_pattern("p:abcd:full", "p:abc:*"));
        assert!(matches_pattern("exact", "exact"));
        assert!(!matches_pattern("exact2", "exact"));
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let store = MemoryStore::new();

        store.put("k", "v", 0).await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemoryStore::new();

        store.put("k", "one", 0).await.unwrap();
        store.put("k", "two", 0).await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some("two".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_put_many_writes_all() {
        let store = MemoryStore::new();
        let entries = vec![
            ("p:a:full".to_string(), "https://example.com".to_string()),
            ("p:a:expire".to_string(), "123".to_string()),
            ("p:a:hits".to_string(), "10".to_string()),
        ];

        store.put_many(&entries, 0).await.unwrap();

        assert_eq!(store.len().await, 3);
        assert_eq!(store.get("p:a:hits").await.unwrap(), Some("10".to_string()));
    }

    #[tokio::test]
    async fn test_delete_pattern_scoped_to_prefix() {
        let store = MemoryStore::new();
        store.put("p:abc:full", "a", 0).await.unwrap();
        store.put("p:abc:expire", "1", 0).await.unwrap();
        store.put("p:abcd:full", "b", 0).await.unwrap();

        let removed = store.delete("p:abc:*").await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(store.get("p:abc:full").await.unwrap(), None);
        assert_eq!(store.get("p:abcd:full").await.unwrap(), Some("b".to_string()));
    }

    #[tokio::test]
    async fn test_delete_nothing_is_ok() {
        let store = MemoryStore::new();

        assert_eq!(store.delete("p:none:*").await.unwrap(), 0);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_ttl_hides_expired_entries() {
        let store = MemoryStore::new();
        store.put("k", "v", 1).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));

        tokio::time::sleep(Duration::from_millis(1100)).await;

        assert_eq!(store.get("k").await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_ping() {
        assert!(MemoryStore::new().ping().await);
    }
}
