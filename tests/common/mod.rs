#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use kv_shortener::application::services::ShortenerService;
use kv_shortener::domain::entities::KeySpace;
use kv_shortener::domain::repositories::{RecordStore, StoreError, StoreResult};
use kv_shortener::infrastructure::store::MemoryStore;
use kv_shortener::routes::build_router;
use kv_shortener::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_PREFIX: &str = "test:";
pub const TEST_BASE_URL: &str = "http://sho.rt";

/// State over a fresh [`MemoryStore`], with a fixed public base URL.
pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = state_with_store(store.clone(), Some(TEST_BASE_URL.to_string()));
    (state, store)
}

pub fn state_with_store(store: Arc<dyn RecordStore>, base_url: Option<String>) -> AppState {
    let shortener = ShortenerService::new(store, KeySpace::new(TEST_PREFIX));
    AppState::new(Arc::new(shortener), base_url)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state, Duration::from_secs(5))).unwrap()
}

pub fn key(code: &str, attribute: &str) -> String {
    format!("{}{}:{}", TEST_PREFIX, code, attribute)
}

/// One day from now.
pub fn future_timestamp() -> i64 {
    Utc::now().timestamp() + 86_400
}

/// Writes the three attributes of a link directly, bypassing validation.
pub async fn seed_link(store: &MemoryStore, code: &str, url: &str, expire: &str) {
    store.put(&key(code, "full"), url, 0).await.unwrap();
    store.put(&key(code, "expire"), expire, 0).await.unwrap();
    store.put(&key(code, "hits"), "10", 0).await.unwrap();
}

/// Store whose every operation fails as if Redis were down.
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn put(&self, _key: &str, _value: &str, _ttl_seconds: u64) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn delete(&self, _pattern: &str) -> StoreResult<u64> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> bool {
        false
    }
}
