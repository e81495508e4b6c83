//! Integration tests against a live Redis.
//!
//! Run with `REDIS_URL=redis://127.0.0.1:6379/15 cargo test -- --ignored`.
//! Every test uses its own key prefix and cleans up after itself.

use kv_shortener::domain::repositories::{RecordStore, StoreError};
use kv_shortener::infrastructure::store::RedisStore;

async fn connect() -> RedisStore {
    let url = std::env::var("REDIS_URL").expect("REDIS_URL must be set for Redis tests");
    RedisStore::connect(&url).await.unwrap()
}

fn prefix(test: &str) -> String {
    format!("kv-shortener-test:{}:{}:", test, std::process::id())
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_put_get_delete() {
    let store = connect().await;
    let p = prefix("put_get_delete");

    store
        .put(&format!("{p}abc:full"), "https://example.com", 0)
        .await
        .unwrap();

    assert_eq!(
        store.get(&format!("{p}abc:full")).await.unwrap().as_deref(),
        Some("https://example.com")
    );

    let removed = store.delete(&format!("{p}abc:*")).await.unwrap();
    assert_eq!(removed, 1);
    assert_eq!(store.get(&format!("{p}abc:full")).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_get_missing_key() {
    let store = connect().await;
    let p = prefix("missing");

    assert_eq!(store.get(&format!("{p}nope:full")).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_put_many_and_pattern_delete() {
    let store = connect().await;
    let p = prefix("put_many");

    let entries = vec![
        (format!("{p}abc:expire"), "1900000000".to_string()),
        (format!("{p}abc:full"), "https://example.com".to_string()),
        (format!("{p}abc:hits"), "10".to_string()),
        (format!("{p}abcd:full"), "https://example.org".to_string()),
    ];
    store.put_many(&entries, 0).await.unwrap();

    // "abc:*" must not reach "abcd:full"
    let removed = store.delete(&format!("{p}abc:*")).await.unwrap();
    assert_eq!(removed, 3);
    assert!(store.get(&format!("{p}abcd:full")).await.unwrap().is_some());

    store.delete(&format!("{p}*")).await.unwrap();
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_delete_nothing_matches() {
    let store = connect().await;
    let p = prefix("delete_nothing");

    assert_eq!(store.delete(&format!("{p}none:*")).await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_put_with_ttl_expires() {
    let store = connect().await;
    let p = prefix("ttl");

    store
        .put(&format!("{p}abc:full"), "https://example.com", 1)
        .await
        .unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(2100)).await;

    assert_eq!(store.get(&format!("{p}abc:full")).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_ping() {
    let store = connect().await;
    assert!(store.ping().await);
}

#[tokio::test]
async fn test_connect_refused() {
    // Port 1 is never a Redis server
    let result = RedisStore::connect("redis://127.0.0.1:1/0").await;

    assert!(matches!(result, Err(StoreError::Unavailable(_))));
}
