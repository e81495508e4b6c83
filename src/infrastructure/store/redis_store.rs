//! Redis-backed record store.

use crate::domain::repositories::{RecordStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use tracing::{debug, info};

/// Keys fetched per `SCAN` round trip when expanding a delete pattern.
const SCAN_BATCH: usize = 100;

/// Redis implementation of [`RecordStore`].
///
/// Uses `ConnectionManager` for connection reuse and reconnects. The manager
/// is cloned per call; clones share one multiplexed connection.
#[derive(Clone)]
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the connection
    /// cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Unavailable(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }

    /// Collects every key matching `pattern` with a cursor-driven `SCAN`.
    async fn scan_keys(&self, pattern: &str) -> StoreResult<Vec<String>> {
        let mut conn = self.client.clone();
        let mut cursor: u64 = 0;
        let mut keys = Vec::new();

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await
                .map_err(|e| classify(e, StoreError::Delete))?;

            keys.extend(batch);

            if next == 0 {
                break;
            }
            cursor = next;
        }

        // SCAN may return a key more than once
        keys.sort_unstable();
        keys.dedup();

        Ok(keys)
    }
}

/// Maps connection-level failures to [`StoreError::Unavailable`] and
/// everything else to the operation-specific variant.
fn classify(e: RedisError, op: fn(String) -> StoreError) -> StoreError {
    if e.is_io_error() || e.is_connection_refusal() || e.is_connection_dropped() || e.is_timeout()
    {
        StoreError::Unavailable(e.to_string())
    } else {
        op(e.to_string())
    }
}

#[async_trait]
impl RecordStore for RedisStore {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> StoreResult<()> {
        let mut conn = self.client.clone();

        let result = if ttl_seconds > 0 {
            conn.set_ex::<_, _, ()>(key, value, ttl_seconds).await
        } else {
            conn.set::<_, _, ()>(key, value).await
        };

        result.map_err(|e| classify(e, StoreError::Write))?;
        debug!("SET {} (TTL: {}s)", key, ttl_seconds);
        Ok(())
    }

    /// Writes all entries inside one `MULTI/EXEC` transaction.
    async fn put_many(&self, entries: &[(String, String)], ttl_seconds: u64) -> StoreResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut pipe = redis::pipe();
        pipe.atomic();

        for (key, value) in entries {
            if ttl_seconds > 0 {
                pipe.set_ex(key, value, ttl_seconds).ignore();
            } else {
                pipe.set(key, value).ignore();
            }
        }

        let mut conn = self.client.clone();
        pipe.query_async::<()>(&mut conn)
            .await
            .map_err(|e| classify(e, StoreError::Write))?;

        debug!("MULTI SET {} keys (TTL: {}s)", entries.len(), ttl_seconds);
        Ok(())
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();

        let value = conn
            .get::<_, Option<String>>(key)
            .await
            .map_err(|e| classify(e, StoreError::Read))?;

        debug!("GET {} -> {}", key, if value.is_some() { "hit" } else { "miss" });
        Ok(value)
    }

    async fn delete(&self, pattern: &str) -> StoreResult<u64> {
        let keys = self.scan_keys(pattern).await?;

        if keys.is_empty() {
            debug!("DEL {} matched nothing", pattern);
            return Ok(0);
        }

        let mut conn = self.client.clone();
        let removed = conn
            .del::<_, u64>(&keys)
            .await
            .map_err(|e| classify(e, StoreError::Delete))?;

        debug!("DEL {} removed {} keys", pattern, removed);
        Ok(removed)
    }

    async fn ping(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
