//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, service wiring, and Axum server lifecycle.

use crate::application::services::ShortenerService;
use crate::config::{Config, StoreBackend};
use crate::domain::entities::KeySpace;
use crate::domain::repositories::RecordStore;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the configured record store.
///
/// # Errors
///
/// Returns an error if Redis cannot be reached at startup.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match config.store_backend {
        StoreBackend::Redis => Arc::new(RedisStore::connect(&config.redis_url).await?),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; links are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    Ok(store)
}

/// Builds the shortener service from configuration and an open store.
pub fn build_service(config: &Config, store: Arc<dyn RecordStore>) -> ShortenerService {
    ShortenerService::new(store, KeySpace::new(config.key_prefix.clone()))
        .with_backend_ttl(config.backend_ttl)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Record store (Redis or in-memory)
/// - Shortener service
/// - Axum HTTP server, stopping on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;
    let shortener = Arc::new(build_service(&config, store));

    let state = AppState::new(shortener, config.public_base_url.clone());
    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
