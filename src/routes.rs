//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /health`   - Health check: store PING
//! - `POST   /generate` - Create a short link
//! - `GET    /{code}`   - Short link redirect
//! - `DELETE /{code}`   - Delete a short link
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline (`REQUEST_TIMEOUT_SECONDS`)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path normalization.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::link_routes())
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, request_timeout))
}
