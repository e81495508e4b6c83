//! Per-request timeout middleware.

use axum::http::StatusCode;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Aborts requests running longer than `timeout` with `408 Request Timeout`.
///
/// Dropping the handler future also drops any in-flight store call, so a
/// hung backend cannot hold a request open.
pub fn layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
