//! HTTP middleware for request processing.
//!
//! Provides request timeouts and observability middleware.

pub mod timeout;
pub mod tracing;
