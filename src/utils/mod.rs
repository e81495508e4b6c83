//! Utility functions for code generation and request handling.
//!
//! - [`code_generator`] - Deterministic short code derivation and validation
//! - [`request_host`] - Public base URL resolution from the `Host` header

pub mod code_generator;
pub mod request_host;
