//! Application layer implementing business logic.
//!
//! Services coordinate validation, code generation and store calls, and
//! provide the API consumed by HTTP handlers and the admin CLI.
//!
//! - [`services::ShortenerService`] - Create, resolve and delete short links
//! - [`validation`] - Create-time input ruleset

pub mod services;
pub mod validation;
