//! # KV Shortener
//!
//! A URL shortening service built with Axum on top of a key-value store.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entities, key layout and the store contract
//! - **Application Layer** ([`application`]) - Create/resolve/delete logic and input rules
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Storage Layout
//!
//! Each short link is three keys sharing the code:
//!
//! ```text
//! <prefix><code>:full    destination URL
//! <prefix><code>:expire  Unix timestamp (seconds)
//! <prefix><code>:hits    requested hit budget
//! ```
//!
//! Codes are derived from the URL (SHA-256, base58), so shortening the same
//! URL twice yields the same code.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{KeySpace, LinkRecord, NewLink, ShortLink};
    pub use crate::domain::repositories::{RecordStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::MemoryStore;
    pub use crate::state::AppState;
}
