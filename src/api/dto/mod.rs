//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for presence checks.

pub mod generate;
pub mod health;
pub mod response;
