//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Short link data structures and the store key layout
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; business rules live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
