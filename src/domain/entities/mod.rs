//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`NewLink`] - Validated input for creating a short link
//! - [`ShortLink`] - A short link as written by a create
//! - [`LinkRecord`] - Raw stored attributes of a code
//! - [`Expiry`] - Interpretation of the stored expiry attribute
//! - [`KeySpace`] / [`Attribute`] - Store key layout

pub mod key_space;
pub mod link;

pub use key_space::{Attribute, KeySpace};
pub use link::{Expiry, LinkRecord, NewLink, ShortLink};
