//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::store`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`RecordStore`] - Namespaced key-value access for short link attributes

pub mod record_store;

pub use record_store::{RecordStore, StoreError, StoreResult};

#[cfg(test)]
pub use record_store::MockRecordStore;
