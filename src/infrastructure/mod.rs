//! Infrastructure layer implementing external integrations.
//!
//! - [`store`] - Key-value backends implementing
//!   [`crate::domain::repositories::RecordStore`]

pub mod store;
