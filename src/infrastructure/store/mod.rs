//! Record store backends.
//!
//! - [`RedisStore`] - Production Redis backend
//! - [`MemoryStore`] - In-process map for tests and local runs

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
