//! Key-value backend implementations.
//!
//! - [`RedisBackend`] - production backend
//! - [`InMemoryBackend`] - process-local backend for tests and Redis-less runs

mod memory_backend;
mod redis_backend;

pub use memory_backend::InMemoryBackend;
pub use redis_backend::RedisBackend;
