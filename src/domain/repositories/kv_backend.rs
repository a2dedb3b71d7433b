//! Low-level key-value capability set.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::error::BackendError;

/// Minimal key-value store interface.
///
/// Each call touches a single key or hash and is assumed atomic on its own;
/// no multi-key transactions are required.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisBackend`] - Redis
/// - [`crate::infrastructure::persistence::InMemoryBackend`] - process-local map
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KvBackend: Send + Sync {
    /// Reads a string key. `Ok(None)` means the key does not exist.
    async fn get_key(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Writes a string key, overwriting any previous value.
    async fn set_key(&self, key: &str, value: &str) -> Result<(), BackendError>;

    /// Returns every field of a hash. A missing hash reads as empty.
    async fn get_hash(&self, key: &str) -> Result<HashMap<String, String>, BackendError>;

    /// Adds 1 to a hash field, creating the hash and field as needed.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotAnInteger`] if the field holds a
    /// non-integer value.
    async fn increment_hash(&self, key: &str, field: &str) -> Result<(), BackendError>;

    /// Reports whether a hash exists.
    async fn hash_exists(&self, key: &str) -> Result<bool, BackendError>;

    /// Round-trips to the backend to check connectivity.
    async fn ping(&self) -> Result<(), BackendError>;
}
