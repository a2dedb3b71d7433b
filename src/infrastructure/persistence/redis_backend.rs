//! Redis implementation of [`KvBackend`].

use std::collections::HashMap;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::error::BackendError;
use crate::domain::repositories::KvBackend;

/// Redis-backed key-value store.
///
/// Uses `ConnectionManager`, which reconnects transparently; each call works
/// on a cheap clone of the manager.
#[derive(Clone)]
pub struct RedisBackend {
    conn: ConnectionManager,
}

impl RedisBackend {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, BackendError> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            BackendError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            BackendError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| BackendError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { conn: manager })
    }
}

fn operation_error(e: RedisError) -> BackendError {
    BackendError::Operation(e.to_string())
}

/// Classifies a failed `HINCRBY` by its server reply.
///
/// Redis answers `ERR hash value is not an integer` when the field holds
/// something other than an integer.
fn increment_error(key: &str, field: &str, message: &str) -> BackendError {
    if message.contains("not an integer") {
        BackendError::NotAnInteger {
            key: key.to_string(),
            field: field.to_string(),
        }
    } else {
        BackendError::Operation(message.to_string())
    }
}

#[async_trait]
impl KvBackend for RedisBackend {
    async fn get_key(&self, key: &str) -> Result<Option<String>, BackendError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(operation_error)
    }

    async fn set_key(&self, key: &str, value: &str) -> Result<(), BackendError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(operation_error)
    }

    async fn get_hash(&self, key: &str) -> Result<HashMap<String, String>, BackendError> {
        let mut conn = self.conn.clone();
        conn.hgetall::<_, HashMap<String, String>>(key)
            .await
            .map_err(operation_error)
    }

    async fn increment_hash(&self, key: &str, field: &str) -> Result<(), BackendError> {
        let mut conn = self.conn.clone();
        let value = conn
            .hincr::<_, _, _, i64>(key, field, 1)
            .await
            .map_err(|e| increment_error(key, field, &e.to_string()))?;

        debug!("HINCRBY {} {} -> {}", key, field, value);
        Ok(())
    }

    /// Redis drops a hash once its last field is removed, so a non-zero
    /// length is equivalent to existence.
    async fn hash_exists(&self, key: &str) -> Result<bool, BackendError> {
        let mut conn = self.conn.clone();
        let len = conn
            .hlen::<_, usize>(key)
            .await
            .map_err(operation_error)?;
        Ok(len > 0)
    }

    async fn ping(&self) -> Result<(), BackendError> {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.map_err(operation_error)
    }
}
