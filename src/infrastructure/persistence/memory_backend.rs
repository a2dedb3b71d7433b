//! Process-local implementation of [`KvBackend`].

use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::error::BackendError;
use crate::domain::hit_aggregator::increment_field;
use crate::domain::repositories::KvBackend;

/// In-memory key-value store backed by `DashMap`.
///
/// Serves as the test double for [`crate::infrastructure::persistence::RedisBackend`]
/// and as the fallback backend when no Redis is configured. Data does not
/// survive a restart.
///
/// Unlike Redis, a hash seeded with no fields still exists.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    keys: DashMap<String, String>,
    hashes: DashMap<String, HashMap<String, String>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a string key.
    pub fn insert_key(&self, key: &str, value: &str) {
        self.keys.insert(key.to_string(), value.to_string());
    }

    /// Seeds a hash, replacing any existing one.
    pub fn insert_hash(&self, key: &str, fields: &[(&str, &str)]) {
        let fields = fields
            .iter()
            .map(|(f, v)| (f.to_string(), v.to_string()))
            .collect();
        self.hashes.insert(key.to_string(), fields);
    }

    /// Current value of a string key.
    pub fn key(&self, key: &str) -> Option<String> {
        self.keys.get(key).map(|v| v.clone())
    }

    /// Snapshot of a hash.
    pub fn hash(&self, key: &str) -> Option<HashMap<String, String>> {
        self.hashes.get(key).map(|h| h.clone())
    }
}

#[async_trait]
impl KvBackend for InMemoryBackend {
    async fn get_key(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.key(key))
    }

    async fn set_key(&self, key: &str, value: &str) -> Result<(), BackendError> {
        self.insert_key(key, value);
        Ok(())
    }

    async fn get_hash(&self, key: &str) -> Result<HashMap<String, String>, BackendError> {
        Ok(self.hash(key).unwrap_or_default())
    }

    async fn increment_hash(&self, key: &str, field: &str) -> Result<(), BackendError> {
        let mut entry = self.hashes.entry(key.to_string()).or_default();

        increment_field(entry.value_mut(), field).map_err(|_| BackendError::NotAnInteger {
            key: key.to_string(),
            field: field.to_string(),
        })?;

        Ok(())
    }

    async fn hash_exists(&self, key: &str) -> Result<bool, BackendError> {
        Ok(self.hashes.contains_key(key))
    }

    async fn ping(&self) -> Result<(), BackendError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_key_missing_is_none() {
        let backend = InMemoryBackend::new();
        assert_eq!(backend.get_key("url:nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_key_overwrites() {
        let backend = InMemoryBackend::new();
        backend.set_key("url:a", "first").await.unwrap();
        backend.set_key("url:a", "second").await.unwrap();

        assert_eq!(backend.get_key("url:a").await.unwrap(), Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_increment_hash_creates_hash_and_field() {
        let backend = InMemoryBackend::new();
        assert!(!backend.hash_exists("hits:a").await.unwrap());

        backend.increment_hash("hits:a", "Total").await.unwrap();
        backend.increment_hash("hits:a", "Total").await.unwrap();
        backend.increment_hash("hits:a", "12").await.unwrap();

        assert!(backend.hash_exists("hits:a").await.unwrap());
        let hash = backend.get_hash("hits:a").await.unwrap();
        assert_eq!(hash["Total"], "2");
        assert_eq!(hash["12"], "1");
    }

    #[tokio::test]
    async fn test_increment_hash_rejects_non_integer() {
        let backend = InMemoryBackend::new();
        backend.insert_hash("hits:a", &[("Total", "abc")]);

        let err = backend.increment_hash("hits:a", "Total").await.unwrap_err();
        assert!(matches!(err, BackendError::NotAnInteger { .. }));
        assert_eq!(backend.hash("hits:a").unwrap()["Total"], "abc");
    }

    #[tokio::test]
    async fn test_get_hash_missing_is_empty() {
        let backend = InMemoryBackend::new();
        assert!(backend.get_hash("hits:none").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_seeded_hash_exists() {
        let backend = InMemoryBackend::new();
        backend.insert_hash("hits:empty", &[]);
        assert!(backend.hash_exists("hits:empty").await.unwrap());
    }
}
