//! In-memory key store for tests and local development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::repositories::KeyStore;
use crate::error::AppError;

/// Process-local [`KeyStore`] backed by a `HashMap`.
///
/// Substitutable for the Redis implementation in handler tests and when
/// running without external services. Atomicity of
/// [`KeyStore::set_if_absent`] holds under the map's write lock, matching
/// the semantics SETNX provides against Redis.
#[derive(Default)]
pub struct MemoryKeyStore {
    routes: RwLock<HashMap<String, String>>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.routes.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KeyStore for MemoryKeyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let routes = self.routes.read().unwrap_or_else(|e| e.into_inner());
        Ok(routes.get(key).cloned())
    }

    async fn exists(&self, key: &str) -> Result<bool, AppError> {
        let routes = self.routes.read().unwrap_or_else(|e| e.into_inner());
        Ok(routes.contains_key(key))
    }

    async fn set_if_absent(&self, key: &str, target: &str) -> Result<bool, AppError> {
        if key.is_empty() {
            return Err(AppError::bad_request(
                "Key must not be empty",
                json!({ "key": key }),
            ));
        }
        let mut routes = self.routes.write().unwrap_or_else(|e| e.into_inner());
        if routes.contains_key(key) {
            return Ok(false);
        }
        routes.insert(key.to_string(), target.to_string());
        Ok(true)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key_is_none_not_error() {
        let store = MemoryKeyStore::new();
        assert_eq!(store.get("doesnotexist").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_if_absent_reserves_once() {
        let store = MemoryKeyStore::new();

        assert!(store.set_if_absent("k1", "https://a.example").await.unwrap());
        assert!(!store.set_if_absent("k1", "https://b.example").await.unwrap());

        // Loser of the race must not have overwritten the mapping.
        assert_eq!(
            store.get("k1").await.unwrap().as_deref(),
            Some("https://a.example")
        );
    }

    #[tokio::test]
    async fn test_exists_tracks_reservations() {
        let store = MemoryKeyStore::new();
        assert!(!store.exists("k2").await.unwrap());
        store.set_if_absent("k2", "https://a.example").await.unwrap();
        assert!(store.exists("k2").await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_key_rejected() {
        let store = MemoryKeyStore::new();
        let err = store.set_if_absent("", "https://a.example").await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(store.is_empty());
    }
}
