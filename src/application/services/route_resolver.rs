//! Key-to-target resolution.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Route;
use crate::domain::repositories::KeyStore;
use crate::error::AppError;

/// Resolves short keys against the key store.
///
/// Every resolution is a fresh store read; there is no cache in front of
/// the store, which is itself the source of truth.
pub struct RouteResolver {
    store: Arc<dyn KeyStore>,
}

impl RouteResolver {
    pub fn new(store: Arc<dyn KeyStore>) -> Self {
        Self { store }
    }

    /// Looks up a key and returns its route.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown key and
    /// [`AppError::Unavailable`] on a transient store failure; the two are
    /// never conflated.
    pub async fn resolve(&self, key: &str) -> Result<Route, AppError> {
        match self.store.get(key).await? {
            Some(target) => Ok(Route::new(key, target)),
            None => Err(AppError::not_found(
                "Route not found",
                json!({ "key": key }),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockKeyStore;

    #[tokio::test]
    async fn test_resolve_found() {
        let mut store = MockKeyStore::new();
        store
            .expect_get()
            .withf(|key| key == "abc123def0")
            .returning(|_| Ok(Some("https://example.com".to_string())));

        let resolver = RouteResolver::new(Arc::new(store));
        let route = resolver.resolve("abc123def0").await.unwrap();

        assert_eq!(route.key, "abc123def0");
        assert_eq!(route.target, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown_key_is_not_found() {
        let mut store = MockKeyStore::new();
        store.expect_get().returning(|_| Ok(None));

        let resolver = RouteResolver::new(Arc::new(store));
        let err = resolver.resolve("doesnotexist").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_transient_failure_is_unavailable() {
        let mut store = MockKeyStore::new();
        store
            .expect_get()
            .returning(|_| Err(AppError::unavailable("Key store unavailable", json!({}))));

        let resolver = RouteResolver::new(Arc::new(store));
        let err = resolver.resolve("abc123def0").await.unwrap_err();

        assert!(matches!(err, AppError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let mut store = MockKeyStore::new();
        store
            .expect_get()
            .times(2)
            .returning(|_| Ok(Some("https://example.com".to_string())));

        let resolver = RouteResolver::new(Arc::new(store));
        let first = resolver.resolve("abc123def0").await.unwrap();
        let second = resolver.resolve("abc123def0").await.unwrap();

        assert_eq!(first, second);
    }
}
