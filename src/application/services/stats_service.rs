//! Statistics queries joining routes with click counts.

use std::sync::Arc;

use crate::domain::entities::RouteStats;
use crate::domain::repositories::ClickLedger;
use crate::error::AppError;

use super::RouteResolver;

/// Computes per-key statistics.
///
/// The route lookup validates that the key still maps to a target before
/// the count is fetched; if either side fails, the whole query fails with
/// no partial results.
pub struct StatsService {
    resolver: Arc<RouteResolver>,
    ledger: Arc<dyn ClickLedger>,
}

impl StatsService {
    pub fn new(resolver: Arc<RouteResolver>, ledger: Arc<dyn ClickLedger>) -> Self {
        Self { resolver, ledger }
    }

    /// Returns the route and its exact click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the key maps to no route,
    /// [`AppError::Unavailable`] or [`AppError::Internal`] on store errors.
    pub async fn stats_for_key(&self, key: &str) -> Result<RouteStats, AppError> {
        let route = self.resolver.resolve(key).await?;
        let clicks = self.ledger.count_by_key(key).await?;

        Ok(RouteStats {
            key: route.key,
            target: route.target,
            clicks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockClickLedger, MockKeyStore};
    use serde_json::json;

    fn resolver_returning(target: Option<&'static str>) -> Arc<RouteResolver> {
        let mut store = MockKeyStore::new();
        store
            .expect_get()
            .returning(move |_| Ok(target.map(String::from)));
        Arc::new(RouteResolver::new(Arc::new(store)))
    }

    #[tokio::test]
    async fn test_stats_joins_route_and_count() {
        let mut ledger = MockClickLedger::new();
        ledger
            .expect_count_by_key()
            .withf(|key| key == "abc123def0")
            .returning(|_| Ok(3));

        let service = StatsService::new(
            resolver_returning(Some("https://example.com")),
            Arc::new(ledger),
        );

        let stats = service.stats_for_key("abc123def0").await.unwrap();
        assert_eq!(stats.key, "abc123def0");
        assert_eq!(stats.target, "https://example.com");
        assert_eq!(stats.clicks, 3);
    }

    #[tokio::test]
    async fn test_stats_for_unknown_key_is_not_found() {
        // The ledger must not be consulted when the route does not exist.
        let ledger = MockClickLedger::new();

        let service = StatsService::new(resolver_returning(None), Arc::new(ledger));
        let err = service.stats_for_key("doesnotexist").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_stats_fails_whole_when_count_fails() {
        let mut ledger = MockClickLedger::new();
        ledger
            .expect_count_by_key()
            .returning(|_| Err(AppError::internal("Click store error", json!({}))));

        let service = StatsService::new(
            resolver_returning(Some("https://example.com")),
            Arc::new(ledger),
        );

        assert!(service.stats_for_key("abc123def0").await.is_err());
    }
}
