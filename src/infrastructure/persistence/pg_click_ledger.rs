//! PostgreSQL implementation of the click ledger.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;

use crate::domain::entities::ClickEvent;
use crate::domain::repositories::ClickLedger;
use crate::error::AppError;

/// Click ledger backed by a single append-only `clicks` table.
///
/// Each row is one redirect; rows are never updated or deleted by this
/// service. The user-agent fields are stored as a JSONB document since they
/// are opaque, descriptive data this service only carries through.
///
/// Queries are bound at runtime so the crate builds without a live database.
pub struct PgClickLedger {
    pool: Arc<PgPool>,
}

impl PgClickLedger {
    /// Creates a new ledger over a shared connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickLedger for PgClickLedger {
    async fn record(&self, event: ClickEvent) -> Result<(), AppError> {
        if event.key.is_empty() {
            return Err(AppError::bad_request(
                "Click must specify a key",
                json!({}),
            ));
        }

        let user_agent = serde_json::to_value(&event.user_agent)
            .map_err(|e| AppError::internal("Failed to encode user agent", json!({ "reason": e.to_string() })))?;

        sqlx::query(
            r#"
            INSERT INTO clicks (key, clicked_at, client_ip, referer, user_agent)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&event.key)
        .bind(event.time)
        .bind(&event.client_ip)
        .bind(&event.referer)
        .bind(user_agent)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn count_by_key(&self, key: &str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks WHERE key = $1")
            .bind(key)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
