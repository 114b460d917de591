//! In-memory click ledger for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::ClickEvent;
use crate::domain::repositories::ClickLedger;
use crate::error::AppError;

/// Process-local [`ClickLedger`] keeping events in an append-only `Vec`.
#[derive(Default)]
pub struct MemoryClickLedger {
    events: Mutex<Vec<ClickEvent>>,
}

impl MemoryClickLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClickLedger for MemoryClickLedger {
    async fn record(&self, event: ClickEvent) -> Result<(), AppError> {
        if event.key.is_empty() {
            return Err(AppError::bad_request(
                "Click must specify a key",
                json!({}),
            ));
        }
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.push(event);
        Ok(())
    }

    async fn count_by_key(&self, key: &str) -> Result<i64, AppError> {
        let events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        Ok(events.iter().filter(|e| e.key == key).count() as i64)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_count_matches_recorded_events() {
        let ledger = MemoryClickLedger::new();

        for _ in 0..3 {
            ledger.record(ClickEvent::new("abc123def0")).await.unwrap();
        }

        assert_eq!(ledger.count_by_key("abc123def0").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_unknown_key_counts_zero() {
        let ledger = MemoryClickLedger::new();
        assert_eq!(ledger.count_by_key("doesnotexist").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_count_is_monotonic() {
        let ledger = MemoryClickLedger::new();
        let mut last = 0;

        for _ in 0..5 {
            ledger.record(ClickEvent::new("k")).await.unwrap();
            let count = ledger.count_by_key("k").await.unwrap();
            assert!(count > last);
            last = count;
        }
    }

    #[tokio::test]
    async fn test_empty_key_rejected_before_append() {
        let ledger = MemoryClickLedger::new();

        let err = ledger.record(ClickEvent::new("")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(ledger.count_by_key("").await.unwrap(), 0);
    }
}
