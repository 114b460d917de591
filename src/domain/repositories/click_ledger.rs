//! Storage trait for the append-only click event store.

use crate::domain::entities::ClickEvent;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for click accounting.
///
/// The click store is a single append-only collection of click-event
/// documents, queried by equality on `key` only; events are never mutated
/// or deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickLedger`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryClickLedger`] - in-memory, for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickLedger: Send + Sync {
    /// Appends one click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `event.key` is empty; the check
    /// happens before any store I/O is attempted.
    /// Returns [`AppError::Internal`] on store errors.
    async fn record(&self, event: ClickEvent) -> Result<(), AppError>;

    /// Exact count of recorded events whose key matches.
    ///
    /// A key with no events (including one that was never created) counts
    /// zero; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn count_by_key(&self, key: &str) -> Result<i64, AppError>;

    /// Checks whether the store backend is reachable.
    async fn health_check(&self) -> bool;
}
