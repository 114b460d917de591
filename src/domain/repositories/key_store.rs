//! Storage trait for the key-value route namespace.

use crate::error::AppError;
use async_trait::async_trait;

/// Client interface for the key-value store holding `key -> target` mappings.
///
/// The store sits behind a primary/replica failover topology; implementations
/// must reconnect transparently so that callers never observe which physical
/// node served a request. A missing key is always `Ok(None)` / `Ok(false)`,
/// never an error: every `Err` from this trait is a transport-level
/// [`AppError::Unavailable`].
///
/// There is deliberately no unconditional `set`. Reservation happens through
/// [`KeyStore::set_if_absent`] so two concurrent writers can never race each
/// other into overwriting an existing mapping.
///
/// # Implementations
///
/// - [`crate::infrastructure::keystore::RedisKeyStore`] - Redis, direct or sentinel mode
/// - [`crate::infrastructure::keystore::MemoryKeyStore`] - in-memory, for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// Fetches the target for a key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(target))` if the key is mapped
    /// - `Ok(None)` if the key does not exist
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on transport failure.
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Reports whether a key is present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on transport failure.
    async fn exists(&self, key: &str) -> Result<bool, AppError>;

    /// Atomically reserves `key -> target` if the key is currently unmapped.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the mapping was written
    /// - `Ok(false)` if the key already existed (the caller lost the race)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on transport failure.
    async fn set_if_absent(&self, key: &str, target: &str) -> Result<bool, AppError>;

    /// Checks whether the store backend is reachable.
    async fn health_check(&self) -> bool;
}
