//! Redis-backed key store with failover support.

use async_trait::async_trait;
use redis::aio::{ConnectionManager, MultiplexedConnection};
use redis::sentinel::{SentinelClient, SentinelServerType};
use redis::{Client, Cmd, RedisError, RedisResult};
use serde_json::json;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::domain::repositories::KeyStore;
use crate::error::{AppError, map_redis_error};

/// Redis implementation of the route key-value namespace.
///
/// Two connection modes:
///
/// - **Direct** (`REDIS_URL`): a [`ConnectionManager`] that reconnects on its
///   own. Suitable when the address is stable (single node, or a proxy/DNS
///   name that follows the primary).
/// - **Sentinel** (`REDIS_SENTINEL_ADDRS` + `REDIS_MASTER_NAME`): the current
///   primary is resolved through the sentinels and the connection cached.
///   When a command fails at the connection level, the cached connection is
///   discarded, a fresh primary is resolved, and the command is retried once.
///   Callers never observe which physical node served the request.
pub struct RedisKeyStore {
    backend: Backend,
}

enum Backend {
    Direct(ConnectionManager),
    Sentinel {
        client: Mutex<SentinelClient>,
        // Cached connection to the current primary; cleared on failure.
        conn: RwLock<Option<MultiplexedConnection>>,
    },
}

impl RedisKeyStore {
    /// Connects directly to a single Redis endpoint and validates it with PING.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        info!("Connecting to Redis key store");

        let client = Client::open(redis_url).map_err(map_redis_error)?;
        let manager = ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;

        let mut test_conn = manager.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut test_conn)
            .await
            .map_err(map_redis_error)?;

        info!("✓ Connected to Redis key store");

        Ok(Self {
            backend: Backend::Direct(manager),
        })
    }

    /// Connects through Redis Sentinel, resolving the current primary of
    /// `master_name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if no sentinel is reachable or the
    /// primary cannot be resolved.
    pub async fn connect_sentinel(
        sentinel_addrs: Vec<String>,
        master_name: &str,
    ) -> Result<Self, AppError> {
        info!(master = master_name, "Connecting to Redis via Sentinel");

        let mut client = SentinelClient::build(
            sentinel_addrs,
            master_name.to_string(),
            None,
            SentinelServerType::Master,
        )
        .map_err(map_redis_error)?;

        let conn = client
            .get_async_connection()
            .await
            .map_err(map_redis_error)?;

        info!("✓ Connected to Redis primary via Sentinel");

        Ok(Self {
            backend: Backend::Sentinel {
                client: Mutex::new(client),
                conn: RwLock::new(Some(conn)),
            },
        })
    }

    /// Runs a command against the store, reconnecting across a failover.
    async fn query<T: redis::FromRedisValue>(&self, cmd: &Cmd) -> Result<T, AppError> {
        match &self.backend {
            Backend::Direct(manager) => {
                let mut conn = manager.clone();
                let res: RedisResult<T> = cmd.query_async(&mut conn).await;
                res.map_err(map_redis_error)
            }
            Backend::Sentinel { client, conn } => {
                let mut active = match self.cached_conn(conn).await {
                    Some(c) => c,
                    None => self.refresh_conn(client, conn).await?,
                };

                let res: RedisResult<T> = cmd.query_async(&mut active).await;
                match res {
                    Ok(value) => Ok(value),
                    Err(e) if is_connection_failure(&e) => {
                        warn!("Primary connection lost, re-resolving via Sentinel: {}", e);
                        let mut fresh = self.refresh_conn(client, conn).await?;
                        let retry: RedisResult<T> = cmd.query_async(&mut fresh).await;
                        retry.map_err(map_redis_error)
                    }
                    Err(e) => Err(map_redis_error(e)),
                }
            }
        }
    }

    async fn cached_conn(
        &self,
        conn: &RwLock<Option<MultiplexedConnection>>,
    ) -> Option<MultiplexedConnection> {
        conn.read().await.clone()
    }

    /// Resolves the current primary through the sentinels and caches the
    /// new connection.
    async fn refresh_conn(
        &self,
        client: &Mutex<SentinelClient>,
        conn: &RwLock<Option<MultiplexedConnection>>,
    ) -> Result<MultiplexedConnection, AppError> {
        let mut guard = client.lock().await;
        let fresh = guard
            .get_async_connection()
            .await
            .map_err(map_redis_error)?;
        *conn.write().await = Some(fresh.clone());
        Ok(fresh)
    }
}

/// Whether a command error means the connection to the primary is gone and
/// a retry against a freshly resolved primary makes sense.
///
/// Server-side errors (wrong type, OOM, scripts) must not be retried: the
/// command reached a live primary and failed on its merits.
fn is_connection_failure(e: &RedisError) -> bool {
    e.is_connection_dropped() || e.is_connection_refusal() || e.is_io_error() || e.is_timeout()
}

#[async_trait]
impl KeyStore for RedisKeyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.query(redis::cmd("GET").arg(key)).await
    }

    async fn exists(&self, key: &str) -> Result<bool, AppError> {
        self.query(redis::cmd("EXISTS").arg(key)).await
    }

    async fn set_if_absent(&self, key: &str, target: &str) -> Result<bool, AppError> {
        if key.is_empty() {
            return Err(AppError::bad_request(
                "Key must not be empty",
                json!({ "key": key }),
            ));
        }
        self.query(redis::cmd("SETNX").arg(key).arg(target)).await
    }

    async fn health_check(&self) -> bool {
        self.query::<String>(&redis::cmd("PING")).await.is_ok()
    }
}
