//! HTTP server initialization and runtime setup.
//!
//! Handles store connections, migrations, worker spawning, and the Axum
//! server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{ServiceExt, extract::Request};
use sqlx::postgres::PgPoolOptions;
use tokio::sync::mpsc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::api::routes::app_router;
use crate::config::{Config, KeyStoreConfig};
use crate::domain::click_worker::run_click_worker;
use crate::domain::repositories::{ClickLedger, KeyStore};
use crate::infrastructure::keystore::RedisKeyStore;
use crate::infrastructure::persistence::PgClickLedger;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations (click store)
/// - Redis key store, direct or through Sentinel
/// - Background click worker
/// - Axum HTTP server with graceful ctrl-c shutdown
///
/// # Errors
///
/// Returns an error if a store connection, the bind, or the server runtime
/// fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to click store");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let key_store: Arc<dyn KeyStore> = match &config.key_store {
        KeyStoreConfig::Direct { url } => Arc::new(RedisKeyStore::connect(url).await?),
        KeyStoreConfig::Sentinel { addrs, master_name } => {
            Arc::new(RedisKeyStore::connect_sentinel(addrs.clone(), master_name).await?)
        }
    };

    let ledger: Arc<dyn ClickLedger> = Arc::new(PgClickLedger::new(Arc::new(pool)));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_rx, ledger.clone()));
    tracing::info!("Click worker started");

    let state = AppState::new(key_store, ledger, click_tx);

    // Trailing slashes are trimmed before routing, so /v1/route/{key}/ hits
    // the same handler as /v1/route/{key}.
    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
