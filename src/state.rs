//! Shared application state.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{ClickService, KeyGenerator, RouteResolver, StatsService};
use crate::domain::entities::ClickEvent;
use crate::domain::repositories::{ClickLedger, KeyStore};

/// Process-wide handles shared by every request.
///
/// Both store clients are long-lived, constructed once at startup, and
/// injected here rather than reached through ambient singletons; swapping
/// in the in-memory implementations makes every handler deterministic to
/// test.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<KeyGenerator>,
    pub resolver: Arc<RouteResolver>,
    pub clicks: Arc<ClickService>,
    pub stats: Arc<StatsService>,
    pub key_store: Arc<dyn KeyStore>,
    pub ledger: Arc<dyn ClickLedger>,
    pub click_tx: mpsc::Sender<ClickEvent>,
}

impl AppState {
    /// Wires the services over the given store handles and click channel.
    pub fn new(
        key_store: Arc<dyn KeyStore>,
        ledger: Arc<dyn ClickLedger>,
        click_tx: mpsc::Sender<ClickEvent>,
    ) -> Self {
        let generator = Arc::new(KeyGenerator::new(key_store.clone()));
        let resolver = Arc::new(RouteResolver::new(key_store.clone()));
        let clicks = Arc::new(ClickService::new(click_tx.clone()));
        let stats = Arc::new(StatsService::new(resolver.clone(), ledger.clone()));

        Self {
            generator,
            resolver,
            clicks,
            stats,
            key_store,
            ledger,
            click_tx,
        }
    }
}
