#![allow(dead_code)]

use std::sync::Arc;

use tokio::sync::mpsc;

use shortroute::AppState;
use shortroute::domain::click_worker::run_click_worker;
use shortroute::domain::entities::ClickEvent;
use shortroute::infrastructure::keystore::MemoryKeyStore;
use shortroute::infrastructure::persistence::MemoryClickLedger;

pub struct TestContext {
    pub state: AppState,
    pub key_store: Arc<MemoryKeyStore>,
    pub ledger: Arc<MemoryClickLedger>,
}

/// Builds an app state over in-memory stores, handing back the click
/// channel receiver so tests can assert what was (not) enqueued.
pub fn test_state() -> (TestContext, mpsc::Receiver<ClickEvent>) {
    let key_store = Arc::new(MemoryKeyStore::new());
    let ledger = Arc::new(MemoryClickLedger::new());
    let (click_tx, click_rx) = mpsc::channel(1024);

    let state = AppState::new(key_store.clone(), ledger.clone(), click_tx);

    (
        TestContext {
            state,
            key_store,
            ledger,
        },
        click_rx,
    )
}

/// Like [`test_state`], but with the click worker running so queued events
/// actually land in the ledger.
pub fn test_state_with_worker() -> TestContext {
    let (ctx, click_rx) = test_state();
    tokio::spawn(run_click_worker(click_rx, ctx.ledger.clone()));
    ctx
}

pub async fn create_test_route(ctx: &TestContext, key: &str, target: &str) {
    use shortroute::domain::repositories::KeyStore;

    assert!(
        ctx.key_store.set_if_absent(key, target).await.unwrap(),
        "test route '{key}' already present"
    );
}

pub async fn record_test_clicks(ctx: &TestContext, key: &str, count: usize) {
    use shortroute::domain::repositories::ClickLedger;

    for _ in 0..count {
        ctx.ledger.record(ClickEvent::new(key)).await.unwrap();
    }
}
