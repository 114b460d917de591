//! Background worker draining the click event channel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::entities::ClickEvent;
use crate::domain::repositories::ClickLedger;

/// Consumes click events and appends them to the ledger.
///
/// This is the independent error channel for fire-and-forget click
/// recording: the redirect path never waits on it. Failed appends are
/// retried with jittered exponential backoff and then dropped with an
/// error log; a click lost here is the accepted at-most-once tradeoff,
/// not a correctness bug for the redirect that triggered it.
///
/// The worker exits when every sender half of the channel is dropped.
pub async fn run_click_worker(mut rx: mpsc::Receiver<ClickEvent>, ledger: Arc<dyn ClickLedger>) {
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(50).map(jitter).take(3);

        let result = Retry::spawn(strategy, || {
            let ledger = ledger.clone();
            let event = event.clone();
            async move { ledger.record(event).await }
        })
        .await;

        match result {
            Ok(()) => tracing::debug!(key = %event.key, "click recorded"),
            Err(e) => tracing::error!(key = %event.key, error = %e, "click dropped after retries"),
        }
    }

    tracing::info!("Click worker stopped: channel closed");
}
