//! Validation gate and dispatch for click recording.

use serde_json::json;
use tokio::sync::mpsc;

use crate::domain::entities::ClickEvent;
use crate::error::AppError;

/// Accepts click events from the API boundary and hands them to the
/// background worker.
///
/// Submission is fire-and-forget: the caller gets an answer as soon as the
/// event is validated and queued, before it is durably recorded. A full
/// queue drops the event, keeping accounting at-most-once.
pub struct ClickService {
    tx: mpsc::Sender<ClickEvent>,
}

impl ClickService {
    pub fn new(tx: mpsc::Sender<ClickEvent>) -> Self {
        Self { tx }
    }

    /// Validates and enqueues a click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty key; nothing is
    /// enqueued and no store call is ever made for such an event.
    pub fn submit(&self, event: ClickEvent) -> Result<(), AppError> {
        if event.key.is_empty() {
            return Err(AppError::bad_request("Click must specify a key", json!({})));
        }

        if let Err(e) = self.tx.try_send(event) {
            tracing::warn!("Click queue full, dropping event: {}", e);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;

    #[tokio::test]
    async fn test_submit_enqueues_valid_event() {
        let (tx, mut rx) = mpsc::channel(4);
        let service = ClickService::new(tx);

        service.submit(ClickEvent::new("abc123def0")).unwrap();

        let queued = rx.try_recv().unwrap();
        assert_eq!(queued.key, "abc123def0");
    }

    #[tokio::test]
    async fn test_empty_key_rejected_without_enqueue() {
        let (tx, mut rx) = mpsc::channel(4);
        let service = ClickService::new(tx);

        let err = service.submit(ClickEvent::new("")).unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[tokio::test]
    async fn test_full_queue_drops_event_without_error() {
        let (tx, _rx) = mpsc::channel(1);
        let service = ClickService::new(tx);

        service.submit(ClickEvent::new("abc123def0")).unwrap();
        // Queue is full now; the second submit is accepted but dropped.
        service.submit(ClickEvent::new("abc123def0")).unwrap();
    }
}
