//! Background consumer of review change events.

use tokio::sync::broadcast::{self, error::RecvError};

use crate::domain::review_event::ReviewEvent;

/// Logs review events until the channel closes.
///
/// A lagging receiver skips the overwritten events and keeps going; the store
/// stays the source of truth, so nothing is lost beyond the log lines.
pub async fn run_review_event_logger(mut rx: broadcast::Receiver<ReviewEvent>) {
    loop {
        match rx.recv().await {
            Ok(event) => log_event(&event),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Review event logger lagged behind");
            }
            Err(RecvError::Closed) => {
                tracing::info!("Review event channel closed, stopping logger");
                break;
            }
        }
    }
}

fn log_event(event: &ReviewEvent) {
    let hotel_id = event.hotel_id();
    match event {
        ReviewEvent::Created {
            review_id, rating, ..
        } => {
            tracing::info!(review_id, hotel_id, rating, "Review created");
        }
        ReviewEvent::MarkedHelpful {
            review_id, helpful, ..
        } => {
            tracing::debug!(review_id, hotel_id, helpful, "Review marked helpful");
        }
    }
}
