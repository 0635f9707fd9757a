//! Review change notifications.

use serde::Serialize;

/// A change to the review store, broadcast to subscribers.
///
/// Published by repository implementations once the change is applied and
/// before the next write to the store, so a subscriber sees changes in the order
/// they happened and a re-read of the store always reflects the event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReviewEvent {
    Created {
        review_id: u64,
        hotel_id: i64,
        rating: u8,
    },
    MarkedHelpful {
        review_id: u64,
        hotel_id: i64,
        helpful: u32,
    },
}

impl ReviewEvent {
    /// Hotel whose rating may have changed.
    pub fn hotel_id(&self) -> i64 {
        match self {
            Self::Created { hotel_id, .. } | Self::MarkedHelpful { hotel_id, .. } => *hotel_id,
        }
    }
}
