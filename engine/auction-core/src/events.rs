//! Notification events emitted on lifecycle transitions
//!
//! Events are handed to the notification boundary fire-and-forget with
//! at-least-once delivery; consumers de-duplicate on announcement id plus
//! event kind.

use crate::types::{AnnouncementId, BidId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Event kinds, enumerable for flag tracking and template lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    BookingConfirmation,
    BidReceived,
    WinnerDetermined,
    Reminder,
    ReviewRequest,
}

/// Canonical events emitted by the auction engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NotificationEvent {
    BookingConfirmation {
        announcement_id: AnnouncementId,
        origin_city: String,
        destination_city: String,
    },
    BidReceived {
        announcement_id: AnnouncementId,
        bid_id: BidId,
        company_name: String,
        price: Decimal,
    },
    WinnerDetermined {
        announcement_id: AnnouncementId,
        bid_id: BidId,
        company_name: String,
        price: Decimal,
    },
    Reminder {
        announcement_id: AnnouncementId,
        window_end: DateTime<Utc>,
    },
    ReviewRequest {
        announcement_id: AnnouncementId,
    },
}

impl NotificationEvent {
    /// Get the event kind for template lookup and de-duplication
    #[inline]
    pub fn kind(&self) -> EventKind {
        match self {
            NotificationEvent::BookingConfirmation { .. } => EventKind::BookingConfirmation,
            NotificationEvent::BidReceived { .. } => EventKind::BidReceived,
            NotificationEvent::WinnerDetermined { .. } => EventKind::WinnerDetermined,
            NotificationEvent::Reminder { .. } => EventKind::Reminder,
            NotificationEvent::ReviewRequest { .. } => EventKind::ReviewRequest,
        }
    }

    /// Get the announcement the event is scoped to
    #[inline]
    pub fn announcement_id(&self) -> AnnouncementId {
        match self {
            NotificationEvent::BookingConfirmation { announcement_id, .. }
            | NotificationEvent::BidReceived { announcement_id, .. }
            | NotificationEvent::WinnerDetermined { announcement_id, .. }
            | NotificationEvent::Reminder { announcement_id, .. }
            | NotificationEvent::ReviewRequest { announcement_id } => *announcement_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_properties() {
        let id = AnnouncementId::new();
        let event = NotificationEvent::Reminder { announcement_id: id, window_end: Utc::now() };

        assert_eq!(event.kind(), EventKind::Reminder);
        assert_eq!(event.announcement_id(), id);
    }

    #[test]
    fn event_serializes_with_tag() {
        let event = NotificationEvent::ReviewRequest { announcement_id: AnnouncementId::new() };
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains("\"event\":\"review_request\""));
    }
}
