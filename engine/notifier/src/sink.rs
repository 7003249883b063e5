//! Notification delivery boundary

use crate::error::{NotifyError, Result};
use crate::template;
use auction_core::{Locale, NotificationEvent};
use tokio::sync::mpsc;
use tracing::info;

/// Abstract sink for lifecycle notifications
#[async_trait::async_trait]
pub trait NotificationSink: Send + Sync {
    /// Hand one event to the delivery channel
    async fn deliver(&self, event: NotificationEvent) -> Result<()>;
}

/// Hands events to a downstream dispatcher over an unbounded channel.
///
/// The dispatcher side (mail sender, push gateway, test harness) consumes
/// the receiver returned by [`ChannelSink::new`].
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<NotificationEvent>,
}

impl ChannelSink {
    /// Create a sink together with the receiver the dispatcher consumes
    pub fn new() -> (Self, mpsc::UnboundedReceiver<NotificationEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait::async_trait]
impl NotificationSink for ChannelSink {
    async fn deliver(&self, event: NotificationEvent) -> Result<()> {
        self.tx.send(event).map_err(|_| NotifyError::ChannelClosed)
    }
}

/// Renders events and writes them to the log.
///
/// Used when no external dispatcher is wired up, and handy in development.
pub struct LogSink {
    locale: Locale,
}

impl LogSink {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

#[async_trait::async_trait]
impl NotificationSink for LogSink {
    async fn deliver(&self, event: NotificationEvent) -> Result<()> {
        let payload = serde_json::to_string(&event)?;
        info!(
            kind = ?event.kind(),
            announcement = %event.announcement_id(),
            payload = %payload,
            "{}",
            template::render(&event, self.locale)
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_core::{AnnouncementId, EventKind};
    use chrono::Utc;

    #[tokio::test]
    async fn test_channel_sink_hands_off_events() {
        let (sink, mut rx) = ChannelSink::new();
        let id = AnnouncementId::new();

        sink.deliver(NotificationEvent::Reminder { announcement_id: id, window_end: Utc::now() })
            .await
            .unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.kind(), EventKind::Reminder);
        assert_eq!(received.announcement_id(), id);
    }

    #[tokio::test]
    async fn test_channel_sink_reports_closed_channel() {
        let (sink, rx) = ChannelSink::new();
        drop(rx);

        let result = sink
            .deliver(NotificationEvent::ReviewRequest { announcement_id: AnnouncementId::new() })
            .await;

        assert!(matches!(result, Err(NotifyError::ChannelClosed)));
    }

    #[tokio::test]
    async fn test_log_sink_accepts_events() {
        let sink = LogSink::new(Locale::De);

        sink.deliver(NotificationEvent::ReviewRequest { announcement_id: AnnouncementId::new() })
            .await
            .unwrap();
    }
}
