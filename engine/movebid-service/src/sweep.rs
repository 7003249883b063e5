//! Periodic expiry, reminder, and review-request evaluation
//!
//! The engine itself never runs timers; this sweep is the external poller
//! that persists lazily derived expiries and sends the time-driven
//! notifications. One pass every `interval_secs` (30 s by default).

use crate::config::SweepSettings;
use announcement_store::AnnouncementStore;
use auction_core::{AuctionError, NotificationEvent};
use chrono::{DateTime, Utc};
use notifier::NotificationSink;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Counts of actions taken by one sweep pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    pub expired: usize,
    pub reminders: usize,
    pub review_requests: usize,
}

impl SweepStats {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Periodic sweep over stored announcements
pub struct ExpirySweep {
    store: Arc<dyn AnnouncementStore>,
    sink: Arc<dyn NotificationSink>,
    settings: SweepSettings,
}

impl ExpirySweep {
    pub fn new(
        store: Arc<dyn AnnouncementStore>,
        sink: Arc<dyn NotificationSink>,
        settings: SweepSettings,
    ) -> Self {
        Self { store, sink, settings }
    }

    /// Deliver an event without failing the sweep
    async fn notify(&self, event: NotificationEvent) {
        if let Err(err) = self.sink.deliver(event).await {
            warn!("notification dispatch failed: {err}");
        }
    }

    /// Run a single pass as of `now`.
    ///
    /// Each announcement is persisted before its notification goes out, so
    /// a crash between the two can duplicate a notification (at-least-once)
    /// but never resurrect a flag.
    pub async fn run_once(&self, now: DateTime<Utc>) -> Result<SweepStats, AuctionError> {
        let mut stats = SweepStats::default();

        let active = self
            .store
            .active_announcements()
            .await
            .map_err(|e| AuctionError::dependency(e.to_string()))?;

        for mut announcement in active {
            if announcement.mark_expired(now) {
                self.store
                    .update_announcement(announcement.clone())
                    .await
                    .map_err(|e| AuctionError::dependency(e.to_string()))?;
                info!(id = %announcement.id, "announcement expired");
                stats.expired += 1;
                continue;
            }

            if announcement.reminder_due(self.settings.reminder_lead(), now) {
                if let Some(event) = announcement.take_reminder() {
                    self.store
                        .update_announcement(announcement.clone())
                        .await
                        .map_err(|e| AuctionError::dependency(e.to_string()))?;
                    self.notify(event).await;
                    stats.reminders += 1;
                }
            }
        }

        let completed = self
            .store
            .completed_announcements()
            .await
            .map_err(|e| AuctionError::dependency(e.to_string()))?;

        for mut announcement in completed {
            if announcement.review_due(self.settings.review_delay(), now) {
                if let Some(event) = announcement.take_review_request() {
                    self.store
                        .update_announcement(announcement.clone())
                        .await
                        .map_err(|e| AuctionError::dependency(e.to_string()))?;
                    self.notify(event).await;
                    stats.review_requests += 1;
                }
            }
        }

        Ok(stats)
    }

    /// Run until cancelled, one pass per interval tick
    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.settings.interval());

        loop {
            interval.tick().await;
            match self.run_once(Utc::now()).await {
                Ok(stats) if !stats.is_empty() => {
                    info!(
                        expired = stats.expired,
                        reminders = stats.reminders,
                        review_requests = stats.review_requests,
                        "sweep pass complete"
                    );
                }
                Ok(_) => {}
                Err(err) => error!("sweep pass failed: {err}"),
            }
        }
    }
}
