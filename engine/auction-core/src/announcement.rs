//! Announcement records and their lifecycle state machine
//!
//! Status transitions: `Active → Expired` (window ran out, derived lazily),
//! `Active → Completed` and `Expired → Completed` (winner confirmed).
//! Nothing leaves `Completed`.

use crate::bid::Bid;
use crate::countdown::{time_remaining, TimeRemaining};
use crate::error::AuctionError;
use crate::events::NotificationEvent;
use crate::types::{AnnouncementId, ApartmentSize, BidId};
use crate::Result;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Announcement status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementStatus {
    Active,
    Expired,
    Completed,
}

/// Which once-only notifications have gone out for an announcement.
///
/// Each flag flips false→true at most once; transitions re-run without
/// re-sending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationState {
    pub booking_confirmed: bool,
    pub reminder_sent: bool,
    pub winner_notified: bool,
    pub review_requested: bool,
}

/// Input for publishing an announcement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAnnouncement {
    pub origin_city: String,
    pub destination_city: String,
    pub apartment_size: ApartmentSize,
    pub estimated_volume_m3: Decimal,
    pub floor: i32,
    pub has_elevator: bool,
    pub needs_packing: bool,
    pub needs_assembly: bool,
    pub preferred_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub window_end: DateTime<Utc>,
}

/// A customer's published moving request with a bidding window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub origin_city: String,
    pub destination_city: String,
    pub apartment_size: ApartmentSize,
    pub estimated_volume_m3: Decimal,
    pub floor: i32,
    pub has_elevator: bool,
    pub needs_packing: bool,
    pub needs_assembly: bool,
    pub preferred_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub status: AnnouncementStatus,
    pub winning_bid: Option<BidId>,
    pub completed_at: Option<DateTime<Utc>>,
    pub notifications: NotificationState,
}

impl Announcement {
    /// Validate `input` and publish a new active announcement.
    ///
    /// The bidding window opens at creation time. Returns the announcement
    /// together with its booking-confirmation event.
    pub fn create(
        input: NewAnnouncement,
        now: DateTime<Utc>,
    ) -> Result<(Self, NotificationEvent)> {
        if input.origin_city.trim().is_empty() {
            return Err(AuctionError::validation("origin city is required"));
        }
        if input.destination_city.trim().is_empty() {
            return Err(AuctionError::validation("destination city is required"));
        }
        if input.window_end <= now {
            return Err(AuctionError::validation(format!(
                "bidding window end must be in the future, got {}",
                input.window_end
            )));
        }
        if input.estimated_volume_m3 < Decimal::ZERO {
            return Err(AuctionError::validation(format!(
                "estimated volume must not be negative, got {}",
                input.estimated_volume_m3
            )));
        }

        let mut announcement = Self {
            id: AnnouncementId::new(),
            origin_city: input.origin_city,
            destination_city: input.destination_city,
            apartment_size: input.apartment_size,
            estimated_volume_m3: input.estimated_volume_m3,
            floor: input.floor,
            has_elevator: input.has_elevator,
            needs_packing: input.needs_packing,
            needs_assembly: input.needs_assembly,
            preferred_date: input.preferred_date,
            description: input.description,
            created_at: now,
            window_start: now,
            window_end: input.window_end,
            status: AnnouncementStatus::Active,
            winning_bid: None,
            completed_at: None,
            notifications: NotificationState::default(),
        };
        announcement.notifications.booking_confirmed = true;

        let event = NotificationEvent::BookingConfirmation {
            announcement_id: announcement.id,
            origin_city: announcement.origin_city.clone(),
            destination_city: announcement.destination_city.clone(),
        };

        Ok((announcement, event))
    }

    /// Status as seen at `now`.
    ///
    /// This is the single derivation every reader uses: a stored `Active`
    /// past its window end reads as `Expired` until a winner is confirmed,
    /// so stored and derived status never diverge.
    pub fn effective_status(&self, now: DateTime<Utc>) -> AnnouncementStatus {
        match self.status {
            AnnouncementStatus::Active if self.time_remaining(now).is_expired() => {
                AnnouncementStatus::Expired
            }
            status => status,
        }
    }

    /// Check if new bids are accepted at `now`
    pub fn accepts_bids(&self, now: DateTime<Utc>) -> bool {
        self.effective_status(now) == AnnouncementStatus::Active
    }

    /// Time left in the bidding window
    pub fn time_remaining(&self, now: DateTime<Utc>) -> TimeRemaining {
        time_remaining(self.window_end, now)
    }

    /// Persist the lazily derived expiry.
    ///
    /// Returns true when the stored status actually changed. Once stored,
    /// `Expired` is never reverted.
    pub fn mark_expired(&mut self, now: DateTime<Utc>) -> bool {
        if self.status == AnnouncementStatus::Active
            && self.effective_status(now) == AnnouncementStatus::Expired
        {
            self.status = AnnouncementStatus::Expired;
            return true;
        }
        false
    }

    /// Confirm `bid` as the winner and transition to `Completed`.
    ///
    /// Allowed from `Active` and from `Expired` (selecting among bids
    /// already received). Returns the winner-determined event the first
    /// time the transition happens; re-confirming the same winner is an
    /// idempotent no-op and confirming a different bid on a completed
    /// announcement is a conflict.
    pub fn confirm_winner(
        &mut self,
        bid: &Bid,
        now: DateTime<Utc>,
    ) -> Result<Option<NotificationEvent>> {
        if bid.announcement_id != self.id {
            return Err(AuctionError::invalid_reference(format!(
                "bid {} does not belong to announcement {}",
                bid.id, self.id
            )));
        }

        match self.status {
            AnnouncementStatus::Completed => {
                if self.winning_bid == Some(bid.id) {
                    Ok(None)
                } else {
                    Err(AuctionError::conflict(format!(
                        "announcement {} is already completed with a different winner",
                        self.id
                    )))
                }
            }
            AnnouncementStatus::Active | AnnouncementStatus::Expired => {
                self.status = AnnouncementStatus::Completed;
                self.winning_bid = Some(bid.id);
                self.completed_at = Some(now);

                if self.notifications.winner_notified {
                    return Ok(None);
                }
                self.notifications.winner_notified = true;

                Ok(Some(NotificationEvent::WinnerDetermined {
                    announcement_id: self.id,
                    bid_id: bid.id,
                    company_name: bid.company_name.clone(),
                    price: bid.price,
                }))
            }
        }
    }

    /// Check if the closing reminder should go out: still accepting bids,
    /// not yet reminded, and less than `lead` left in the window.
    pub fn reminder_due(&self, lead: Duration, now: DateTime<Utc>) -> bool {
        self.accepts_bids(now)
            && !self.notifications.reminder_sent
            && self.window_end - now <= lead
    }

    /// Flag the reminder as sent; returns the event on the first call only
    pub fn take_reminder(&mut self) -> Option<NotificationEvent> {
        if self.notifications.reminder_sent {
            return None;
        }
        self.notifications.reminder_sent = true;
        Some(NotificationEvent::Reminder { announcement_id: self.id, window_end: self.window_end })
    }

    /// Check if the review request should go out: completed at least
    /// `delay` ago and not yet requested.
    pub fn review_due(&self, delay: Duration, now: DateTime<Utc>) -> bool {
        if self.status != AnnouncementStatus::Completed || self.notifications.review_requested {
            return false;
        }
        match self.completed_at {
            Some(completed_at) => now - completed_at >= delay,
            None => false,
        }
    }

    /// Flag the review request as sent; returns the event on the first call only
    pub fn take_review_request(&mut self) -> Option<NotificationEvent> {
        if self.notifications.review_requested {
            return None;
        }
        self.notifications.review_requested = true;
        Some(NotificationEvent::ReviewRequest { announcement_id: self.id })
    }
}
