//! Auction operations over the storage and notification boundaries

use announcement_store::{AnnouncementStore, StoreError};
use auction_core::{
    presumptive_winner, rank_bids, time_remaining, Announcement, AnnouncementId, AuctionError,
    Bid, BidId, BidSummary, NewAnnouncement, NewBid, NotificationEvent, TimeRemaining,
};
use chrono::{DateTime, Utc};
use notifier::NotificationSink;
use pricing_engine::{compute_comparisons, CostBreakdown, PriceComparison};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, warn};

/// The auction engine's public operations.
///
/// Persistence failures abort an operation; notification failures are
/// logged and swallowed once the state change has been persisted.
pub struct AuctionService {
    store: Arc<dyn AnnouncementStore>,
    sink: Arc<dyn NotificationSink>,
}

impl AuctionService {
    /// Create a service over the given boundaries
    pub fn new(store: Arc<dyn AnnouncementStore>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { store, sink }
    }

    /// Map store errors into the caller-facing taxonomy
    fn store_error(err: StoreError) -> AuctionError {
        match err {
            StoreError::NotFound(msg) => AuctionError::invalid_reference(msg),
            StoreError::WindowClosed(msg) => AuctionError::conflict(msg),
            other => AuctionError::dependency(other.to_string()),
        }
    }

    /// Deliver an event without failing the caller
    async fn notify(&self, event: NotificationEvent) {
        if let Err(err) = self.sink.deliver(event).await {
            warn!("notification dispatch failed: {err}");
        }
    }

    /// Publish a new announcement and emit its booking confirmation
    pub async fn create_announcement(
        &self,
        input: NewAnnouncement,
        now: DateTime<Utc>,
    ) -> Result<Announcement, AuctionError> {
        let (announcement, event) = Announcement::create(input, now)?;

        self.store
            .insert_announcement(announcement.clone())
            .await
            .map_err(Self::store_error)?;
        self.notify(event).await;

        info!(id = %announcement.id, "announcement created");
        Ok(announcement)
    }

    /// Submit a bid against an announcement.
    ///
    /// Fails with `Conflict` when the bidding window has closed and with
    /// `InvalidReference` when the announcement does not exist; neither
    /// leaves a bid record behind.
    pub async fn submit_bid(
        &self,
        announcement_id: AnnouncementId,
        input: NewBid,
        now: DateTime<Utc>,
    ) -> Result<Bid, AuctionError> {
        let bid = Bid::create(announcement_id, input, now)?;
        let bid = self.store.insert_bid(bid, now).await.map_err(Self::store_error)?;

        self.notify(NotificationEvent::BidReceived {
            announcement_id,
            bid_id: bid.id,
            company_name: bid.company_name.clone(),
            price: bid.price,
        })
        .await;

        info!(id = %bid.id, announcement = %announcement_id, price = %bid.price, "bid received");
        Ok(bid)
    }

    /// All bids for an announcement, cheapest first
    pub async fn list_bids(
        &self,
        announcement_id: AnnouncementId,
    ) -> Result<Vec<Bid>, AuctionError> {
        // Resolve the parent first so unknown ids surface as InvalidReference
        self.store.announcement(announcement_id).await.map_err(Self::store_error)?;

        let mut bids =
            self.store.bids_for(announcement_id).await.map_err(Self::store_error)?;
        rank_bids(&mut bids);
        Ok(bids)
    }

    /// Bid aggregate for an announcement; `None` means no bids yet
    pub async fn bid_summary(
        &self,
        announcement_id: AnnouncementId,
    ) -> Result<Option<BidSummary>, AuctionError> {
        self.store.announcement(announcement_id).await.map_err(Self::store_error)?;
        self.store.bid_summary(announcement_id).await.map_err(Self::store_error)
    }

    /// The bid currently surfaced as winner: the confirmed one when set,
    /// otherwise the cheapest
    pub async fn presumptive_winner(
        &self,
        announcement_id: AnnouncementId,
    ) -> Result<Option<Bid>, AuctionError> {
        let announcement =
            self.store.announcement(announcement_id).await.map_err(Self::store_error)?;
        let mut bids =
            self.store.bids_for(announcement_id).await.map_err(Self::store_error)?;
        rank_bids(&mut bids);

        Ok(presumptive_winner(&bids, announcement.winning_bid).cloned())
    }

    /// Benchmark `our_price` against the stored active competitor profiles
    pub async fn price_comparisons(
        &self,
        our_price: Decimal,
        costs: &CostBreakdown,
    ) -> Result<Vec<PriceComparison>, AuctionError> {
        let profiles = self.store.active_competitors().await.map_err(Self::store_error)?;
        Ok(compute_comparisons(&profiles, our_price, costs))
    }

    /// Time left until `expiry` as seen from `now`
    pub fn time_remaining(expiry: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
        time_remaining(expiry, now)
    }

    /// Confirm a bid as the winner of its announcement.
    ///
    /// Allowed while the announcement is active and after it expired;
    /// fails with `InvalidReference` when the bid does not belong to the
    /// announcement.
    pub async fn confirm_winner(
        &self,
        announcement_id: AnnouncementId,
        bid_id: BidId,
        now: DateTime<Utc>,
    ) -> Result<Announcement, AuctionError> {
        let mut announcement =
            self.store.announcement(announcement_id).await.map_err(Self::store_error)?;
        let bids = self.store.bids_for(announcement_id).await.map_err(Self::store_error)?;

        let bid = bids.iter().find(|b| b.id == bid_id).ok_or_else(|| {
            AuctionError::invalid_reference(format!(
                "bid {bid_id} does not belong to announcement {announcement_id}"
            ))
        })?;

        let event = announcement.confirm_winner(bid, now)?;
        self.store
            .update_announcement(announcement.clone())
            .await
            .map_err(Self::store_error)?;

        if let Some(event) = event {
            self.notify(event).await;
        }

        info!(announcement = %announcement_id, winner = %bid_id, "winner confirmed");
        Ok(announcement)
    }
}
