//! Storage trait for announcements, bids, and competitor profiles

use crate::error::Result;
use auction_core::{Announcement, AnnouncementId, Bid, BidSummary};
use chrono::{DateTime, Utc};
use pricing_engine::CompetitorProfile;

/// Abstract trait for announcement storage backends
#[async_trait::async_trait]
pub trait AnnouncementStore: Send + Sync {
    /// Insert a newly created announcement
    async fn insert_announcement(&self, announcement: Announcement) -> Result<()>;

    /// Load an announcement by id
    async fn announcement(&self, id: AnnouncementId) -> Result<Announcement>;

    /// Replace an existing announcement as a single atomic write
    async fn update_announcement(&self, announcement: Announcement) -> Result<()>;

    /// Insert a bid, re-checking under the write lock that the parent
    /// announcement still accepts bids at `now`. This is where a race
    /// between a stale client read and the window closing is resolved.
    async fn insert_bid(&self, bid: Bid, now: DateTime<Utc>) -> Result<Bid>;

    /// All bids for an announcement, in insertion order
    async fn bids_for(&self, announcement_id: AnnouncementId) -> Result<Vec<Bid>>;

    /// Cached bid aggregate; `None` means no bids yet. The cache entry is
    /// invalidated whenever a new bid lands.
    async fn bid_summary(&self, announcement_id: AnnouncementId) -> Result<Option<BidSummary>>;

    /// Announcements whose stored status is still `Active` (sweep feed)
    async fn active_announcements(&self) -> Result<Vec<Announcement>>;

    /// Announcements whose stored status is `Completed` (review-request feed)
    async fn completed_announcements(&self) -> Result<Vec<Announcement>>;

    /// Active competitor profiles, sorted by name for deterministic output
    async fn active_competitors(&self) -> Result<Vec<CompetitorProfile>>;

    /// Insert or replace a competitor profile, keyed by name
    async fn upsert_competitor(&self, profile: CompetitorProfile) -> Result<()>;
}
