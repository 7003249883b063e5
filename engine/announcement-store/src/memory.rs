//! In-memory storage backend

use crate::error::{Result, StoreError};
use crate::store::AnnouncementStore;
use auction_core::{summarize, Announcement, AnnouncementId, AnnouncementStatus, Bid, BidSummary};
use chrono::{DateTime, Utc};
use pricing_engine::CompetitorProfile;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory announcement store.
///
/// Lock order is announcements → bids → summary cache; every method that
/// takes more than one lock follows it.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    announcements: RwLock<HashMap<AnnouncementId, Announcement>>,
    bids: RwLock<HashMap<AnnouncementId, Vec<Bid>>>,
    summary_cache: RwLock<HashMap<AnnouncementId, BidSummary>>,
    competitors: RwLock<HashMap<String, CompetitorProfile>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AnnouncementStore for InMemoryStore {
    async fn insert_announcement(&self, announcement: Announcement) -> Result<()> {
        let mut announcements = self.announcements.write().await;
        if announcements.contains_key(&announcement.id) {
            return Err(StoreError::already_exists(format!(
                "announcement {}",
                announcement.id
            )));
        }
        debug!("storing announcement {}", announcement.id);
        announcements.insert(announcement.id, announcement);
        Ok(())
    }

    async fn announcement(&self, id: AnnouncementId) -> Result<Announcement> {
        let announcements = self.announcements.read().await;
        announcements
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("announcement {id}")))
    }

    async fn update_announcement(&self, announcement: Announcement) -> Result<()> {
        let mut announcements = self.announcements.write().await;
        match announcements.get_mut(&announcement.id) {
            Some(stored) => {
                *stored = announcement;
                Ok(())
            }
            None => Err(StoreError::not_found(format!("announcement {}", announcement.id))),
        }
    }

    async fn insert_bid(&self, bid: Bid, now: DateTime<Utc>) -> Result<Bid> {
        let announcements = self.announcements.read().await;
        let announcement = announcements
            .get(&bid.announcement_id)
            .ok_or_else(|| StoreError::not_found(format!("announcement {}", bid.announcement_id)))?;

        // Write-time guard: whatever the client saw earlier, the window
        // must still be open when the bid actually lands.
        if !announcement.accepts_bids(now) {
            return Err(StoreError::window_closed(format!(
                "announcement {} no longer accepts bids",
                announcement.id
            )));
        }

        let mut bids = self.bids.write().await;
        bids.entry(bid.announcement_id).or_default().push(bid.clone());

        let mut cache = self.summary_cache.write().await;
        if cache.remove(&bid.announcement_id).is_some() {
            debug!("invalidated bid summary cache for {}", bid.announcement_id);
        }

        Ok(bid)
    }

    async fn bids_for(&self, announcement_id: AnnouncementId) -> Result<Vec<Bid>> {
        let bids = self.bids.read().await;
        Ok(bids.get(&announcement_id).cloned().unwrap_or_default())
    }

    async fn bid_summary(&self, announcement_id: AnnouncementId) -> Result<Option<BidSummary>> {
        {
            let cache = self.summary_cache.read().await;
            if let Some(summary) = cache.get(&announcement_id) {
                debug!("bid summary cache hit for {announcement_id}");
                return Ok(Some(*summary));
            }
        }

        let bids = self.bids.read().await;
        let summary = summarize(bids.get(&announcement_id).map(Vec::as_slice).unwrap_or(&[]));

        if let Some(summary) = summary {
            let mut cache = self.summary_cache.write().await;
            cache.insert(announcement_id, summary);
        }

        Ok(summary)
    }

    async fn active_announcements(&self) -> Result<Vec<Announcement>> {
        let announcements = self.announcements.read().await;
        Ok(announcements
            .values()
            .filter(|a| a.status == AnnouncementStatus::Active)
            .cloned()
            .collect())
    }

    async fn completed_announcements(&self) -> Result<Vec<Announcement>> {
        let announcements = self.announcements.read().await;
        Ok(announcements
            .values()
            .filter(|a| a.status == AnnouncementStatus::Completed)
            .cloned()
            .collect())
    }

    async fn active_competitors(&self) -> Result<Vec<CompetitorProfile>> {
        let competitors = self.competitors.read().await;
        let mut active: Vec<CompetitorProfile> =
            competitors.values().filter(|c| c.active).cloned().collect();
        active.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(active)
    }

    async fn upsert_competitor(&self, profile: CompetitorProfile) -> Result<()> {
        let mut competitors = self.competitors.write().await;
        competitors.insert(profile.name.clone(), profile);
        Ok(())
    }
}
