//! AuctionCore - Reverse-auction engine for moving requests
//!
//! This crate provides the domain logic of the MoveBid platform: announcement
//! lifecycle management, bid ranking and winner selection, bidding-window
//! countdown evaluation, and the notification events emitted on transitions.

pub mod announcement;
pub mod bid;
pub mod countdown;
pub mod error;
pub mod events;
pub mod types;

pub use announcement::{Announcement, AnnouncementStatus, NewAnnouncement, NotificationState};
pub use bid::{presumptive_winner, rank_bids, summarize, Bid, BidSummary, NewBid};
pub use countdown::{time_remaining, TimeRemaining};
pub use error::AuctionError;
pub use events::{EventKind, NotificationEvent};

// Re-export commonly used types
pub use types::{AnnouncementId, ApartmentSize, BidId, Locale, LocalizedText};

// Result type alias
pub type Result<T> = std::result::Result<T, AuctionError>;
