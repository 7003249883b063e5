//! Bid records, ranking, and winner selection

use crate::error::AuctionError;
use crate::types::{AnnouncementId, BidId};
use crate::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input for submitting a bid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBid {
    pub company_name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub price: Decimal,
    pub notes: Option<String>,
}

/// A company's price offer against an announcement.
///
/// Bids are immutable once created; a price correction is a new bid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bid {
    pub id: BidId,
    pub announcement_id: AnnouncementId,
    pub company_name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub price: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Bid {
    /// Validate `input` and create a bid against `announcement_id`.
    ///
    /// Whether the announcement still accepts bids is checked at write time
    /// by the store, not here.
    pub fn create(
        announcement_id: AnnouncementId,
        input: NewBid,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        if input.company_name.trim().is_empty() {
            return Err(AuctionError::validation("company name is required"));
        }
        if !input.contact_email.contains('@') {
            return Err(AuctionError::validation(format!(
                "contact email is invalid: {}",
                input.contact_email
            )));
        }
        if input.price <= Decimal::ZERO {
            return Err(AuctionError::validation(format!(
                "bid price must be positive, got {}",
                input.price
            )));
        }

        Ok(Self {
            id: BidId::new(),
            announcement_id,
            company_name: input.company_name,
            contact_email: input.contact_email,
            phone: input.phone,
            price: input.price,
            notes: input.notes,
            created_at: now,
        })
    }
}

/// Rank bids cheapest first.
///
/// Equal prices rank by earlier submission time, with the bid id as a final
/// deterministic key, so the ranking is a total order.
pub fn rank_bids(bids: &mut [Bid]) {
    bids.sort_by(|a, b| {
        a.price
            .cmp(&b.price)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// The bid surfaced as winner for display and completion.
///
/// An explicitly confirmed bid always takes precedence over the rank-one
/// bid; without a confirmation the cheapest bid is presumptive.
pub fn presumptive_winner<'a>(ranked: &'a [Bid], confirmed: Option<BidId>) -> Option<&'a Bid> {
    if let Some(winner_id) = confirmed {
        if let Some(bid) = ranked.iter().find(|b| b.id == winner_id) {
            return Some(bid);
        }
    }
    ranked.first()
}

/// Aggregate over an announcement's bids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidSummary {
    pub count: usize,
    pub lowest: Decimal,
    pub highest: Decimal,
}

/// Summarize a bid set; `None` is the "no bids yet" sentinel, so callers
/// never confuse an empty auction with zero prices.
pub fn summarize(bids: &[Bid]) -> Option<BidSummary> {
    let first = bids.first()?;
    let mut lowest = first.price;
    let mut highest = first.price;

    for bid in &bids[1..] {
        lowest = lowest.min(bid.price);
        highest = highest.max(bid.price);
    }

    Some(BidSummary { count: bids.len(), lowest, highest })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn bid_at(announcement_id: AnnouncementId, price: i64, offset_secs: i64) -> Bid {
        let base = Utc::now();
        Bid::create(
            announcement_id,
            NewBid {
                company_name: format!("Mover {price}"),
                contact_email: "offers@mover.example".to_string(),
                phone: None,
                price: Decimal::from(price),
                notes: None,
            },
            base + Duration::seconds(offset_secs),
        )
        .unwrap()
    }

    #[test]
    fn test_ranking_cheapest_first() {
        let a = AnnouncementId::new();
        let mut bids = vec![bid_at(a, 500, 0), bid_at(a, 300, 1), bid_at(a, 450, 2)];

        rank_bids(&mut bids);

        let prices: Vec<Decimal> = bids.iter().map(|b| b.price).collect();
        assert_eq!(prices, vec![Decimal::from(300), Decimal::from(450), Decimal::from(500)]);
    }

    #[test]
    fn test_ranking_ties_by_submission_time() {
        let a = AnnouncementId::new();
        let later = bid_at(a, 400, 10);
        let earlier = bid_at(a, 400, 5);
        let mut bids = vec![later.clone(), earlier.clone()];

        rank_bids(&mut bids);

        assert_eq!(bids[0].id, earlier.id);
        assert_eq!(bids[1].id, later.id);
    }

    #[test]
    fn test_presumptive_winner_is_first_ranked() {
        let a = AnnouncementId::new();
        let mut bids = vec![bid_at(a, 500, 0), bid_at(a, 300, 1)];
        rank_bids(&mut bids);

        let winner = presumptive_winner(&bids, None).unwrap();
        assert_eq!(winner.price, Decimal::from(300));
    }

    #[test]
    fn test_confirmed_winner_takes_precedence() {
        let a = AnnouncementId::new();
        let mut bids = vec![bid_at(a, 500, 0), bid_at(a, 300, 1)];
        rank_bids(&mut bids);
        let expensive = bids.iter().find(|b| b.price == Decimal::from(500)).unwrap().id;

        let winner = presumptive_winner(&bids, Some(expensive)).unwrap();
        assert_eq!(winner.id, expensive);
    }

    #[test]
    fn test_summary() {
        let a = AnnouncementId::new();
        let bids = vec![bid_at(a, 500, 0), bid_at(a, 300, 1), bid_at(a, 450, 2)];

        let summary = summarize(&bids).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.lowest, Decimal::from(300));
        assert_eq!(summary.highest, Decimal::from(500));
    }

    #[test]
    fn test_summary_no_bids_sentinel() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn test_bid_validation() {
        let a = AnnouncementId::new();
        let valid = NewBid {
            company_name: "Schnell Umzug GmbH".to_string(),
            contact_email: "kontakt@schnell.example".to_string(),
            phone: Some("+49 30 1234567".to_string()),
            price: Decimal::new(45000, 2),
            notes: None,
        };

        assert!(Bid::create(a, valid.clone(), Utc::now()).is_ok());

        let blank_name = NewBid { company_name: "  ".to_string(), ..valid.clone() };
        assert!(matches!(
            Bid::create(a, blank_name, Utc::now()),
            Err(AuctionError::Validation(_))
        ));

        let bad_email = NewBid { contact_email: "not-an-email".to_string(), ..valid.clone() };
        assert!(matches!(Bid::create(a, bad_email, Utc::now()), Err(AuctionError::Validation(_))));

        let zero_price = NewBid { price: Decimal::ZERO, ..valid };
        assert!(matches!(
            Bid::create(a, zero_price, Utc::now()),
            Err(AuctionError::Validation(_))
        ));
    }
}
