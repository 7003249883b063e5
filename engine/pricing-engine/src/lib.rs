//! PricingEngine - Competitor price benchmarking
//!
//! This crate computes how the platform's reference price compares against
//! known competitor pricing formulas. Each competitor is modeled as a set of
//! multipliers over a three-part cost breakdown; the result is one
//! tax-inclusive comparison per active competitor.

pub mod calculator;
pub mod types;

pub use calculator::{average_savings, compute_comparisons, max_savings};
pub use types::{CompetitorProfile, CostBreakdown, PriceComparison};
