//! Competitor profiles and comparison results

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named competitor pricing formula, administratively maintained.
///
/// Multipliers scale the corresponding parts of the cost breakdown and are
/// validated upstream; only non-negative values reach the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorProfile {
    pub name: String,
    pub base_multiplier: Decimal,
    pub distance_multiplier: Decimal,
    pub floor_multiplier: Decimal,
    pub active: bool,
}

/// Three-part cost breakdown of a move, externally supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub base: Decimal,
    pub distance: Decimal,
    pub floor: Decimal,
}

/// One competitor's price next to ours, derived fresh per request and
/// never stored. `savings` is negative when the competitor is cheaper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceComparison {
    pub competitor: String,
    pub price_with_tax: Decimal,
    pub savings: Decimal,
    pub savings_percent: Decimal,
}
