//! Price comparison computation

use crate::types::{CompetitorProfile, CostBreakdown, PriceComparison};
use rust_decimal::Decimal;

/// VAT applied on top of net competitor prices
fn tax_multiplier() -> Decimal {
    Decimal::new(119, 2)
}

/// Compute one comparison per active competitor, in input order.
///
/// Competitor net price is `base·base_multiplier + distance·distance_multiplier
/// + floor·floor_multiplier`, made tax-inclusive before comparing against
/// `our_price` (itself tax-inclusive). An empty or all-inactive competitor
/// set yields an empty list; callers render that as "no data", not as a
/// failure.
pub fn compute_comparisons(
    profiles: &[CompetitorProfile],
    our_price: Decimal,
    costs: &CostBreakdown,
) -> Vec<PriceComparison> {
    let hundred = Decimal::from(100);

    profiles
        .iter()
        .filter(|profile| profile.active)
        .map(|profile| {
            let net = costs.base * profile.base_multiplier
                + costs.distance * profile.distance_multiplier
                + costs.floor * profile.floor_multiplier;
            let price_with_tax = net * tax_multiplier();
            let savings = price_with_tax - our_price;
            let savings_percent = if price_with_tax.is_zero() {
                Decimal::ZERO
            } else {
                savings / price_with_tax * hundred
            };

            PriceComparison {
                competitor: profile.name.clone(),
                price_with_tax,
                savings,
                savings_percent,
            }
        })
        .collect()
}

/// The comparison with the largest savings; the first occurrence wins ties
pub fn max_savings(comparisons: &[PriceComparison]) -> Option<&PriceComparison> {
    let mut best: Option<&PriceComparison> = None;
    for comparison in comparisons {
        if best.map_or(true, |b| comparison.savings > b.savings) {
            best = Some(comparison);
        }
    }
    best
}

/// Mean savings across comparisons; an empty input averages to zero
pub fn average_savings(comparisons: &[PriceComparison]) -> Decimal {
    if comparisons.is_empty() {
        return Decimal::ZERO;
    }
    let total: Decimal = comparisons.iter().map(|c| c.savings).sum();
    total / Decimal::from(comparisons.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, base: Decimal, distance: Decimal, floor: Decimal) -> CompetitorProfile {
        CompetitorProfile {
            name: name.to_string(),
            base_multiplier: base,
            distance_multiplier: distance,
            floor_multiplier: floor,
            active: true,
        }
    }

    fn dec(mantissa: i64, scale: u32) -> Decimal {
        Decimal::new(mantissa, scale)
    }

    #[test]
    fn one_comparison_per_active_competitor() {
        let mut inactive = profile("Dormant Movers", dec(1, 0), dec(1, 0), dec(1, 0));
        inactive.active = false;
        let profiles = vec![
            profile("CityMove", dec(12, 1), dec(1, 0), dec(1, 0)),
            inactive,
            profile("TransEuro", dec(14, 1), dec(1, 0), dec(1, 0)),
        ];
        let costs = CostBreakdown { base: dec(100, 0), distance: dec(50, 0), floor: dec(20, 0) };

        let comparisons = compute_comparisons(&profiles, dec(200, 0), &costs);

        assert_eq!(comparisons.len(), 2);
        assert_eq!(comparisons[0].competitor, "CityMove");
        assert_eq!(comparisons[1].competitor, "TransEuro");
    }

    #[test]
    fn empty_competitor_set_yields_empty_list() {
        let costs = CostBreakdown { base: dec(100, 0), distance: dec(50, 0), floor: dec(20, 0) };

        let comparisons = compute_comparisons(&[], dec(200, 0), &costs);

        assert!(comparisons.is_empty());
        assert_eq!(average_savings(&comparisons), Decimal::ZERO);
        assert!(max_savings(&comparisons).is_none());
    }

    #[test]
    fn worked_scenario() {
        // base 449 × 1.3 + 120 × 1.1 + 60 × 1.2 = 787.7 net, × 1.19 tax
        let profiles = vec![profile("UmzugProfi", dec(13, 1), dec(11, 1), dec(12, 1))];
        let costs = CostBreakdown { base: dec(449, 0), distance: dec(120, 0), floor: dec(60, 0) };
        let our_price = dec(71211, 2);

        let comparisons = compute_comparisons(&profiles, our_price, &costs);
        let comparison = &comparisons[0];

        assert_eq!(comparison.price_with_tax, dec(937_363, 3));
        assert_eq!(comparison.savings, dec(225_253, 3));
        assert_eq!(comparison.savings_percent.round_dp(2), dec(2403, 2));
    }

    #[test]
    fn negative_savings_when_competitor_is_cheaper() {
        let profiles = vec![profile("Billig & Co", dec(5, 1), dec(5, 1), dec(5, 1))];
        let costs = CostBreakdown { base: dec(100, 0), distance: dec(40, 0), floor: dec(10, 0) };

        // competitor: 75 net, 89.25 gross, well under our 200
        let comparisons = compute_comparisons(&profiles, dec(200, 0), &costs);

        assert_eq!(comparisons[0].savings, dec(-11075, 2));
        assert!(comparisons[0].savings_percent < Decimal::ZERO);
    }

    #[test]
    fn multiplier_increase_raises_competitor_price() {
        let costs = CostBreakdown { base: dec(300, 0), distance: dec(80, 0), floor: dec(40, 0) };
        let our_price = dec(500, 0);

        let low = compute_comparisons(&[profile("A", dec(10, 1), dec(10, 1), dec(10, 1))], our_price, &costs);
        let base_up = compute_comparisons(&[profile("A", dec(11, 1), dec(10, 1), dec(10, 1))], our_price, &costs);
        let distance_up = compute_comparisons(&[profile("A", dec(10, 1), dec(11, 1), dec(10, 1))], our_price, &costs);
        let floor_up = compute_comparisons(&[profile("A", dec(10, 1), dec(10, 1), dec(11, 1))], our_price, &costs);

        assert!(base_up[0].price_with_tax > low[0].price_with_tax);
        assert!(distance_up[0].price_with_tax > low[0].price_with_tax);
        assert!(floor_up[0].price_with_tax > low[0].price_with_tax);
    }

    #[test]
    fn max_savings_keeps_first_on_tie() {
        let costs = CostBreakdown { base: dec(100, 0), distance: dec(0, 0), floor: dec(0, 0) };
        let profiles = vec![
            profile("First", dec(2, 0), dec(1, 0), dec(1, 0)),
            profile("Twin", dec(2, 0), dec(1, 0), dec(1, 0)),
            profile("Cheaper", dec(1, 0), dec(1, 0), dec(1, 0)),
        ];

        let comparisons = compute_comparisons(&profiles, dec(100, 0), &costs);
        let best = max_savings(&comparisons).unwrap();

        assert_eq!(best.competitor, "First");
    }

    #[test]
    fn average_savings_is_arithmetic_mean() {
        let costs = CostBreakdown { base: dec(100, 0), distance: dec(0, 0), floor: dec(0, 0) };
        let profiles = vec![
            profile("A", dec(1, 0), dec(0, 0), dec(0, 0)), // 119 gross
            profile("B", dec(3, 0), dec(0, 0), dec(0, 0)), // 357 gross
        ];

        let comparisons = compute_comparisons(&profiles, dec(100, 0), &costs);

        // savings 19 and 257, mean 138
        assert_eq!(average_savings(&comparisons), dec(138, 0));
    }

    #[test]
    fn zero_price_profile_has_zero_percent() {
        let costs = CostBreakdown { base: dec(100, 0), distance: dec(50, 0), floor: dec(20, 0) };
        let profiles = vec![profile("Ghost", dec(0, 0), dec(0, 0), dec(0, 0))];

        let comparisons = compute_comparisons(&profiles, dec(200, 0), &costs);

        assert_eq!(comparisons[0].price_with_tax, Decimal::ZERO);
        assert_eq!(comparisons[0].savings, dec(-200, 0));
        assert_eq!(comparisons[0].savings_percent, Decimal::ZERO);
    }
}
