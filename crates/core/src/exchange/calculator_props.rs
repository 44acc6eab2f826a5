//! Property-based tests for the exchange calculator.

use billrate_shared::Denomination;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::ExchangeCalculator;
use super::types::{BillCounts, RateConfiguration};
use crate::currency::CurrencyService;

/// Strategy to generate rates (0.00 to 99,999.99).
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn denomination() -> impl Strategy<Value = Denomination> {
    prop::sample::select(Denomination::ALL.to_vec())
}

/// Strategy to generate a full configuration, deductions possibly above the base rate.
fn configuration() -> impl Strategy<Value = RateConfiguration> {
    (rate(), prop::collection::vec(rate(), 6)).prop_map(|(base, deductions)| {
        RateConfiguration::from_parts(base, Denomination::DISCOUNTED.into_iter().zip(deductions))
    })
}

fn bill_counts() -> impl Strategy<Value = BillCounts> {
    prop::collection::vec(0u32..=9999, 7).prop_map(|counts| {
        Denomination::ALL.into_iter().zip(counts).collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The 100 bill always gets the base rate.
    #[test]
    fn prop_hundred_gets_base_rate(config in configuration()) {
        prop_assert_eq!(
            ExchangeCalculator::effective_rate(Denomination::Hundred, &config),
            config.base_rate()
        );
    }

    /// Effective rates are never negative.
    #[test]
    fn prop_effective_rate_non_negative(config in configuration(), d in denomination()) {
        prop_assert!(ExchangeCalculator::effective_rate(d, &config) >= Decimal::ZERO);
    }

    /// Zero bills give a zero subtotal.
    #[test]
    fn prop_zero_count_zero_subtotal(r in rate(), d in denomination()) {
        prop_assert!(ExchangeCalculator::subtotal(r, d, 0).is_zero());
    }

    /// Breakdown lists exactly the denominations with bills, in canonical order.
    #[test]
    fn prop_breakdown_matches_counts(counts in bill_counts(), config in configuration()) {
        let result = ExchangeCalculator::compute_breakdown(&counts, &config);
        let expected: Vec<Denomination> = Denomination::ALL
            .into_iter()
            .filter(|d| counts.get(*d) > 0)
            .collect();
        let actual: Vec<Denomination> = result.breakdown.iter().map(|e| e.denomination).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(result.is_empty(), counts.is_empty());
    }

    /// Total is the sum of the subtotals.
    #[test]
    fn prop_total_is_sum_of_subtotals(counts in bill_counts(), config in configuration()) {
        let result = ExchangeCalculator::compute_breakdown(&counts, &config);
        let sum = result
            .breakdown
            .iter()
            .fold(Decimal::ZERO, |acc, e| CurrencyService::add(acc, e.subtotal));
        prop_assert_eq!(result.total, sum);
        prop_assert!(result.total >= Decimal::ZERO);
    }
}
