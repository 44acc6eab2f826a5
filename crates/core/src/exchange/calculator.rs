//! Exchange calculator.
//!
//! Turns bill counts and a rate configuration into a breakdown:
//! - 100 bills are valued at the base rate
//! - smaller bills at the base rate minus their deduction, never below zero
//! - subtotal = effective rate x face value x count, rounded stepwise
//! - total = sum of subtotals

use billrate_shared::Denomination;
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{BillCounts, BreakdownEntry, CalculationResult, RateConfiguration};
use crate::currency::CurrencyService;

/// Exchange calculator.
///
/// Stateless: the same inputs always give the same result.
pub struct ExchangeCalculator;

impl ExchangeCalculator {
    /// Rate applied to one unit of a denomination.
    ///
    /// # Example
    ///
    /// ```
    /// use billrate_core::exchange::{ExchangeCalculator, RateConfiguration};
    /// use billrate_shared::Denomination;
    /// use rust_decimal_macros::dec;
    ///
    /// let config = RateConfiguration::from_parts(dec!(100.00), [(Denomination::Fifty, dec!(2.50))]);
    /// assert_eq!(ExchangeCalculator::effective_rate(Denomination::Hundred, &config), dec!(100.00));
    /// assert_eq!(ExchangeCalculator::effective_rate(Denomination::Fifty, &config), dec!(97.50));
    /// ```
    #[must_use]
    pub fn effective_rate(denomination: Denomination, config: &RateConfiguration) -> Decimal {
        if denomination.is_base() {
            return config.base_rate();
        }
        CurrencyService::subtract(config.base_rate(), config.deduction(denomination))
            .max(Decimal::ZERO)
    }

    /// Value of `count` bills of a denomination at the given rate.
    #[must_use]
    pub fn subtotal(rate: Decimal, denomination: Denomination, count: u32) -> Decimal {
        CurrencyService::multiply(rate, &[denomination.as_decimal(), Decimal::from(count)])
    }

    /// Computes the breakdown and total for a set of bills.
    ///
    /// Denominations with no bills are left out. With no bills at all the
    /// result has an empty breakdown and a zero total.
    #[must_use]
    pub fn compute_breakdown(counts: &BillCounts, config: &RateConfiguration) -> CalculationResult {
        let mut result = CalculationResult::empty();

        for denomination in Denomination::ALL {
            let count = counts.get(denomination);
            if count == 0 {
                continue;
            }

            let effective_rate = Self::effective_rate(denomination, config);
            let subtotal = Self::subtotal(effective_rate, denomination, count);
            debug!(
                %denomination,
                count,
                %effective_rate,
                %subtotal,
                "{effective_rate} x {denomination} x {count} = {subtotal}"
            );

            result.breakdown.push(BreakdownEntry {
                denomination,
                count,
                effective_rate,
                subtotal,
            });
            result.total = CurrencyService::add(result.total, subtotal);
        }

        debug!(
            total = %result.total,
            base_rate = %config.base_rate(),
            entries = result.breakdown.len(),
            "exchange calculated"
        );
        result
    }
}
