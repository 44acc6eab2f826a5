//! Exchange calculation data types.

use billrate_shared::{AppError, AppResult, Denomination};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::CurrencyService;

/// Base rate used when none has been configured (100.00).
pub const DEFAULT_BASE_RATE: Decimal = Decimal::ONE_HUNDRED;

/// Largest number of bills accepted per denomination.
pub const MAX_BILL_COUNT: u32 = 9999;

/// Rate settings: the base rate plus one deduction per smaller bill.
///
/// The 100 bill always has a zero deduction. Every other denomination always
/// has an entry, zero unless configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateConfiguration {
    base_rate: Decimal,
    deductions: [Decimal; Denomination::ALL.len()],
}

impl Default for RateConfiguration {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_RATE)
    }
}

impl RateConfiguration {
    /// Creates a configuration with the given base rate and no deductions.
    ///
    /// Negative rates are floored at zero.
    #[must_use]
    pub fn new(base_rate: Decimal) -> Self {
        Self {
            base_rate: non_negative(base_rate),
            deductions: [Decimal::ZERO; Denomination::ALL.len()],
        }
    }

    /// Creates a configuration from a base rate and deduction pairs.
    ///
    /// Entries for the 100 bill are ignored; negative values are floored at
    /// zero; denominations not listed keep a zero deduction.
    #[must_use]
    pub fn from_parts<I>(base_rate: Decimal, deductions: I) -> Self
    where
        I: IntoIterator<Item = (Denomination, Decimal)>,
    {
        let mut config = Self::new(base_rate);
        for (denomination, amount) in deductions {
            if !denomination.is_base() {
                config.deductions[denomination.index()] = non_negative(amount);
            }
        }
        config
    }

    /// The rate applied to the 100 bill.
    #[must_use]
    pub fn base_rate(&self) -> Decimal {
        self.base_rate
    }

    /// Replaces the base rate. Negative rates are floored at zero.
    pub fn set_base_rate(&mut self, rate: Decimal) {
        self.base_rate = non_negative(rate);
    }

    /// Deduction for a denomination. Always zero for the 100 bill.
    #[must_use]
    pub fn deduction(&self, denomination: Denomination) -> Decimal {
        self.deductions[denomination.index()]
    }

    /// Sets the deduction for a smaller bill.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for the 100 bill, whose deduction is
    /// fixed at zero.
    pub fn set_deduction(&mut self, denomination: Denomination, amount: Decimal) -> AppResult<()> {
        if denomination.is_base() {
            return Err(AppError::Validation(format!(
                "deduction for the {denomination} bill is fixed at 0.00"
            )));
        }
        self.deductions[denomination.index()] = non_negative(amount);
        Ok(())
    }

    /// Deductions for every denomination except the 100 bill, highest first.
    pub fn deductions(&self) -> impl Iterator<Item = (Denomination, Decimal)> + '_ {
        Denomination::DISCOUNTED
            .into_iter()
            .map(|d| (d, self.deduction(d)))
    }
}

fn non_negative(value: Decimal) -> Decimal {
    CurrencyService::round(value.max(Decimal::ZERO))
}

/// Number of bills entered per denomination, each within `0..=MAX_BILL_COUNT`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillCounts {
    counts: [u32; Denomination::ALL.len()],
}

impl BillCounts {
    /// Creates an empty set of counts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for a denomination.
    #[must_use]
    pub fn get(&self, denomination: Denomination) -> u32 {
        self.counts[denomination.index()]
    }

    /// Sets the count for a denomination, clamped to `MAX_BILL_COUNT`.
    pub fn set(&mut self, denomination: Denomination, count: u32) {
        self.counts[denomination.index()] = count.min(MAX_BILL_COUNT);
    }

    /// Builder form of [`BillCounts::set`].
    #[must_use]
    pub fn with(mut self, denomination: Denomination, count: u32) -> Self {
        self.set(denomination, count);
        self
    }

    /// Sets every count back to zero.
    pub fn clear(&mut self) {
        self.counts = [0; Denomination::ALL.len()];
    }

    /// Returns true if no bills have been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|c| *c == 0)
    }

    /// Total number of bills across all denominations.
    #[must_use]
    pub fn total_bills(&self) -> u32 {
        self.counts.iter().sum()
    }
}

impl FromIterator<(Denomination, u32)> for BillCounts {
    fn from_iter<T: IntoIterator<Item = (Denomination, u32)>>(iter: T) -> Self {
        let mut counts = Self::new();
        for (denomination, count) in iter {
            counts.set(denomination, count);
        }
        counts
    }
}

/// One line of a breakdown: a denomination that has at least one bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    /// Bill denomination.
    pub denomination: Denomination,
    /// Number of bills.
    pub count: u32,
    /// Rate applied after the deduction.
    pub effective_rate: Decimal,
    /// effective_rate x denomination x count.
    pub subtotal: Decimal,
}

/// Result of an exchange calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    /// Entries in canonical denomination order, highest first.
    pub breakdown: Vec<BreakdownEntry>,
    /// Sum of all subtotals.
    pub total: Decimal,
}

impl CalculationResult {
    /// A result with no bills and a zero total.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            breakdown: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Returns true if no bills were entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breakdown.is_empty()
    }
}
