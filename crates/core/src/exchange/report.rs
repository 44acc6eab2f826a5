//! Rendering of calculation results for display.

use billrate_shared::Currency;
use rust_decimal::Decimal;

use super::types::{BreakdownEntry, CalculationResult};
use crate::currency::CurrencyService;

/// Shown instead of breakdown lines when no bills were entered.
pub const EMPTY_MESSAGE: &str = "No bills entered. Add some bills above to see the calculation.";

/// Formats an amount with thousands separators and two decimals.
///
/// # Example
///
/// ```
/// use billrate_core::exchange::report::format_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_amount(dec!(19750)), "19,750.00");
/// assert_eq!(format_amount(dec!(-1234567.891)), "-1,234,567.89");
/// ```
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    let rounded = CurrencyService::round(value);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{fraction}")
}

/// Formats an amount prefixed with the currency symbol, e.g. `Rs 9,500.00`.
#[must_use]
pub fn format_currency(currency: Currency, value: Decimal) -> String {
    format!("{} {}", currency.symbol(), format_amount(value))
}

/// Renders breakdowns as display lines for one currency pair.
#[derive(Debug, Clone, Copy)]
pub struct ReportFormatter {
    base: Currency,
    quote: Currency,
}

impl ReportFormatter {
    /// Creates a formatter for bills in `base` valued in `quote`.
    #[must_use]
    pub const fn new(base: Currency, quote: Currency) -> Self {
        Self { base, quote }
    }

    /// `$50 x 2 @ Rs 97.50 = Rs 9,750.00`
    #[must_use]
    pub fn entry_line(&self, entry: &BreakdownEntry) -> String {
        format!(
            "{}{} x {} @ {} {:.2} = {}",
            self.base.symbol(),
            entry.denomination,
            entry.count,
            self.quote.symbol(),
            entry.effective_rate,
            format_currency(self.quote, entry.subtotal)
        )
    }

    /// `TOTAL = Rs 19,750.00`
    #[must_use]
    pub fn total_line(&self, total: Decimal) -> String {
        format!("TOTAL = {}", format_currency(self.quote, total))
    }

    /// All display lines for a result, total last.
    #[must_use]
    pub fn render(&self, result: &CalculationResult) -> Vec<String> {
        let mut lines = Vec::with_capacity(result.breakdown.len() + 1);
        if result.is_empty() {
            lines.push(EMPTY_MESSAGE.to_string());
        } else {
            lines.extend(result.breakdown.iter().map(|entry| self.entry_line(entry)));
        }
        lines.push(self.total_line(result.total));
        lines
    }
}
