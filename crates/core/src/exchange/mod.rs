//! Exchange calculation.
//!
//! This module implements the calculator proper:
//! - Rate configuration and bill count types
//! - Effective rates, subtotals and totals
//! - Coercion of raw field text into counts and rates
//! - Rendering results as display lines

pub mod calculator;
pub mod input;
pub mod report;
pub mod types;

#[cfg(test)]
mod calculator_props;

pub use calculator::ExchangeCalculator;
pub use input::{
    MAX_RATE, bill_counts_from_fields, parse_base_rate, parse_bill_count, parse_deduction,
    rate_configuration_from_fields,
};
pub use report::{EMPTY_MESSAGE, ReportFormatter, format_amount, format_currency};
pub use types::{
    BillCounts, BreakdownEntry, CalculationResult, DEFAULT_BASE_RATE, MAX_BILL_COUNT,
    RateConfiguration,
};
