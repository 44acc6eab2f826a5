//! Coercion of raw field text into bill counts and rates.
//!
//! Input never fails: text that does not start with a number falls back to
//! a default, and numbers are clamped into their allowed range.

use std::str::FromStr;

use billrate_shared::Denomination;
use rust_decimal::Decimal;

use super::types::{BillCounts, DEFAULT_BASE_RATE, MAX_BILL_COUNT, RateConfiguration};
use crate::currency::CurrencyService;

/// Largest rate accepted in a rate field (99,999).
pub const MAX_RATE: Decimal = Decimal::from_parts(99_999, 0, 0, false, 0);

/// Parses a bill count.
///
/// Reads the leading integer (`"12abc"` is 12), treats anything else as 0,
/// and clamps the result to `0..=MAX_BILL_COUNT`.
#[must_use]
pub fn parse_bill_count(raw: &str) -> u32 {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    // Overlong digit strings are far above the cap anyway.
    digits[..end]
        .parse::<u32>()
        .map_or(MAX_BILL_COUNT, |count| count.min(MAX_BILL_COUNT))
}

/// Parses the leading decimal number of a field, if any.
///
/// Accepts an optional sign, digits and a fractional part (`"97.5 Rs"` is
/// 97.5). Returns `None` when the text does not start with a number.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let text = raw.trim();
    let bytes = text.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let mut end = sign_len;
    let mut digits = 0;
    let mut seen_point = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return None;
    }
    let (sign, body) = text[..end].split_at(sign_len);
    let sign = if sign == "-" { "-" } else { "" };
    let body = body.trim_end_matches('.');
    let number = if body.starts_with('.') {
        format!("{sign}0{body}")
    } else {
        format!("{sign}{body}")
    };
    // Well-formed digit runs too long for a decimal saturate.
    Some(Decimal::from_str(&number).unwrap_or(if sign == "-" {
        Decimal::MIN
    } else {
        Decimal::MAX
    }))
}

/// Clamps a rate into `0..=MAX_RATE` and rounds it to cents.
#[must_use]
pub fn sanitize_rate(rate: Decimal) -> Decimal {
    CurrencyService::round(rate.clamp(Decimal::ZERO, MAX_RATE))
}

/// Parses the base rate field.
///
/// Missing, non-numeric and zero values fall back to `DEFAULT_BASE_RATE`.
#[must_use]
pub fn parse_base_rate(raw: &str) -> Decimal {
    match parse_decimal(raw) {
        Some(rate) if !rate.is_zero() => sanitize_rate(rate),
        _ => DEFAULT_BASE_RATE,
    }
}

/// Parses a deduction field. Missing and non-numeric values are 0.00.
#[must_use]
pub fn parse_deduction(raw: &str) -> Decimal {
    parse_decimal(raw).map_or(Decimal::ZERO, sanitize_rate)
}

/// Builds bill counts from raw `(denomination, text)` fields.
pub fn bill_counts_from_fields<'a, I>(fields: I) -> BillCounts
where
    I: IntoIterator<Item = (Denomination, &'a str)>,
{
    fields
        .into_iter()
        .map(|(denomination, raw)| (denomination, parse_bill_count(raw)))
        .collect()
}

/// Builds a rate configuration from the raw base rate and deduction fields.
///
/// A deduction field for the 100 bill is ignored.
pub fn rate_configuration_from_fields<'a, I>(base_rate: &str, deductions: I) -> RateConfiguration
where
    I: IntoIterator<Item = (Denomination, &'a str)>,
{
    RateConfiguration::from_parts(
        parse_base_rate(base_rate),
        deductions
            .into_iter()
            .map(|(denomination, raw)| (denomination, parse_deduction(raw))),
    )
}
