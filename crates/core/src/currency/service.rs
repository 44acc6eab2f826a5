//! Currency arithmetic on two-decimal amounts.
//!
//! Every operation works on integer minor units (1/100 of the currency) and
//! converts back at the end, so results never drift the way binary floating
//! point does. Midpoints round away from zero.
//!
//! All operations are total: they saturate instead of overflowing and never
//! panic for any `Decimal` input.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Number of minor units in one currency unit.
const MINOR_UNITS: Decimal = Decimal::ONE_HUNDRED;

/// Decimal places of a currency amount.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Commercial rounding: 0.005 becomes 0.01, -0.005 becomes -0.01.
const STRATEGY: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Currency service for arithmetic on monetary amounts.
pub struct CurrencyService;

impl CurrencyService {
    /// Round a value to the nearest minor unit.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use billrate_core::currency::CurrencyService;
    ///
    /// assert_eq!(CurrencyService::round(dec!(95.005)), dec!(95.01));
    /// assert_eq!(CurrencyService::round(dec!(2.344)), dec!(2.34));
    /// ```
    #[must_use]
    pub fn round(value: Decimal) -> Decimal {
        value.round_dp_with_strategy(CURRENCY_DECIMALS, STRATEGY)
    }

    /// Add two amounts.
    #[must_use]
    pub fn add(a: Decimal, b: Decimal) -> Decimal {
        Self::from_minor(Self::to_minor(a).saturating_add(Self::to_minor(b)))
    }

    /// Subtract `b` from `a`.
    ///
    /// The result may be negative; callers clamp where the domain requires.
    #[must_use]
    pub fn subtract(a: Decimal, b: Decimal) -> Decimal {
        Self::from_minor(Self::to_minor(a).saturating_sub(Self::to_minor(b)))
    }

    /// Multiply a rate by a sequence of factors.
    ///
    /// The rate is converted to minor units first, then each factor is
    /// applied in order with the running product rounded to a whole minor
    /// unit after every step. The result is therefore order dependent and
    /// can differ at the cent level from rounding the exact product once.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use billrate_core::currency::CurrencyService;
    ///
    /// // 95.005 becomes 9501 minor units before any multiplication.
    /// let result = CurrencyService::multiply(dec!(95.005), &[dec!(100), dec!(3)]);
    /// assert_eq!(result, dec!(28503.00));
    /// ```
    #[must_use]
    pub fn multiply(rate: Decimal, factors: &[Decimal]) -> Decimal {
        let minor = factors.iter().fold(Self::to_minor(rate), |acc, factor| {
            acc.saturating_mul(*factor).round_dp_with_strategy(0, STRATEGY)
        });
        Self::from_minor(minor)
    }

    /// Convert an amount into whole minor units.
    #[must_use]
    pub fn to_minor(value: Decimal) -> Decimal {
        Self::round(value)
            .saturating_mul(MINOR_UNITS)
            .round_dp_with_strategy(0, STRATEGY)
    }

    /// Convert whole minor units back into an amount.
    #[must_use]
    pub fn from_minor(minor: Decimal) -> Decimal {
        Self::round(minor / MINOR_UNITS)
    }
}
