//! Property-based tests for currency arithmetic.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::CurrencyService;

/// Strategy to generate arbitrary amounts with up to 4 decimals (-1,000,000 to 1,000,000).
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate two-decimal amounts (0.00 to 99,999.99).
fn cents_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate bill face values.
fn face_value() -> impl Strategy<Value = Decimal> {
    prop::sample::select(vec![1u32, 2, 5, 10, 20, 50, 100]).prop_map(Decimal::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Rounding twice is the same as rounding once.
    #[test]
    fn prop_round_is_idempotent(value in any_amount()) {
        let once = CurrencyService::round(value);
        prop_assert_eq!(CurrencyService::round(once), once);
    }

    /// Rounded values have at most two decimals.
    #[test]
    fn prop_round_has_two_decimals(value in any_amount()) {
        let rounded = CurrencyService::round(value);
        let scaled = rounded * Decimal::ONE_HUNDRED;
        prop_assert_eq!(scaled, scaled.trunc());
    }

    /// Zero quantity always yields zero.
    #[test]
    fn prop_zero_quantity_is_zero(rate in any_amount(), face in face_value()) {
        let result = CurrencyService::multiply(rate, &[face, Decimal::ZERO]);
        prop_assert!(result.is_zero());
    }

    /// Adding then subtracting the same two-decimal amount is lossless.
    #[test]
    fn prop_add_subtract_inverse(a in cents_amount(), b in cents_amount()) {
        let sum = CurrencyService::add(a, b);
        prop_assert_eq!(CurrencyService::subtract(sum, b), a);
    }

    /// For two-decimal rates and integer factors the stepwise product is exact.
    #[test]
    fn prop_multiply_exact_for_cent_rates(
        rate in cents_amount(),
        face in face_value(),
        quantity in 0u32..=9999,
    ) {
        let quantity = Decimal::from(quantity);
        let result = CurrencyService::multiply(rate, &[face, quantity]);
        prop_assert_eq!(result, rate * face * quantity);
    }
}
