//! Property-based tests for settings persistence.

use billrate_shared::Denomination;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::{DEFAULT_SETTINGS_KEY, SettingsStore};
use super::store::{KeyValueStore, MemoryStore};
use crate::exchange::types::RateConfiguration;

/// Strategy to generate two-decimal rates (0.00 to 999,999.99).
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn configuration() -> impl Strategy<Value = RateConfiguration> {
    (rate(), prop::collection::vec(rate(), 6)).prop_map(|(base, deductions)| {
        RateConfiguration::from_parts(base, Denomination::DISCOUNTED.into_iter().zip(deductions))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Saving then loading returns the same configuration.
    #[test]
    fn prop_save_load_round_trip(config in configuration()) {
        let mut store = SettingsStore::new(MemoryStore::new());
        store.save(&config).unwrap();
        prop_assert_eq!(store.load(), Some(config));
    }

    /// Reset always brings back the defaults.
    #[test]
    fn prop_reset_restores_defaults(config in configuration()) {
        let mut store = SettingsStore::new(MemoryStore::new());
        store.save(&config).unwrap();
        store.reset().unwrap();
        prop_assert_eq!(store.load_or_default(), RateConfiguration::default());
    }

    /// Arbitrary text in the slot never panics and never yields negative rates.
    #[test]
    fn prop_arbitrary_snapshot_is_safe(raw in ".*") {
        let mut backend = MemoryStore::new();
        backend.set(DEFAULT_SETTINGS_KEY, &raw).unwrap();
        let config = SettingsStore::new(backend).load_or_default();
        prop_assert!(config.base_rate() >= Decimal::ZERO);
        prop_assert!(config.deductions().all(|(_, d)| d >= Decimal::ZERO));
    }
}
