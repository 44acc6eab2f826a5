//! Settings store for the rate configuration.
//!
//! The configuration is kept as a single JSON snapshot under one key:
//!
//! ```json
//! {"baseRate": 100.0, "deduction_50": 2.5, "deduction_20": 0.0, ...}
//! ```
//!
//! Saving replaces the whole snapshot. Loading never fails: an absent or
//! unparseable snapshot yields `None`, and inside a well-formed snapshot each
//! missing or non-numeric field falls back to its default on its own.

use std::str::FromStr;

use billrate_shared::{AppResult, Denomination};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::store::KeyValueStore;
use crate::exchange::input::parse_decimal;
use crate::exchange::types::{DEFAULT_BASE_RATE, RateConfiguration};

/// Key the snapshot is stored under unless configured otherwise.
pub const DEFAULT_SETTINGS_KEY: &str = "exchangeSettings";

/// Snapshot field holding the base rate.
const BASE_RATE_FIELD: &str = "baseRate";

/// Amount written as a plain JSON number.
#[derive(Serialize)]
struct JsonAmount(#[serde(with = "rust_decimal::serde::float")] Decimal);

/// Persists a [`RateConfiguration`] in a key-value backend.
#[derive(Debug)]
pub struct SettingsStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Creates a store using [`DEFAULT_SETTINGS_KEY`].
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_SETTINGS_KEY)
    }

    /// Creates a store using a custom key.
    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Key the snapshot is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Consumes the store and returns the backend.
    pub fn into_inner(self) -> S {
        self.backend
    }

    /// Saves the configuration, replacing any previous snapshot.
    pub fn save(&mut self, config: &RateConfiguration) -> AppResult<()> {
        let snapshot = encode(config)?;
        self.backend.set(&self.key, &snapshot)?;
        info!(key = %self.key, base_rate = %config.base_rate(), "settings saved");
        Ok(())
    }

    /// Loads the saved configuration.
    ///
    /// Returns `None` when nothing is saved, when the snapshot is not a JSON
    /// object, or when the backend cannot be read.
    pub fn load(&self) -> Option<RateConfiguration> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no saved settings");
                return None;
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to read saved settings");
                return None;
            }
        };

        match serde_json::from_str::<Map<String, Value>>(&raw) {
            Ok(snapshot) => Some(decode(&snapshot)),
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to load saved settings");
                None
            }
        }
    }

    /// Loads the saved configuration, falling back to the defaults.
    pub fn load_or_default(&self) -> RateConfiguration {
        self.load().unwrap_or_default()
    }

    /// Deletes the saved snapshot. The next load returns `None`.
    pub fn reset(&mut self) -> AppResult<()> {
        self.backend.remove(&self.key)?;
        info!(key = %self.key, "settings reset to defaults");
        Ok(())
    }
}

fn encode(config: &RateConfiguration) -> AppResult<String> {
    let mut snapshot = Map::new();
    snapshot.insert(
        BASE_RATE_FIELD.to_string(),
        serde_json::to_value(JsonAmount(config.base_rate()))?,
    );
    for (denomination, amount) in config.deductions() {
        snapshot.insert(
            denomination.deduction_key(),
            serde_json::to_value(JsonAmount(amount))?,
        );
    }
    Ok(serde_json::to_string(&snapshot)?)
}

fn decode(snapshot: &Map<String, Value>) -> RateConfiguration {
    let base_rate = snapshot
        .get(BASE_RATE_FIELD)
        .and_then(decode_amount)
        .unwrap_or(DEFAULT_BASE_RATE);

    let deductions = Denomination::DISCOUNTED.into_iter().map(|denomination| {
        let amount = snapshot
            .get(&denomination.deduction_key())
            .and_then(decode_amount)
            .unwrap_or(Decimal::ZERO);
        (denomination, amount)
    });

    RateConfiguration::from_parts(base_rate, deductions)
}

/// Reads a stored amount. Flooring and rounding are left to
/// `RateConfiguration`; the rate field cap does not apply to saved values.
fn decode_amount(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => {
            let text = number.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        Value::String(text) => parse_decimal(text),
        _ => None,
    }
}
