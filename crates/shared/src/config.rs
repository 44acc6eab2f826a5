//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Currency pair configuration.
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Settings persistence configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyConfig::default(),
            storage: StorageConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

/// Currency pair configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Currency the bills are counted in.
    #[serde(default = "default_base_currency")]
    pub base: Currency,
    /// Currency the totals are displayed in.
    #[serde(default = "default_quote_currency")]
    pub quote: Currency,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base: default_base_currency(),
            quote: default_quote_currency(),
        }
    }
}

fn default_base_currency() -> Currency {
    Currency::Usd
}

fn default_quote_currency() -> Currency {
    Currency::Lkr
}

/// Settings persistence configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// File backing the key-value store.
    #[serde(default = "default_storage_path")]
    pub path: String,
    /// Key the rate configuration snapshot is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            key: default_storage_key(),
        }
    }
}

fn default_storage_path() -> String {
    "billrate-settings.json".to_string()
}

fn default_storage_key() -> String {
    "exchangeSettings".to_string()
}

fn default_log_filter() -> String {
    "billrate=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BILLRATE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.currency.base, Currency::Usd);
        assert_eq!(config.currency.quote, Currency::Lkr);
        assert_eq!(config.storage.key, "exchangeSettings");
        assert_eq!(config.storage.path, "billrate-settings.json");
        assert_eq!(config.log_filter, "billrate=info");
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(
            [
                "BILLRATE__STORAGE__PATH",
                "BILLRATE__STORAGE__KEY",
                "BILLRATE__CURRENCY__QUOTE",
                "BILLRATE__LOG_FILTER",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.storage.key, "exchangeSettings");
                assert_eq!(config.currency.quote, Currency::Lkr);
                assert_eq!(config.log_filter, "billrate=info");
            },
        );
    }

    #[test]
    fn test_load_env_overrides() {
        temp_env::with_vars(
            [
                ("BILLRATE__STORAGE__PATH", Some("/tmp/rates.json")),
                ("BILLRATE__CURRENCY__QUOTE", Some("USD")),
                ("BILLRATE__LOG_FILTER", Some("billrate=debug")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.storage.path, "/tmp/rates.json");
                assert_eq!(config.storage.key, "exchangeSettings");
                assert_eq!(config.currency.quote, Currency::Usd);
                assert_eq!(config.log_filter, "billrate=debug");
            },
        );
    }
}
