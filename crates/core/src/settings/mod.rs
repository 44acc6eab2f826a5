//! Persistence of the rate configuration.
//!
//! - `store` - key-value backends (in-memory, JSON file)
//! - `service` - the settings store that owns the snapshot key

pub mod service;
pub mod store;

#[cfg(test)]
mod service_props;

pub use service::{DEFAULT_SETTINGS_KEY, SettingsStore};
pub use store::{FileStore, KeyValueStore, MemoryStore};
