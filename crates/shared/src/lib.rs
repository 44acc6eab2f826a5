//! Shared types, errors, and configuration for Billrate.
//!
//! This crate provides common types used across all other crates:
//! - Bill denominations in canonical order
//! - The base/quote currency pair
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::{Currency, Denomination};
