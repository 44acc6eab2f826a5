//! Core business logic for Billrate.
//!
//! This crate contains pure business logic with ZERO UI dependencies.
//! The only side effects go through the injected settings backend.
//!
//! # Modules
//!
//! - `currency` - Fixed-point currency arithmetic in integer minor units
//! - `exchange` - Effective rates, per-denomination subtotals and totals
//! - `settings` - Persisting the rate configuration to a key-value store

pub mod currency;
pub mod exchange;
pub mod settings;
