//! Common types used across the application.

pub mod currency;
pub mod denomination;

pub use currency::Currency;
pub use denomination::Denomination;
