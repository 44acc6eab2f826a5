//! Fixed-point currency arithmetic.

pub mod service;

#[cfg(test)]
mod props;

pub use service::CurrencyService;
