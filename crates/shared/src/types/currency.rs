//! The base/quote currency pair.
//!
//! Bills are counted in the base currency and valued in the quote currency.
//! Only one pair is active at a time; which one is a configuration choice.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Sri Lankan Rupee
    Lkr,
}

impl Currency {
    /// Returns the symbol printed in front of amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Lkr => "Rs",
        }
    }

    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Lkr => "LKR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "LKR" => Ok(Self::Lkr),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
