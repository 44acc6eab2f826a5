//! Bill denominations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Face value of a bill in the base currency.
///
/// The set is fixed. [`Denomination::ALL`] lists it in canonical order,
/// highest first, which is the order breakdowns are produced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Denomination {
    /// 100 bill. Carries the base rate, never a deduction.
    Hundred,
    /// 50 bill
    Fifty,
    /// 20 bill
    Twenty,
    /// 10 bill
    Ten,
    /// 5 bill
    Five,
    /// 2 bill
    Two,
    /// 1 bill
    One,
}

impl Denomination {
    /// Every denomination, highest first.
    pub const ALL: [Self; 7] = [
        Self::Hundred,
        Self::Fifty,
        Self::Twenty,
        Self::Ten,
        Self::Five,
        Self::Two,
        Self::One,
    ];

    /// Denominations that take a deduction from the base rate.
    pub const DISCOUNTED: [Self; 6] = [
        Self::Fifty,
        Self::Twenty,
        Self::Ten,
        Self::Five,
        Self::Two,
        Self::One,
    ];

    /// Face value of the bill.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Hundred => 100,
            Self::Fifty => 50,
            Self::Twenty => 20,
            Self::Ten => 10,
            Self::Five => 5,
            Self::Two => 2,
            Self::One => 1,
        }
    }

    /// Face value as a decimal factor.
    #[must_use]
    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.value())
    }

    /// Position in [`Denomination::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the denomination that carries the base rate.
    #[must_use]
    pub const fn is_base(self) -> bool {
        matches!(self, Self::Hundred)
    }

    /// Key used for this denomination's deduction in a persisted snapshot.
    #[must_use]
    pub fn deduction_key(self) -> String {
        format!("deduction_{}", self.value())
    }
}

impl TryFrom<u32> for Denomination {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|d| d.value() == value)
            .ok_or_else(|| format!("Unknown denomination: {value}"))
    }
}

impl From<Denomination> for u32 {
    fn from(d: Denomination) -> Self {
        d.value()
    }
}

impl std::str::FromStr for Denomination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .trim_start_matches('$')
            .parse()
            .map_err(|_| format!("Unknown denomination: {s}"))?;
        Self::try_from(value)
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_canonical_order_is_descending() {
        let values: Vec<u32> = Denomination::ALL.iter().map(|d| d.value()).collect();
        assert_eq!(values, vec![100, 50, 20, 10, 5, 2, 1]);
    }

    #[test]
    fn test_index_matches_position() {
        for (i, d) in Denomination::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn test_discounted_excludes_base() {
        assert!(!Denomination::DISCOUNTED.contains(&Denomination::Hundred));
        assert_eq!(Denomination::DISCOUNTED.len(), Denomination::ALL.len() - 1);
        assert!(Denomination::Hundred.is_base());
        assert!(!Denomination::Fifty.is_base());
    }

    #[rstest]
    #[case(Denomination::Fifty, "deduction_50")]
    #[case(Denomination::Twenty, "deduction_20")]
    #[case(Denomination::One, "deduction_1")]
    fn test_deduction_key(#[case] d: Denomination, #[case] expected: &str) {
        assert_eq!(d.deduction_key(), expected);
    }

    #[rstest]
    #[case(100, Denomination::Hundred)]
    #[case(50, Denomination::Fifty)]
    #[case(5, Denomination::Five)]
    #[case(2, Denomination::Two)]
    fn test_try_from_u32(#[case] value: u32, #[case] expected: Denomination) {
        assert_eq!(Denomination::try_from(value).unwrap(), expected);
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert!(Denomination::try_from(25).is_err());
        assert!(Denomination::try_from(0).is_err());
        assert!(Denomination::from_str("abc").is_err());
    }

    #[test]
    fn test_from_str_accepts_dollar_prefix() {
        assert_eq!(Denomination::from_str("$20").unwrap(), Denomination::Twenty);
        assert_eq!(Denomination::from_str(" 10 ").unwrap(), Denomination::Ten);
    }

    #[test]
    fn test_serde_as_number() {
        assert_eq!(serde_json::to_string(&Denomination::Fifty).unwrap(), "50");
        let d: Denomination = serde_json::from_str("10").unwrap();
        assert_eq!(d, Denomination::Ten);
        assert!(serde_json::from_str::<Denomination>("3").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Denomination::Hundred.to_string(), "100");
    }
}
