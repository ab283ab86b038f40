//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are kept as [`Decimal`] so that cart totals add up exactly
//! (`9.99 + 9.99 == 19.98`, no float drift). The store is single-currency.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("price is not a number: {0}")]
    NotANumber(String),
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative price in the store's currency.
///
/// ## Examples
///
/// ```
/// use simple_store_core::Price;
///
/// let price = Price::parse("9.99").unwrap();
/// assert_eq!(price.to_string(), "9.99");
/// assert_eq!(price.display(), "$9.99");
///
/// assert!(Price::parse("-1").is_err());
/// assert!(Price::parse("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Parse a price from text.
    ///
    /// Accepts plain decimal text (`"9.99"`, `"10.0"`) and the scientific
    /// notation some spreadsheet tools write for small values (`"1e-05"`).
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, not a number, or negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount = Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| PriceError::NotANumber(s.to_owned()))?;

        Self::new(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

// Saturates at `Decimal::MAX`; both sides are non-negative so it never
// drops below zero.
impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_decimal() {
        assert_eq!(Price::parse("9.99").unwrap().amount(), Decimal::new(999, 2));
        assert_eq!(Price::parse(" 0 ").unwrap(), Price::ZERO);
    }

    #[test]
    fn test_parse_keeps_written_scale() {
        assert_eq!(Price::parse("10.0").unwrap().to_string(), "10.0");
    }

    #[test]
    fn test_parse_scientific_notation() {
        let price = Price::parse("1e-05").unwrap();
        assert_eq!(price.amount(), Decimal::new(1, 5));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Price::parse(""), Err(PriceError::Empty));
        assert_eq!(Price::parse("-0.01"), Err(PriceError::Negative));
        assert!(matches!(Price::parse("ten"), Err(PriceError::NotANumber(_))));
    }

    #[test]
    fn test_sum_is_exact() {
        let widget = Price::parse("9.99").unwrap();
        let total: Price = [widget, widget].iter().sum();
        assert_eq!(total, Price::parse("19.98").unwrap());
        assert_eq!(total.display(), "$19.98");
    }

    #[test]
    fn test_sum_of_largest_amounts_saturates() {
        let huge = Price::parse("79228162514264337593543950335").unwrap();
        let total: Price = [huge, huge, Price::parse("0.01").unwrap()].iter().sum();
        assert_eq!(total.amount(), Decimal::MAX);
    }

    #[test]
    fn test_display_pads_to_cents() {
        assert_eq!(Price::parse("10").unwrap().display(), "$10.00");
        assert_eq!(Price::ZERO.display(), "$0.00");
    }

    #[test]
    fn test_serde_rejects_negative() {
        assert!(serde_json::from_str::<Price>("\"-5\"").is_err());
        let price: Price = serde_json::from_str("\"4.50\"").unwrap();
        assert_eq!(price.to_string(), "4.50");
    }
}
