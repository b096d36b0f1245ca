//! Line-item quantity.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// Empty input, or input with anything other than ASCII digits.
    #[error("quantity must contain only digits: {0:?}")]
    NotANumber(String),
    #[error("quantity must be greater than zero")]
    Zero,
    #[error("quantity must be at most {max}")]
    TooLarge {
        /// Largest accepted quantity.
        max: u32,
    },
}

/// A positive number of units.
///
/// ```
/// use order_desk_core::Quantity;
///
/// assert_eq!(Quantity::parse("3").unwrap().get(), 3);
/// assert!(Quantity::parse("0").is_err());
/// assert!(Quantity::parse("-5").is_err());
/// assert!(Quantity::parse("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Create a quantity, returning `None` for zero.
    #[must_use]
    pub const fn new(units: u32) -> Option<Self> {
        if units == 0 { None } else { Some(Self(units)) }
    }

    /// Parse a quantity typed by the operator.
    ///
    /// Only plain digit strings are accepted: no sign, no whitespace, no
    /// separators.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains a non-digit, is zero,
    /// or does not fit in a `u32`.
    pub fn parse(s: &str) -> Result<Self, QuantityError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(QuantityError::NotANumber(s.to_owned()));
        }

        let units: u32 = s
            .parse()
            .map_err(|_| QuantityError::TooLarge { max: u32::MAX })?;

        Self::new(units).ok_or(QuantityError::Zero)
    }

    /// The number of units.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The quantity as a decimal multiplier.
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_zero() {
        assert_eq!(Quantity::parse("0"), Err(QuantityError::Zero));
        assert_eq!(Quantity::parse("000"), Err(QuantityError::Zero));
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        for input in ["", "-5", "+5", "abc", " 3", "3 ", "1.5", "1_000"] {
            assert!(
                matches!(Quantity::parse(input), Err(QuantityError::NotANumber(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert_eq!(
            Quantity::parse("99999999999"),
            Err(QuantityError::TooLarge { max: u32::MAX })
        );
    }

    #[test]
    fn test_parse_accepts_leading_zeros() {
        assert_eq!(Quantity::parse("007").unwrap().get(), 7);
    }

    #[test]
    fn test_new() {
        assert!(Quantity::new(0).is_none());
        assert_eq!(Quantity::new(2).unwrap().as_decimal(), Decimal::from(2));
    }
}
