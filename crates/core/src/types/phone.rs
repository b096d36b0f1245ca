//! Phone number type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `(DDD) DDD-DDDD` or `DDD-DDD-DDDD`, ASCII digits only.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([0-9]{3}\) [0-9]{3}-[0-9]{4}$|^[0-9]{3}-[0-9]{3}-[0-9]{4}$")
        .expect("Invalid phone regex")
});

/// Returns `true` if `s` is exactly `(123) 456-7890` or `123-456-7890` shaped.
///
/// ```
/// use order_desk_core::validate_phone;
///
/// assert!(validate_phone("(123) 456-7890"));
/// assert!(validate_phone("123-456-7890"));
/// assert!(!validate_phone("1234567890"));
/// ```
#[must_use]
pub fn validate_phone(s: &str) -> bool {
    PHONE_RE.is_match(s)
}

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    #[error("phone number cannot be empty")]
    Empty,
    #[error("invalid phone number format: {0}")]
    InvalidFormat(String),
}

/// A phone number that passed [`validate_phone`], kept exactly as entered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or fails [`validate_phone`].
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        if !validate_phone(s) {
            return Err(PhoneError::InvalidFormat(s.to_owned()));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
