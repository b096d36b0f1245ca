//! Email address type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `localpart@domain.tld` with a letters-only top-level label of 2+ characters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid email regex")
});

/// Returns `true` if `s` has the shape of an email address.
///
/// The local part may contain letters, digits and `._%+-`; the domain may
/// contain letters, digits, `.` and `-`; the final label must be at least two
/// letters. The whole input must match, with nothing before or after.
///
/// ```
/// use order_desk_core::validate_email;
///
/// assert!(validate_email("a.b+c@example.co"));
/// assert!(!validate_email("a@b"));
/// ```
#[must_use]
pub fn validate_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input is not shaped like `localpart@domain.tld`.
    #[error("invalid email format: {0}")]
    InvalidFormat(String),
}

/// An email address that passed [`validate_email`].
///
/// ## Examples
///
/// ```
/// use order_desk_core::Email;
///
/// // Valid emails
/// assert!(Email::parse("user@example.com").is_ok());
/// assert!(Email::parse("user.name+tag@domain.co.uk").is_ok());
///
/// // Invalid emails
/// assert!(Email::parse("").is_err());             // empty
/// assert!(Email::parse("not-an-email").is_err()); // missing @
/// assert!(Email::parse("a@@b.com").is_err());     // doubled @
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or fails [`validate_email`].
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }

        if !validate_email(s) {
            return Err(EmailError::InvalidFormat(s.to_owned()));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
