//! Error types for the interactive session.

use std::io;
use std::path::PathBuf;

use order_desk_core::PricingError;
use thiserror::Error;

/// Errors that end a session without saving the order.
///
/// Bad phone numbers, emails, product ids and quantities are not errors: the
/// intake loops handle them by asking again.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Standard input reached end-of-file while a question was pending.
    #[error("input closed before the session finished")]
    InputClosed,

    /// Reading a reply or writing a prompt failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// The order could not be priced.
    #[error("pricing failed: {0}")]
    Pricing(#[from] PricingError),

    /// The order log could not be opened or written.
    #[error("failed to save order to {}: {source}", path.display())]
    Record {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Configuration errors that can occur during startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
