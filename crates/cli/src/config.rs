//! Desk configuration.
//!
//! # Sources, highest precedence first
//!
//! - `--log-file <PATH>` on the command line
//! - `ORDER_DESK_LOG_FILE` in the environment (or a `.env` file)
//! - `customer_orders.txt` in the working directory
//!
//! Logging verbosity is controlled separately through `RUST_LOG`, falling back
//! to [`DEFAULT_LOG_FILTER`].

use std::path::PathBuf;

use crate::error::ConfigError;

/// Environment variable naming the order log file.
pub const LOG_FILE_ENV: &str = "ORDER_DESK_LOG_FILE";

/// Log file used when nothing else is configured.
pub const DEFAULT_LOG_FILE: &str = "customer_orders.txt";

/// Tracing filter used when `RUST_LOG` is unset. Covers this crate and the
/// `order-desk` binary; dependencies stay silent.
pub const DEFAULT_LOG_FILTER: &str = "order_desk=warn,order_desk_cli=warn";

/// Settings for a desk session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Where completed orders are appended.
    pub log_path: PathBuf,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl DeskConfig {
    /// Load configuration from the command-line flag and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen log path is empty.
    pub fn load(log_file_flag: Option<PathBuf>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_sources(log_file_flag, std::env::var(LOG_FILE_ENV).ok())
    }

    /// Resolve configuration from already-read values.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen log path is empty.
    pub fn from_sources(
        log_file_flag: Option<PathBuf>,
        log_file_env: Option<String>,
    ) -> Result<Self, ConfigError> {
        let (source, log_path) = match (log_file_flag, log_file_env) {
            (Some(flag), _) => ("--log-file", flag),
            (None, Some(env)) => (LOG_FILE_ENV, PathBuf::from(env)),
            (None, None) => return Ok(Self::default()),
        };

        if log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                source,
                "log file path cannot be empty".to_owned(),
            ));
        }

        Ok(Self { log_path })
    }
}
