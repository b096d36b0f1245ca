//! Integration tests for Order Desk.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p order-desk-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session` - Whole sessions driven by scripted operator input
//!
//! The helpers here run a [`Session`] against canned input and a log file in
//! a fresh temporary directory.

use std::io::Cursor;
use std::path::PathBuf;

use order_desk_cli::{OrderLog, Prompter, Session, SessionError};
use order_desk_core::{Catalog, OrderRecord};
use tempfile::TempDir;

/// A temporary order log plus the standard catalog.
pub struct TestDesk {
    dir: TempDir,
    pub catalog: Catalog,
    pub log: OrderLog,
}

/// What one scripted session produced.
pub struct SessionRun {
    pub result: Result<OrderRecord, SessionError>,
    /// Everything the session printed.
    pub transcript: String,
}

impl TestDesk {
    /// Create a desk whose log lives in a new temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let log = OrderLog::new(dir.path().join("customer_orders.txt"));
        Self {
            dir,
            catalog: Catalog::standard(),
            log,
        }
    }

    /// Run one session, feeding it `lines` as operator input.
    #[must_use]
    pub fn run(&self, lines: &[&str]) -> SessionRun {
        let mut input = lines.join("\n");
        input.push('\n');

        let mut prompter = Prompter::new(Cursor::new(input), Vec::new());
        let result = Session::new(&self.catalog, &self.log).run(&mut prompter);
        let (_, output) = prompter.into_parts();

        SessionRun {
            result,
            transcript: String::from_utf8_lossy(&output).into_owned(),
        }
    }

    /// Contents of the order log, or an empty string if it was never written.
    #[must_use]
    pub fn log_contents(&self) -> String {
        std::fs::read_to_string(self.log.path()).unwrap_or_default()
    }

    /// Path of the temporary directory holding the log.
    #[must_use]
    pub fn dir(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}

impl Default for TestDesk {
    fn default() -> Self {
        Self::new()
    }
}
