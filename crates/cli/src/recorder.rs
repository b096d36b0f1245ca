//! Append-only order log.
//!
//! Each session adds one plain-text block (see [`OrderRecord`]'s `Display`)
//! to the end of the log. Existing content is never rewritten. There is no
//! file locking; two sessions writing at once may interleave.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use order_desk_core::OrderRecord;

use crate::error::SessionError;

/// The file completed orders are appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLog {
    path: PathBuf,
}

impl OrderLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `record`, creating the file if it does not exist.
    ///
    /// The block is rendered up front and written with a single
    /// `write_all`; the file is closed before returning.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Record`] if the file cannot be opened or
    /// written.
    pub fn append(&self, record: &OrderRecord) -> Result<(), SessionError> {
        let block = record.to_string();
        let to_record_error = |source: std::io::Error| SessionError::Record {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(to_record_error)?;
        file.write_all(block.as_bytes()).map_err(to_record_error)?;

        tracing::info!(path = %self.path.display(), bytes = block.len(), "Order appended");
        Ok(())
    }
}
