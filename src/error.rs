//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Date text that is not a real `YYYY-MM-DD` calendar date
    #[error("Invalid date: '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    /// Amount text that is not a plain decimal number
    #[error("Invalid amount: '{0}'. Use a plain number like '250' or '-10.50'")]
    InvalidAmount(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A stored row that cannot be turned back into an expense
    #[error("Malformed record at line {line}: {cause}")]
    MalformedRecord {
        line: u64,
        #[source]
        cause: Box<TrackerError>,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrackerError {
    /// Wrap a row-level failure with the line it was found on
    pub fn malformed(line: u64, cause: TrackerError) -> Self {
        Self::MalformedRecord {
            line,
            cause: Box::new(cause),
        }
    }

    /// Check if this is a user-input validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidDate(_) | Self::InvalidAmount(_))
    }

    /// Check if the storage could not be read or written
    pub fn is_io_failure(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Csv(_) | Self::MalformedRecord { .. }
        )
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
