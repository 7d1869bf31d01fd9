//! Error types for streaming histogram operations
//!
//! Provides a unified error type for all streamhist crates.

use thiserror::Error;

/// Core error type for histogram, export and render operations
#[derive(Error, Debug)]
pub enum Error {
    /// A query needed at least one bin but the histogram holds none
    #[error("Histogram is empty")]
    EmptyHistogram,

    /// No bin covers the requested value
    #[error("No bin contains value {value}")]
    NotFound { value: i64 },

    /// Rendering was requested without a background surface to draw on
    #[error("Need a background surface to draw on")]
    MissingSurface,

    /// Target bin count must be at least one
    #[error("Invalid bin count: {0} (must be at least 1)")]
    InvalidBinCount(usize),

    /// Configuration could not be parsed or is inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A shared collector's lock was poisoned by a panicking holder
    #[error("Lock error: {0}")]
    Lock(String),

    /// The raster backend reported a failure
    #[error("Render error: {0}")]
    Render(String),

    /// IO error (for export operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a value outside every bin
    pub fn not_found(value: i64) -> Self {
        Self::NotFound { value }
    }

    /// Create an error for a poisoned lock, keeping the poison message
    pub fn poisoned<E: std::fmt::Display>(what: &str, err: E) -> Self {
        Self::Lock(format!("Failed to lock {what}: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::EmptyHistogram.to_string(), "Histogram is empty");

        let err = Error::not_found(42);
        assert_eq!(err.to_string(), "No bin contains value 42");

        let err = Error::not_found(-7);
        assert_eq!(err.to_string(), "No bin contains value -7");

        assert_eq!(
            Error::MissingSurface.to_string(),
            "Need a background surface to draw on"
        );

        let err = Error::InvalidBinCount(0);
        assert_eq!(err.to_string(), "Invalid bin count: 0 (must be at least 1)");

        let err = Error::InvalidConfig("missing field".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: missing field");

        let err = Error::Render("backend closed".to_string());
        assert_eq!(err.to_string(), "Render error: backend closed");
    }

    #[test]
    fn test_poisoned_helper() {
        let err = Error::poisoned("blob stats", "poisoned lock: another task failed inside");
        assert_eq!(
            err.to_string(),
            "Lock error: Failed to lock blob stats: poisoned lock: another task failed inside"
        );
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {
                assert!(err.to_string().contains("file not found"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_not_found_carries_value() {
        match Error::not_found(150) {
            Error::NotFound { value } => assert_eq!(value, 150),
            other => panic!("Wrong error type: {other:?}"),
        }
    }
}
