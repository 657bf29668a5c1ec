//! Error types for typegraph operations.
//!
//! Errors are split the same way the scan pipeline is:
//!
//! - **`Error`**: Top-level errors that halt an operation (unknown root,
//!   unreadable config, failed renderer)
//! - **`ScanError`**: File-level problems that are collected during a scan
//!   but never stop it
//!
//! Extraction is best effort. A single unreadable source file must not
//! prevent the rest of the tree from being graphed, so those problems are
//! reported in [`ScanStats`](crate::ScanStats) instead of being returned.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for typegraph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for typegraph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested root type has no declaration record
    #[error("type not found: {0}")]
    NotFound(String),

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The external graph layout tool failed
    #[error("render error: {0}")]
    Render(String),
}

/// Error encountered while scanning a specific source file.
#[derive(Debug, Clone)]
pub struct ScanError {
    /// Path to the file that failed
    pub path: PathBuf,
    /// Category of the error
    pub kind: ScanErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.path.display(),
            self.message,
            self.kind
        )
    }
}

impl std::error::Error for ScanError {}

/// Categorization of scan errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// File content is not valid UTF-8
    EncodingError,

    /// Could not read the file from disk
    IoError,
}

impl std::fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EncodingError => write!(f, "encoding error"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl ScanError {
    /// Create a new scan error.
    #[must_use]
    pub fn new(path: PathBuf, kind: ScanErrorKind, message: impl Into<String>) -> Self {
        Self {
            path,
            kind,
            message: message.into(),
        }
    }

    /// Classify an I/O failure while reading a source file.
    ///
    /// `InvalidData` is what `read_to_string` reports for non-UTF-8 input.
    #[must_use]
    pub fn from_io(path: PathBuf, error: &std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::InvalidData {
            Self::new(path, ScanErrorKind::EncodingError, "file is not valid UTF-8")
        } else {
            Self::new(path, ScanErrorKind::IoError, error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_display_includes_path_and_kind() {
        let error = ScanError::new(
            PathBuf::from("src/Billing.kt"),
            ScanErrorKind::IoError,
            "permission denied",
        );

        let display = error.to_string();
        assert!(display.contains("src/Billing.kt"));
        assert!(display.contains("permission denied"));
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn invalid_data_is_classified_as_encoding_error() {
        let io = std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "stream did not contain valid UTF-8",
        );
        let error = ScanError::from_io(PathBuf::from("a.kt"), &io);

        assert_eq!(error.kind, ScanErrorKind::EncodingError);
    }

    #[test]
    fn not_found_names_the_type() {
        let error = Error::NotFound("PlanService".to_string());
        assert_eq!(error.to_string(), "type not found: PlanService");
    }
}
