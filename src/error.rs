//! Error types for the Hausa lemmatizer.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LemmatizerError`] enum.
//!
//! # Examples
//!
//! ```
//! use hausa_lemmatizer::error::{LemmatizerError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LemmatizerError::invalid_argument("token has no label"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lemmatizer operations.
///
/// Dictionary problems are normally recovered inside the crate and only
/// surface through the strict loaders. Tagger failures are passed through
/// untouched, either as [`LemmatizerError::Tagger`] or, for adapters built on
/// `anyhow`, as [`LemmatizerError::Anyhow`].
#[derive(Error, Debug)]
pub enum LemmatizerError {
    /// I/O errors (reading dictionaries, configuration files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary loading errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failures reported by the part-of-speech tagger
    #[error("Tagger error: {0}")]
    Tagger(String),

    /// Malformed input handed to an operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation did not complete within its time limit
    #[error("Timeout: {0}")]
    Timeout(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LemmatizerError.
pub type Result<T> = std::result::Result<T, LemmatizerError>;

impl LemmatizerError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        LemmatizerError::Dictionary(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LemmatizerError::Config(msg.into())
    }

    /// Create a new tagger error.
    pub fn tagger<S: Into<String>>(msg: S) -> Self {
        LemmatizerError::Tagger(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LemmatizerError::InvalidArgument(msg.into())
    }

    /// Create a new timeout error.
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        LemmatizerError::Timeout(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LemmatizerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LemmatizerError::dictionary("missing file");
        assert_eq!(error.to_string(), "Dictionary error: missing file");

        let error = LemmatizerError::invalid_argument("empty label");
        assert_eq!(error.to_string(), "Invalid argument: empty label");

        let error = LemmatizerError::tagger("model crashed");
        assert_eq!(error.to_string(), "Tagger error: model crashed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LemmatizerError::from(io_error);

        match error {
            LemmatizerError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let error = LemmatizerError::from(anyhow::anyhow!("upstream failure"));
        assert!(matches!(error, LemmatizerError::Anyhow(_)));
        assert!(error.to_string().contains("upstream failure"));
    }
}
