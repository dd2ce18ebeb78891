//! Error types for the stylo library.
//!
//! All errors are represented by the [`StyloError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use stylo::error::{Result, StyloError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StyloError::pattern("unbalanced parenthesis"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for stylo operations.
///
/// This enum represents all possible errors that can occur in the stylo
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum StyloError {
    /// I/O errors (reading input text, writing reports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid regular-expression pattern supplied for a search
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

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

/// Result type alias for operations that may fail with StyloError.
pub type Result<T> = std::result::Result<T, StyloError>;

impl StyloError {
    /// Create a new pattern error.
    pub fn pattern<S: Into<String>>(msg: S) -> Self {
        StyloError::Pattern(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        StyloError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StyloError::Other(msg.into())
    }

    /// Check whether this error is a pattern-compilation error.
    pub fn is_pattern_error(&self) -> bool {
        matches!(self, StyloError::Pattern(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StyloError::pattern("missing closing bracket");
        assert_eq!(err.to_string(), "Pattern error: missing closing bracket");

        let err = StyloError::analysis("bad token stream");
        assert_eq!(err.to_string(), "Analysis error: bad token stream");
    }

    #[test]
    fn test_is_pattern_error() {
        assert!(StyloError::pattern("x").is_pattern_error());
        assert!(!StyloError::other("x").is_pattern_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing file");
        let err: StyloError = io_err.into();
        assert!(matches!(err, StyloError::Io(_)));
    }
}
