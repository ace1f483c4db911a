//! Error types for the wordmatch library.
//!
//! All errors are represented by the [`WordMatchError`] enum. Edit distance
//! itself never fails; errors come from ranking arguments, resource limits,
//! deadlines, configuration and I/O around the dictionary.
//!
//! # Examples
//!
//! ```
//! use wordmatch::error::{Result, WordMatchError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordMatchError::invalid_argument("k must be non-negative"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordmatch operations.
#[derive(Error, Debug)]
pub enum WordMatchError {
    /// I/O errors (reading a dictionary, stdin, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A caller passed an argument outside the operation's contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A configured resource limit was exceeded
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Operation cancelled, usually because a deadline passed
    #[error("Operation cancelled: {0}")]
    OperationCancelled(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal failures (thread pool setup, lost workers)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for operations that may fail with WordMatchError.
pub type Result<T> = std::result::Result<T, WordMatchError>;

impl WordMatchError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordMatchError::InvalidArgument(msg.into())
    }

    /// Create a new resource exhausted error.
    pub fn resource_exhausted<S: Into<String>>(msg: S) -> Self {
        WordMatchError::ResourceExhausted(msg.into())
    }

    /// Create a new cancelled error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        WordMatchError::OperationCancelled(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordMatchError::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        WordMatchError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordMatchError::invalid_argument("k must be non-negative, got -1");
        assert_eq!(
            error.to_string(),
            "Invalid argument: k must be non-negative, got -1"
        );

        let error = WordMatchError::resource_exhausted("query too long");
        assert_eq!(error.to_string(), "Resource exhausted: query too long");

        let error = WordMatchError::cancelled("deadline passed");
        assert_eq!(error.to_string(), "Operation cancelled: deadline passed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = WordMatchError::from(io_error);

        match error {
            WordMatchError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
