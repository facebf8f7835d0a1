//! Error types for the Wordsieve library.
//!
//! The word filter itself is total and never fails. Errors come from the
//! surfaces around it: custom tokenizer patterns, configuration loading,
//! dictionary and translation collaborators, and CLI I/O. All of them are
//! represented by the [`WordsieveError`] enum.
//!
//! # Examples
//!
//! ```
//! use wordsieve::error::{WordsieveError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordsieveError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Wordsieve operations.
#[derive(Error, Debug)]
pub enum WordsieveError {
    /// I/O errors (file operations, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dictionary lookup errors reported by a dictionary provider
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Translation errors reported by a translation provider
    #[error("Translation error: {0}")]
    Translation(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

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

/// Result type alias for operations that may fail with WordsieveError.
pub type Result<T> = std::result::Result<T, WordsieveError>;

impl WordsieveError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WordsieveError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordsieveError::Config(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        WordsieveError::Dictionary(msg.into())
    }

    /// Create a new translation error.
    pub fn translation<S: Into<String>>(msg: S) -> Self {
        WordsieveError::Translation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordsieveError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordsieveError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        WordsieveError::Other(format!("Not found: {}", msg.into()))
    }
}
