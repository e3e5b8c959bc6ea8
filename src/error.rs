//! Error types for the LexiDeck library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexiDeckError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexideck::error::{LexiDeckError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(LexiDeckError::dictionary("no such directory"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Loaded"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for LexiDeck operations.
///
/// Only start-up problems are represented here: the pure stages of the
/// pipeline (tokenizer, aggregator, ranker, renderer) cannot fail.
#[derive(Error, Debug)]
pub enum LexiDeckError {
    /// I/O errors (file operations, output sink, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary loading errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Corpus traversal errors
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Lemmatizer construction errors
    #[error("Lemmatizer error: {0}")]
    Lemmatizer(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LexiDeckError.
pub type Result<T> = std::result::Result<T, LexiDeckError>;

impl LexiDeckError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        LexiDeckError::Dictionary(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        LexiDeckError::Corpus(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexiDeckError::Config(msg.into())
    }

    /// Create a new lemmatizer error.
    pub fn lemmatizer<S: Into<String>>(msg: S) -> Self {
        LexiDeckError::Lemmatizer(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexiDeckError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexiDeckError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexiDeckError::dictionary("missing");
        assert_eq!(error.to_string(), "Dictionary error: missing");

        let error = LexiDeckError::corpus("not a directory");
        assert_eq!(error.to_string(), "Corpus error: not a directory");

        let error = LexiDeckError::config("bad pattern");
        assert_eq!(error.to_string(), "Configuration error: bad pattern");

        let error = LexiDeckError::invalid_argument("limit");
        assert_eq!(error.to_string(), "Error: Invalid argument: limit");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LexiDeckError::from(io_error);

        match error {
            LexiDeckError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
