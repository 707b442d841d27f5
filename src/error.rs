//! Error types for the Stednavn library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`StednavnError`] enum. Building a dictionary or reading a source can fail;
//! matching a text against an already compiled matcher cannot.
//!
//! # Examples
//!
//! ```
//! use stednavn::error::{Result, StednavnError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StednavnError::invalid_config("language tag must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Stednavn operations.
#[derive(Error, Debug)]
pub enum StednavnError {
    /// I/O errors that are not attributable to a named source
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A stopword, catalog or text source could not be read
    #[error("Source unavailable: {name}: {reason}")]
    SourceUnavailable { name: String, reason: String },

    /// Input could not be decoded under the declared encoding
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// The matching automaton could not be built
    #[error("Compilation error: {0}")]
    Compilation(String),

    /// Char filter construction errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Input text exceeds the configured size limit
    #[error("Text too long: {len} bytes exceeds the limit of {limit} bytes")]
    TextTooLong { len: usize, limit: usize },

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with StednavnError.
pub type Result<T> = std::result::Result<T, StednavnError>;

impl StednavnError {
    /// Create a new source unavailable error.
    pub fn source_unavailable<N: Into<String>, R: ToString>(name: N, reason: R) -> Self {
        StednavnError::SourceUnavailable {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a new decoding error.
    pub fn decoding<S: Into<String>>(msg: S) -> Self {
        StednavnError::Decoding(msg.into())
    }

    /// Create a new compilation error.
    pub fn compilation<S: Into<String>>(msg: S) -> Self {
        StednavnError::Compilation(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        StednavnError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        StednavnError::InvalidConfig(msg.into())
    }
}
