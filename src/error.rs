//! Error types for the Glossa library.
//!
//! All errors are represented by the [`GlossaError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use glossa::error::{GlossaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GlossaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Glossa operations.
///
/// This enum represents all possible errors that can occur in the Glossa
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum GlossaError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Parse/format errors (malformed relation-database lines, exception
    /// entries, tagged-token input)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Resource errors (a required database or exception file could not be
    /// opened or read)
    #[error("Resource error: {0}")]
    Resource(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Operation cancelled
    #[error("Operation cancelled: {0}")]
    OperationCancelled(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

impl GlossaError {
    /// Create a parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        GlossaError::Parse(msg.into())
    }

    /// Create a resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        GlossaError::Resource(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        GlossaError::InvalidArgument(msg.into())
    }

    /// Create an invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        GlossaError::InvalidOperation(msg.into())
    }

    /// Create a cancellation error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        GlossaError::OperationCancelled(msg.into())
    }
}

/// A specialized Result type for Glossa operations.
pub type Result<T> = std::result::Result<T, GlossaError>;
