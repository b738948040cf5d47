//! Error types for recordstore
//!
//! Only infrastructure failures are errors. A predicate that matches
//! nothing, or a resource that is missing or corrupt on load, is reported
//! through outcome values instead.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for recordstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for recordstore
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while writing or removing a resource
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A JSON value that cannot be used as a record
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Configuration could not be read, parsed or validated
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
