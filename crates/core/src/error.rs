//! Error types for entity documents
//!
//! Reads and writes on a store never fail; these errors only describe what
//! went wrong internally (a rejected decode, a failed coercion) and what the
//! configuration loader reports.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for entity operations
pub type Result<T> = std::result::Result<T, Error>;

/// A value could not be coerced into the requested type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unable to cast {from} to {to}")]
pub struct CastError {
    /// Type name of the source value
    pub from: &'static str,
    /// Name of the requested target type
    pub to: &'static str,
}

impl CastError {
    /// Create a cast error for the given source and target type names
    pub fn new(from: &'static str, to: &'static str) -> Self {
        CastError { from, to }
    }
}

/// Error types for entity documents
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Document bytes did not decode into a mapping
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration value rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
