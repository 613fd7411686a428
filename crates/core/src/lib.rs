//! Core types for entity documents
//!
//! This crate defines the building blocks a path store is made of:
//! - Node: canonical generic value (null, bool, int, float, string, array, object)
//! - Mapping: string-keyed object representation
//! - KeyPath: a delimited key split into segments
//! - cast: best-effort coercion of nodes into concrete types
//! - size: human-readable byte-size parsing
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cast;
pub mod error;
pub mod node;
pub mod path;
pub mod size;

pub use error::{CastError, Error, Result};
pub use node::{Mapping, Node};
pub use path::{KeyPath, DEFAULT_KEY_DELIMITER};
pub use size::parse_size_in_bytes;
