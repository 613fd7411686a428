//! Entity - delimited-path access over nested JSON-like documents
//!
//! A [`PathStore`] wraps one nested document and resolves keys like
//! `"event:simulator"` through it, with typed accessors that fall back to
//! zero values instead of failing.
//!
//! # Quick Start
//!
//! ```
//! use entity::PathStore;
//!
//! let mut store = PathStore::default();
//! store.set("user:name", "Alice");
//!
//! assert_eq!(store.get_string("user:name"), "Alice");
//! assert!(store.get("user:name:first").is_none());
//! ```

pub use entity_core::{
    cast, parse_size_in_bytes, CastError, Error, KeyPath, Mapping, Node, Result,
    DEFAULT_KEY_DELIMITER,
};
pub use entity_store::{PathStore, StoreConfig, CONFIG_FILE_NAME};
