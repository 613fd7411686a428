//! Path-addressed store over a nested entity document
//!
//! This crate provides:
//! - PathStore: delimited-path reads and writes with shadowing and
//!   auto-vivification
//! - Typed accessors (`get_string`, `get_bool`, `get_int`, ...) that coerce
//!   with a silent zero-value fallback
//! - StoreConfig: key delimiter configuration loaded from `entity.toml`
//!
//! # Quick Start
//!
//! ```
//! use entity_store::PathStore;
//!
//! let store = PathStore::from_json(r#"{"event": {"simulator": true}}"#);
//! assert!(store.get_bool("event:simulator"));
//! assert!(!store.get_bool("event:missing"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod accessors;
pub mod config;
pub mod store;

pub use config::{StoreConfig, CONFIG_FILE_NAME};
pub use store::PathStore;
