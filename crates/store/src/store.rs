//! PathStore: delimited-path reads and writes over a nested document
//!
//! ## Design
//!
//! The store owns one [`Mapping`] root and a per-instance key delimiter.
//! A key such as `"a:b:c"` is split into segments and followed one mapping at
//! a time.
//!
//! ## Read semantics
//!
//! - A missing key anywhere along the path makes the lookup absent.
//! - A non-mapping value at a strict prefix of the path *shadows* the rest of
//!   it: after `set("a", 5)`, `get("a:b")` is absent.
//! - The value at the final segment is returned verbatim, whatever its type.
//!
//! ## Write semantics
//!
//! - Intermediate mappings are created as needed (auto-vivification).
//! - A non-mapping value on the parent chain is replaced by an empty mapping.
//! - The final segment is overwritten unconditionally.
//!
//! ## Concurrency
//!
//! Writes take `&mut self`; sharing a store between threads needs an external
//! lock.
//!
//! # Example
//!
//! ```
//! use entity_store::PathStore;
//!
//! let mut store = PathStore::default();
//! store.set("user:name", "Alice").set("user:age", 30);
//!
//! assert_eq!(store.get_string("user:name"), "Alice");
//! assert_eq!(store.get_int("user:age"), 30);
//! assert!(store.get("user:name:first").is_none());
//! ```

use entity_core::{KeyPath, Mapping, Node, DEFAULT_KEY_DELIMITER};
use tracing::{trace, warn};

use crate::config::StoreConfig;

/// Outcome of walking a path through the document
#[derive(Debug, Clone, Copy, PartialEq)]
enum Lookup<'a> {
    /// Every segment resolved
    Found(&'a Node),
    /// Some segment is not a key of its mapping
    Missing,
    /// The first `n` segments resolve to a non-mapping value
    Shadowed(usize),
}

/// Path-addressed view over a nested document
#[derive(Debug, Clone, PartialEq)]
pub struct PathStore {
    /// Delimiter that separates a list of keys used to access a nested value
    /// in one go
    key_delim: String,
    data: Mapping,
}

impl Default for PathStore {
    fn default() -> Self {
        Self::new(Mapping::new())
    }
}

impl PathStore {
    /// Wrap an existing document with the default `:` delimiter
    pub fn new(data: Mapping) -> Self {
        PathStore {
            key_delim: DEFAULT_KEY_DELIMITER.to_string(),
            data,
        }
    }

    /// Wrap an existing document using the delimiter from `config`
    pub fn with_config(data: Mapping, config: &StoreConfig) -> Self {
        Self::new(data).with_delimiter(config.key_delimiter.clone())
    }

    /// Decode JSON bytes into a store
    ///
    /// Bytes that do not decode into a JSON object are logged and replaced by
    /// an empty document; construction itself never fails.
    pub fn from_json(bytes: impl AsRef<[u8]>) -> Self {
        match Node::from_json_slice(bytes.as_ref()) {
            Ok(data) => Self::new(data),
            Err(e) => {
                warn!(error = %e, "Failed to decode document, starting empty");
                Self::default()
            }
        }
    }

    /// Replace the key delimiter (builder style)
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.key_delim = delimiter.into();
        self
    }

    /// The delimiter keys are split on
    pub fn delimiter(&self) -> &str {
        &self.key_delim
    }

    /// The underlying document
    pub fn data(&self) -> &Mapping {
        &self.data
    }

    /// Consume the store and return the document
    pub fn into_data(self) -> Mapping {
        self.data
    }

    /// Serialize the document to a compact JSON string
    pub fn to_json_string(&self) -> String {
        serde_json::Value::from(Node::Object(self.data.clone())).to_string()
    }

    fn key_path(&self, key: &str) -> KeyPath {
        KeyPath::parse(key, &self.key_delim)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Set the value for `key`, creating intermediate mappings as needed
    ///
    /// Mapping values are normalized into the canonical [`Node::Object`] form
    /// by the `Into<Node>` conversion; the stored value never aliases the
    /// caller's data. Returns `self` so writes can be chained.
    pub fn set(&mut self, key: &str, value: impl Into<Node>) -> &mut Self {
        let value = value.into();
        let path = self.key_path(key);
        let (parents, last) = path.split_last();

        let deepest = deep_search(&mut self.data, parents);
        deepest.insert(last.to_string(), value);
        self
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Get the raw value stored at `key`
    ///
    /// Returns `None` when any segment is missing or when a prefix of the path
    /// holds a non-mapping value. Use the typed `get_*` accessors for coerced
    /// values.
    pub fn get(&self, key: &str) -> Option<&Node> {
        let path = self.key_path(key);

        // Fast path
        if !path.is_nested() {
            return self.data.get(path.split_last().1);
        }

        match search_map(&self.data, path.segments(), 0) {
            Lookup::Found(node) => Some(node),
            Lookup::Missing => None,
            Lookup::Shadowed(depth) => {
                trace!(
                    key,
                    shadowed_by = %path.prefix(depth).join(&self.key_delim),
                    "Lookup shadowed by non-mapping value"
                );
                None
            }
        }
    }

    /// The prefix of `key` that shadows it, if any
    ///
    /// For diagnostics: after `set("a", 5)`, `shadow_path("a:b:c")` is
    /// `Some("a")`. Missing paths and reachable paths are not shadowed, and
    /// neither are paths running through a `null`: those are simply absent.
    pub fn shadow_path(&self, key: &str) -> Option<String> {
        let path = self.key_path(key);
        match search_map(&self.data, path.segments(), 0) {
            Lookup::Shadowed(depth) => Some(path.prefix(depth).join(&self.key_delim)),
            Lookup::Found(_) | Lookup::Missing => None,
        }
    }
}

impl From<Mapping> for PathStore {
    fn from(data: Mapping) -> Self {
        PathStore::new(data)
    }
}

/// Recursively follow `path` through `source`
///
/// `depth` counts the segments already consumed by the caller.
fn search_map<'a>(source: &'a Mapping, path: &[String], depth: usize) -> Lookup<'a> {
    let Some((first, rest)) = path.split_first() else {
        return Lookup::Missing;
    };
    let Some(next) = source.get(first) else {
        return Lookup::Missing;
    };
    if rest.is_empty() {
        return Lookup::Found(next);
    }
    match next {
        Node::Object(inner) => search_map(inner, rest, depth + 1),
        Node::Null => Lookup::Missing,
        // got a value but a nested key was expected
        _ => Lookup::Shadowed(depth + 1),
    }
}

/// Walk `path` from `m`, creating or replacing intermediate mappings, and
/// return the innermost mapping
///
/// The initial map is modified: missing keys are inserted as empty mappings
/// and non-mapping values on the path are discarded.
fn deep_search<'a>(mut m: &'a mut Mapping, path: &[String]) -> &'a mut Mapping {
    for key in path {
        let slot = m.entry(key.clone()).or_insert_with(Node::object);
        m = vivify(key, slot);
    }
    m
}

fn vivify<'a>(key: &str, slot: &'a mut Node) -> &'a mut Mapping {
    if !slot.is_object() {
        trace!(key, replaced = slot.type_name(), "Replacing value with mapping");
        *slot = Node::object();
    }
    match slot {
        Node::Object(inner) => inner,
        _ => unreachable!("slot holds a mapping after vivify"),
    }
}
