//! Delimited key paths
//!
//! A key like `"event:simulator"` addresses a nested value: the key is split
//! on a delimiter into path segments which are followed one mapping at a time.
//!
//! | Key | Segments (delimiter `:`) |
//! |-----|--------------------------|
//! | `name` | `["name"]` |
//! | `a:b:c` | `["a", "b", "c"]` |
//! | `a::b` | `["a", "", "b"]` |
//! | (empty) | `[""]` |
//!
//! Segments are never validated: an empty segment is an ordinary key. There
//! is no escaping, so a delimiter can never appear inside a segment.

/// Delimiter used when a store is not configured otherwise
pub const DEFAULT_KEY_DELIMITER: &str = ":";

/// A path into a document, as a sequence of key segments
///
/// # Examples
///
/// ```
/// use entity_core::path::KeyPath;
///
/// let path = KeyPath::parse("payload:offsetInMilliseconds", ":");
/// assert_eq!(path.len(), 2);
///
/// let (prefix, last) = path.split_last();
/// assert_eq!(prefix, ["payload".to_string()]);
/// assert_eq!(last, "offsetInMilliseconds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Split `key` on `delimiter`
    ///
    /// Always yields at least one segment. An empty delimiter is not split on
    /// and yields the whole key as a single segment.
    pub fn parse(key: &str, delimiter: &str) -> Self {
        let segments = if delimiter.is_empty() {
            vec![key.to_string()]
        } else {
            key.split(delimiter).map(str::to_string).collect()
        };
        KeyPath { segments }
    }

    /// Get the path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Get the number of segments in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a path has at least one segment
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check whether the path has more than one segment
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    /// Split into the parent segments and the final segment
    pub fn split_last(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((last, prefix)) => (prefix, last.as_str()),
            None => (&[], ""),
        }
    }

    /// The first `n` segments (clamped to the path length)
    pub fn prefix(&self, n: usize) -> &[String] {
        &self.segments[..n.min(self.segments.len())]
    }

    /// Join the segments back together with `delimiter`
    pub fn join(&self, delimiter: &str) -> String {
        self.segments.join(delimiter)
    }
}
