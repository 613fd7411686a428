//! Node types for entity documents
//!
//! This module defines:
//! - Node: the canonical generic value stored at every position of a document
//! - Mapping: the string-keyed map used for every object node
//!
//! ## Canonical Node Model
//!
//! - Null, Bool, Int, Float, String, Array, Object
//!
//! Every mapping-like input is normalized into [`Node::Object`] when it is
//! converted into a node. Maps keyed by something other than `String` are
//! accepted as long as the key type implements `Display`; keys are stored in
//! their `Display` form. Key casing is never altered.
//!
//! Conversion always takes ownership (or clones), so a stored node never
//! aliases the caller's data.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::Result;

/// String-keyed mapping of nodes
pub type Mapping = HashMap<String, Node>;

/// Canonical value type for entity documents
///
/// Different types are NEVER equal, even if they hold the same "value":
/// `Int(1) != Float(1.0)`.
///
/// Serializes and deserializes as the plain JSON value it represents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "serde_json::Value", from = "serde_json::Value")]
pub enum Node {
    /// Null value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Sequence of nodes
    Array(Vec<Node>),
    /// Mapping with string keys
    Object(Mapping),
}

impl Node {
    /// Create an empty object node
    pub fn object() -> Self {
        Node::Object(Mapping::new())
    }

    /// Decode JSON bytes whose top level is an object
    ///
    /// Returns [`Error::Decode`](crate::Error::Decode) when the bytes are not
    /// valid JSON or the top-level value is not an object.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Mapping> {
        let obj: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(bytes)?;
        Ok(obj.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "Null",
            Node::Bool(_) => "Bool",
            Node::Int(_) => "Int",
            Node::Float(_) => "Float",
            Node::String(_) => "String",
            Node::Array(_) => "Array",
            Node::Object(_) => "Object",
        }
    }

    /// Check if this is a null node
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Check if this is a boolean node
    pub fn is_bool(&self) -> bool {
        matches!(self, Node::Bool(_))
    }

    /// Check if this is an integer node
    pub fn is_int(&self) -> bool {
        matches!(self, Node::Int(_))
    }

    /// Check if this is a float node
    pub fn is_float(&self) -> bool {
        matches!(self, Node::Float(_))
    }

    /// Check if this is a string node
    pub fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    /// Check if this is an array node
    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    /// Check if this is an object node
    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// Get as bool if this is a Bool node
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int node
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Node::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float node
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Node::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as &str if this is a String node
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &[Node] if this is an Array node
    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as &Mapping if this is an Object node
    pub fn as_object(&self) -> Option<&Mapping> {
        match self {
            Node::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Serialize to a compact JSON string
    pub fn to_json_string(&self) -> String {
        serde_json::Value::from(self.clone()).to_string()
    }
}

// Display renders compact JSON
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json_string())
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Node {
                fn from(i: $t) -> Self {
                    Node::Int(i as i64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);

// Unsigned values that do not fit i64 fall back to Float
macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Node {
                fn from(u: $t) -> Self {
                    match i64::try_from(u) {
                        Ok(i) => Node::Int(i),
                        Err(_) => Node::Float(u as f64),
                    }
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Node::Float(f)
    }
}

impl From<f32> for Node {
    fn from(f: f32) -> Self {
        Node::Float(f as f64)
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::Null
    }
}

impl From<&Node> for Node {
    fn from(n: &Node) -> Self {
        n.clone()
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(v: Vec<T>) -> Self {
        Node::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Node::Null,
        }
    }
}

// Mapping-like inputs: nested maps are normalized recursively through the
// value conversion, whatever their key type.

impl<K: fmt::Display, V: Into<Node>> From<HashMap<K, V>> for Node {
    fn from(m: HashMap<K, V>) -> Self {
        Node::Object(m.into_iter().map(|(k, v)| (k.to_string(), v.into())).collect())
    }
}

impl<K: fmt::Display, V: Into<Node>> From<BTreeMap<K, V>> for Node {
    fn from(m: BTreeMap<K, V>) -> Self {
        Node::Object(m.into_iter().map(|(k, v)| (k.to_string(), v.into())).collect())
    }
}

// ============================================================================
// serde_json interop
// ============================================================================

impl From<serde_json::Value> for Node {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Node::Null,
            serde_json::Value::Bool(b) => Node::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Node::Int(i)
                } else {
                    // u64 beyond i64::MAX and real numbers
                    Node::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Node::String(s),
            serde_json::Value::Array(arr) => Node::Array(arr.into_iter().map(Node::from).collect()),
            serde_json::Value::Object(obj) => {
                Node::Object(obj.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

impl From<Node> for serde_json::Value {
    fn from(n: Node) -> Self {
        match n {
            Node::Null => serde_json::Value::Null,
            Node::Bool(b) => serde_json::Value::Bool(b),
            Node::Int(i) => serde_json::Value::Number(i.into()),
            Node::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Node::String(s) => serde_json::Value::String(s),
            Node::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            Node::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
