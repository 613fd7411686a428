//! Best-effort coercion of nodes into concrete types
//!
//! Every target type has two forms:
//! - `try_to_*(&Node) -> Result<T, CastError>` reports why a coercion failed
//! - `to_*(Option<&Node>) -> T` yields the zero value (`T::default()`) when the
//!   node is absent or the coercion fails
//!
//! Store accessors use the `to_*` form, so callers cannot tell an absent key
//! from a present value that failed to coerce.
//!
//! # Examples
//!
//! ```
//! use entity_core::cast;
//! use entity_core::Node;
//!
//! assert_eq!(cast::to_i64(Some(&Node::from("42"))), 42);
//! assert_eq!(cast::to_i64(Some(&Node::from("forty-two"))), 0);
//! assert!(cast::to_bool(Some(&Node::from("TRUE"))));
//! assert_eq!(cast::to_string(None), "");
//! ```

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::CastError;
use crate::node::{Mapping, Node};

/// Layouts tried, in order, for strings that are not RFC 3339 or RFC 2822
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d %b %Y", "%d %B %Y"];

fn resolve<T: Default>(node: Option<&Node>, f: impl FnOnce(&Node) -> Result<T, CastError>) -> T {
    node.and_then(|n| f(n).ok()).unwrap_or_default()
}

// =============================================================================
// Strings and booleans
// =============================================================================

/// Coerce a node into a string
pub fn try_to_string(node: &Node) -> Result<String, CastError> {
    match node {
        Node::Null => Ok(String::new()),
        Node::Bool(b) => Ok(b.to_string()),
        Node::Int(i) => Ok(i.to_string()),
        Node::Float(f) => Ok(f.to_string()),
        Node::String(s) => Ok(s.clone()),
        other => Err(CastError::new(other.type_name(), "string")),
    }
}

/// Coerce a node into a string, `""` on failure
pub fn to_string(node: Option<&Node>) -> String {
    resolve(node, try_to_string)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Coerce a node into a bool
pub fn try_to_bool(node: &Node) -> Result<bool, CastError> {
    match node {
        Node::Null => Ok(false),
        Node::Bool(b) => Ok(*b),
        Node::Int(i) => Ok(*i != 0),
        Node::Float(f) => Ok(*f != 0.0),
        Node::String(s) => parse_bool(s.trim()).ok_or(CastError::new("String", "bool")),
        other => Err(CastError::new(other.type_name(), "bool")),
    }
}

/// Coerce a node into a bool, `false` on failure
pub fn to_bool(node: Option<&Node>) -> bool {
    resolve(node, try_to_bool)
}

// =============================================================================
// Numbers
// =============================================================================

/// `"10.000"` -> `"10"`; anything else is returned untouched
fn trim_zero_decimal(s: &str) -> &str {
    match s.split_once('.') {
        Some((int_part, frac)) if !int_part.is_empty() && frac.bytes().all(|b| b == b'0') => {
            int_part
        }
        _ => s,
    }
}

/// Parse an integer string with an optional sign and `0x`/`0o`/`0b` prefix
fn parse_int_str(s: &str) -> Option<i128> {
    let s = trim_zero_decimal(s.trim());
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let lower = unsigned.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else {
        (10, lower.as_str())
    };
    if !underscores_between_digits(digits) {
        return None;
    }
    let digits = digits.replace('_', "");
    if digits.is_empty() || digits.starts_with(|c| c == '+' || c == '-') {
        return None;
    }
    let value = i128::from_str_radix(&digits, radix).ok()?;
    Some(if negative { -value } else { value })
}

/// `1_000` is fine; `_1`, `1_` and `1__0` are not
fn underscores_between_digits(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_alphanumeric()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_alphanumeric))
    })
}

/// Widest integer view of a node, before narrowing to the target width
fn integer_of(node: &Node, to: &'static str) -> Result<i128, CastError> {
    match node {
        Node::Null => Ok(0),
        Node::Bool(b) => Ok(i128::from(*b)),
        Node::Int(i) => Ok(i128::from(*i)),
        Node::Float(f) if f.is_finite() => Ok(f.trunc() as i128),
        Node::String(s) => parse_int_str(s).ok_or(CastError::new("String", to)),
        other => Err(CastError::new(other.type_name(), to)),
    }
}

macro_rules! int_casts {
    ($($try_fn:ident, $fn:ident, $t:ty, $name:literal;)*) => {
        $(
            #[doc = concat!("Coerce a node into `", $name, "`")]
            ///
            /// Values outside the target range fail rather than wrap.
            pub fn $try_fn(node: &Node) -> Result<$t, CastError> {
                let wide = integer_of(node, $name)?;
                <$t>::try_from(wide).map_err(|_| CastError::new(node.type_name(), $name))
            }

            #[doc = concat!("Coerce a node into `", $name, "`, `0` on failure")]
            pub fn $fn(node: Option<&Node>) -> $t {
                resolve(node, $try_fn)
            }
        )*
    };
}

int_casts! {
    try_to_isize, to_isize, isize, "isize";
    try_to_i8, to_i8, i8, "i8";
    try_to_i32, to_i32, i32, "i32";
    try_to_i64, to_i64, i64, "i64";
    try_to_usize, to_usize, usize, "usize";
    try_to_u8, to_u8, u8, "u8";
    try_to_u32, to_u32, u32, "u32";
    try_to_u64, to_u64, u64, "u64";
}

/// Coerce a node into an f64
pub fn try_to_f64(node: &Node) -> Result<f64, CastError> {
    match node {
        Node::Null => Ok(0.0),
        Node::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Node::Int(i) => Ok(*i as f64),
        Node::Float(f) => Ok(*f),
        Node::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| CastError::new("String", "f64")),
        other => Err(CastError::new(other.type_name(), "f64")),
    }
}

/// Coerce a node into an f64, `0.0` on failure
pub fn to_f64(node: Option<&Node>) -> f64 {
    resolve(node, try_to_f64)
}

// =============================================================================
// Time
// =============================================================================

fn parse_time_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    for fmt in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive));
        }
    }
    None
}

/// Coerce a node into a UTC timestamp
///
/// Integers are Unix seconds. Null is the Unix epoch.
pub fn try_to_time(node: &Node) -> Result<DateTime<Utc>, CastError> {
    match node {
        Node::Null => Ok(DateTime::<Utc>::default()),
        Node::Int(secs) => Utc
            .timestamp_opt(*secs, 0)
            .single()
            .ok_or(CastError::new("Int", "time")),
        Node::String(s) => parse_time_str(s).ok_or(CastError::new("String", "time")),
        other => Err(CastError::new(other.type_name(), "time")),
    }
}

/// Coerce a node into a UTC timestamp, the Unix epoch on failure
pub fn to_time(node: Option<&Node>) -> DateTime<Utc> {
    resolve(node, try_to_time)
}

/// Coerce a node into a duration
///
/// Numbers are nanoseconds. Strings carrying a unit (`"1h30m"`, `"300ms"`)
/// are parsed as human-readable durations. Negative durations fail.
pub fn try_to_duration(node: &Node) -> Result<Duration, CastError> {
    match node {
        Node::Null => Ok(Duration::ZERO),
        Node::Int(ns) => u64::try_from(*ns)
            .map(Duration::from_nanos)
            .map_err(|_| CastError::new("Int", "duration")),
        Node::Float(ns) if ns.is_finite() && *ns >= 0.0 => Ok(Duration::from_nanos(*ns as u64)),
        Node::String(s) => {
            let s = s.trim();
            if s.chars().any(|c| c.is_ascii_alphabetic()) {
                humantime::parse_duration(s).map_err(|_| CastError::new("String", "duration"))
            } else {
                s.parse::<u64>()
                    .map(Duration::from_nanos)
                    .map_err(|_| CastError::new("String", "duration"))
            }
        }
        other => Err(CastError::new(other.type_name(), "duration")),
    }
}

/// Coerce a node into a duration, zero on failure
pub fn to_duration(node: Option<&Node>) -> Duration {
    resolve(node, try_to_duration)
}

// =============================================================================
// Slices
// =============================================================================

/// Coerce a node into a vector of nodes (arrays only)
pub fn try_to_slice(node: &Node) -> Result<Vec<Node>, CastError> {
    match node {
        Node::Array(items) => Ok(items.clone()),
        other => Err(CastError::new(other.type_name(), "slice")),
    }
}

/// Coerce a node into a vector of nodes, empty on failure
pub fn to_slice(node: Option<&Node>) -> Vec<Node> {
    resolve(node, try_to_slice)
}

/// Coerce an array into integers; any element failing fails the whole array
pub fn try_to_int_slice(node: &Node) -> Result<Vec<isize>, CastError> {
    match node {
        Node::Array(items) => items
            .iter()
            .map(|item| try_to_isize(item).map_err(|_| CastError::new("Array", "int slice")))
            .collect(),
        other => Err(CastError::new(other.type_name(), "int slice")),
    }
}

/// Coerce an array into integers, empty on failure
pub fn to_int_slice(node: Option<&Node>) -> Vec<isize> {
    resolve(node, try_to_int_slice)
}

/// Coerce a node into strings
///
/// Arrays convert element-wise, with unconvertible elements becoming `""`;
/// a string splits on whitespace.
pub fn try_to_string_slice(node: &Node) -> Result<Vec<String>, CastError> {
    match node {
        Node::Array(items) => Ok(items.iter().map(|item| to_string(Some(item))).collect()),
        Node::String(s) => Ok(s.split_whitespace().map(str::to_string).collect()),
        other => Err(CastError::new(other.type_name(), "string slice")),
    }
}

/// Coerce a node into strings, empty on failure
pub fn to_string_slice(node: Option<&Node>) -> Vec<String> {
    resolve(node, try_to_string_slice)
}

/// Coerce an array into mappings
///
/// Elements that are not mappings become empty mappings.
pub fn try_to_string_map_slice(node: &Node) -> Result<Vec<Mapping>, CastError> {
    match node {
        Node::Array(items) => Ok(items.iter().map(|item| to_string_map(Some(item))).collect()),
        other => Err(CastError::new(other.type_name(), "string map slice")),
    }
}

/// Coerce an array into mappings, empty on failure
pub fn to_string_map_slice(node: Option<&Node>) -> Vec<Mapping> {
    resolve(node, try_to_string_map_slice)
}

// =============================================================================
// Maps
// =============================================================================

/// Decode a string that holds a JSON object
fn mapping_from_json_str(s: &str) -> Option<Mapping> {
    Node::from_json_slice(s.as_bytes()).ok()
}

/// Coerce a node into a mapping
///
/// Objects are copied; strings holding a JSON object are decoded.
pub fn try_to_string_map(node: &Node) -> Result<Mapping, CastError> {
    match node {
        Node::Object(obj) => Ok(obj.clone()),
        Node::String(s) => mapping_from_json_str(s).ok_or(CastError::new("String", "string map")),
        other => Err(CastError::new(other.type_name(), "string map")),
    }
}

/// Coerce a node into a mapping, empty on failure
pub fn to_string_map(node: Option<&Node>) -> Mapping {
    resolve(node, try_to_string_map)
}

/// Coerce a node into a map of strings (values converted individually)
pub fn try_to_string_map_string(node: &Node) -> Result<HashMap<String, String>, CastError> {
    let map = try_to_string_map(node).map_err(|e| CastError::new(e.from, "string map of string"))?;
    Ok(map
        .iter()
        .map(|(k, v)| (k.clone(), to_string(Some(v))))
        .collect())
}

/// Coerce a node into a map of strings, empty on failure
pub fn to_string_map_string(node: Option<&Node>) -> HashMap<String, String> {
    resolve(node, try_to_string_map_string)
}

/// Coerce a node into a map of string vectors
///
/// Array values convert element-wise; any other value becomes a one-element
/// vector holding its string form.
pub fn try_to_string_map_string_slice(
    node: &Node,
) -> Result<HashMap<String, Vec<String>>, CastError> {
    let map = try_to_string_map(node)
        .map_err(|e| CastError::new(e.from, "string map of string slice"))?;
    Ok(map
        .iter()
        .map(|(k, v)| {
            let values = match v {
                Node::Array(_) => to_string_slice(Some(v)),
                other => vec![to_string(Some(other))],
            };
            (k.clone(), values)
        })
        .collect())
}

/// Coerce a node into a map of string vectors, empty on failure
pub fn to_string_map_string_slice(node: Option<&Node>) -> HashMap<String, Vec<String>> {
    resolve(node, try_to_string_map_string_slice)
}
