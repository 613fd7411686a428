//! Typed accessors
//!
//! Each accessor looks the key up with [`PathStore::get`] and coerces the
//! result through [`entity_core::cast`]. Absent keys and values that fail to
//! coerce both produce the zero value of the target type.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use entity_core::{cast, parse_size_in_bytes, Mapping, Node};

use crate::store::PathStore;

impl PathStore {
    /// Value at `key` as a string.
    pub fn get_string(&self, key: &str) -> String {
        cast::to_string(self.get(key))
    }

    /// Value at `key` as a boolean.
    pub fn get_bool(&self, key: &str) -> bool {
        cast::to_bool(self.get(key))
    }

    /// Value at `key` as a platform-width integer.
    pub fn get_int(&self, key: &str) -> isize {
        cast::to_isize(self.get(key))
    }

    /// Value at `key` as an `i8`.
    pub fn get_int8(&self, key: &str) -> i8 {
        cast::to_i8(self.get(key))
    }

    /// Value at `key` as an `i32`.
    pub fn get_int32(&self, key: &str) -> i32 {
        cast::to_i32(self.get(key))
    }

    /// Value at `key` as an `i64`.
    pub fn get_int64(&self, key: &str) -> i64 {
        cast::to_i64(self.get(key))
    }

    /// Value at `key` as a platform-width unsigned integer.
    pub fn get_uint(&self, key: &str) -> usize {
        cast::to_usize(self.get(key))
    }

    /// Value at `key` as a `u8`.
    pub fn get_uint8(&self, key: &str) -> u8 {
        cast::to_u8(self.get(key))
    }

    /// Value at `key` as a `u32`.
    pub fn get_uint32(&self, key: &str) -> u32 {
        cast::to_u32(self.get(key))
    }

    /// Value at `key` as a `u64`.
    pub fn get_uint64(&self, key: &str) -> u64 {
        cast::to_u64(self.get(key))
    }

    /// Value at `key` as an `f64`.
    pub fn get_float64(&self, key: &str) -> f64 {
        cast::to_f64(self.get(key))
    }

    /// Value at `key` as a UTC timestamp (Unix epoch when absent).
    pub fn get_time(&self, key: &str) -> DateTime<Utc> {
        cast::to_time(self.get(key))
    }

    /// Value at `key` as a duration.
    pub fn get_duration(&self, key: &str) -> Duration {
        cast::to_duration(self.get(key))
    }

    /// Value at `key` as a vector of nodes.
    pub fn get_slice(&self, key: &str) -> Vec<Node> {
        cast::to_slice(self.get(key))
    }

    /// Value at `key` as a vector of integers.
    pub fn get_int_slice(&self, key: &str) -> Vec<isize> {
        cast::to_int_slice(self.get(key))
    }

    /// Value at `key` as a vector of strings.
    pub fn get_string_slice(&self, key: &str) -> Vec<String> {
        cast::to_string_slice(self.get(key))
    }

    /// Value at `key` as a vector of mappings.
    ///
    /// Each mapping can be wrapped in its own store:
    ///
    /// ```
    /// use entity_store::PathStore;
    ///
    /// let store = PathStore::from_json(r#"{"items": [{"id": 1}, {"id": 2}]}"#);
    /// let second = store.get_string_map_slice("items").remove(1);
    /// assert_eq!(PathStore::new(second).get_int("id"), 2);
    /// ```
    pub fn get_string_map_slice(&self, key: &str) -> Vec<Mapping> {
        cast::to_string_map_slice(self.get(key))
    }

    /// Value at `key` as a mapping.
    pub fn get_string_map(&self, key: &str) -> Mapping {
        cast::to_string_map(self.get(key))
    }

    /// Value at `key` as a map of strings.
    pub fn get_string_map_string(&self, key: &str) -> HashMap<String, String> {
        cast::to_string_map_string(self.get(key))
    }

    /// Value at `key` as a map of string vectors.
    pub fn get_string_map_string_slice(&self, key: &str) -> HashMap<String, Vec<String>> {
        cast::to_string_map_string_slice(self.get(key))
    }

    /// Size in bytes of the value at `key` (`"1GB"`, `"12 mb"`, `"512"`).
    pub fn get_size_in_bytes(&self, key: &str) -> u64 {
        parse_size_in_bytes(&self.get_string(key))
    }
}
