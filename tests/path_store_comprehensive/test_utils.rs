//! Test utilities for PathStore comprehensive tests

pub use entity::{Mapping, Node, PathStore};

/// Raw bytes of the fixture document
pub fn fixture_bytes() -> Vec<u8> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/test_data.json");
    std::fs::read(path).expect("Failed to read fixture document")
}

/// Build a store from a JSON literal
pub fn store_from(value: serde_json::Value) -> PathStore {
    PathStore::from_json(value.to_string())
}
