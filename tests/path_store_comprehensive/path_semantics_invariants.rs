//! Path Semantics Invariants
//!
//! **Invariant**: a path is readable only if every strict prefix resolves to
//! a mapping; writes make every strict prefix a mapping.

use crate::test_utils::*;
use std::collections::HashMap;

/// Absent paths read as None, never as an error.
#[test]
fn test_absent_paths_on_empty_store() {
    let store = PathStore::default();
    for key in ["a", "a:b", "a:b:c", "", ":", "::x"] {
        assert!(store.get(key).is_none(), "expected {key:?} to be absent");
    }
}

/// A scalar at a prefix shadows every deeper path.
#[test]
fn test_scalar_prefix_shadows_deeper_paths() {
    let mut store = PathStore::default();
    store.set("a", 5);

    assert!(store.get("a:b").is_none());
    assert!(store.get("a:b:c").is_none());
    assert_eq!(store.shadow_path("a:b").as_deref(), Some("a"));
    assert_eq!(store.get_int("a"), 5);
}

/// Writing a scalar over a subtree hides the old subtree from reads.
#[test]
fn test_scalar_write_hides_old_subtree() {
    let mut store = PathStore::default();
    store.set("a:b:c", 1);

    let a = store.get("a").and_then(Node::as_object).unwrap();
    assert!(a["b"].is_object());
    assert_eq!(store.get("a:b:c"), Some(&Node::Int(1)));

    store.set("a", "x");
    assert!(store.get("a:b:c").is_none());
    assert_eq!(store.get_string("a"), "x");
}

/// Writing through a scalar replaces it with a mapping.
#[test]
fn test_write_through_scalar_vivifies() {
    let mut store = store_from(serde_json::json!({"a": {"b": "leaf"}}));
    store.set("a:b:c:d", true);

    assert!(store.get("a:b").unwrap().is_object());
    assert!(store.get("a:b:c").unwrap().is_object());
    assert!(store.get_bool("a:b:c:d"));
    assert_eq!(store.shadow_path("a:b:c:d"), None);
}

/// Siblings of the write path are untouched.
#[test]
fn test_write_preserves_siblings() {
    let mut store = store_from(serde_json::json!({"a": {"keep": 1, "b": {"keep": 2}}}));
    store.set("a:b:new", 3);

    assert_eq!(store.get_int("a:keep"), 1);
    assert_eq!(store.get_int("a:b:keep"), 2);
    assert_eq!(store.get_int("a:b:new"), 3);
}

/// Last write wins at the same key.
#[test]
fn test_overwrite_same_key() {
    let mut store = PathStore::default();
    store.set("a", 1).set("a", 2);
    assert_eq!(store.get("a"), Some(&Node::Int(2)));
}

/// A stored mapping is independent of the caller's copy.
#[test]
fn test_stored_mapping_is_not_aliased() {
    let mut nested: HashMap<String, Node> = HashMap::new();
    nested.insert("Level".to_string(), Node::from("original"));
    let mut caller: HashMap<String, Node> = HashMap::new();
    caller.insert("Nested".to_string(), Node::from(nested));

    let mut store = PathStore::default();
    store.set("cfg", caller.clone());

    if let Some(Node::Object(inner)) = caller.get_mut("Nested") {
        inner.insert("Level".to_string(), Node::from("mutated"));
    }
    caller.clear();

    assert_eq!(store.get_string("cfg:Nested:Level"), "original");
}

/// Sequences are values, not mappings: they shadow deeper paths too.
#[test]
fn test_sequence_prefix_shadows() {
    let store = store_from(serde_json::json!({"list": [1, 2, 3]}));
    assert!(store.get("list:0").is_none());
    assert_eq!(store.get_int_slice("list"), vec![1, 2, 3]);
}

/// Each store carries its own delimiter.
#[test]
fn test_delimiter_is_per_instance() {
    let data: Mapping = PathStore::from_json(r#"{"a": {"b": 1}}"#).into_data();
    let colon = PathStore::new(data.clone());
    let dot = PathStore::new(data).with_delimiter(".");

    assert_eq!(colon.get_int("a:b"), 1);
    assert_eq!(colon.get_int("a.b"), 0);
    assert_eq!(dot.get_int("a.b"), 1);
    assert_eq!(dot.get_int("a:b"), 0);
}
