//! End-to-end tests over a decoded fixture document

use crate::test_utils::*;

#[test]
fn test_fixture_bool_lookup() {
    let store = PathStore::from_json(fixture_bytes());
    assert!(store.get_bool("event:simulator"));
}

#[test]
fn test_fixture_sub_store_from_string_map_slice() {
    let store = PathStore::from_json(fixture_bytes());

    let mut contexts = store.get_string_map_slice("clientContext");
    assert_eq!(contexts.len(), 2);

    let first = PathStore::new(contexts.remove(0));
    assert_eq!(first.get_int("payload:offsetInMilliseconds"), 111);

    let second = PathStore::new(contexts.remove(0));
    assert_eq!(second.get_int("payload:offsetInMilliseconds"), 1023785);
}

#[test]
fn test_fixture_context_is_a_sequence_not_a_mapping() {
    let store = PathStore::from_json(fixture_bytes());
    assert!(store.get("clientContext:1:payload").is_none());
    assert_eq!(
        store.shadow_path("clientContext:1:payload").as_deref(),
        Some("clientContext")
    );
}

#[test]
fn test_fixture_data_and_set() {
    let mut store = PathStore::from_json(fixture_bytes());
    store.set("name", "jack");

    assert_eq!(store.data()["name"], Node::from("jack"));
    assert_eq!(store.data().len(), 3);
}

#[test]
fn test_malformed_bytes_yield_empty_store() {
    let store = PathStore::from_json(b"{\"event\": ");
    assert!(store.data().is_empty());
    assert!(!store.get_bool("event:simulator"));
    assert_eq!(store.get_int("anything"), 0);
}

#[test]
fn test_size_strings_through_store() {
    let store = store_from(serde_json::json!({
        "kb": "1KB", "mb": "1MB", "gb": "1GB", "plain": "10", "negative": "-5"
    }));
    assert_eq!(store.get_size_in_bytes("kb"), 1024);
    assert_eq!(store.get_size_in_bytes("mb"), 1_048_576);
    assert_eq!(store.get_size_in_bytes("gb"), 1_073_741_824);
    assert_eq!(store.get_size_in_bytes("plain"), 10);
    assert_eq!(store.get_size_in_bytes("negative"), 0);
}
