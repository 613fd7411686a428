//! Property-based tests for the read/write contract

use crate::test_utils::*;
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{0,8}"
}

fn key() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..5).prop_map(|segments| segments.join(":"))
}

fn scalar() -> impl Strategy<Value = Node> {
    prop_oneof![
        Just(Node::Null),
        any::<bool>().prop_map(Node::Bool),
        any::<i64>().prop_map(Node::Int),
        "[ -~]{0,16}".prop_map(Node::String),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_empty_store_has_nothing(k in key()) {
        let store = PathStore::default();
        prop_assert!(store.get(&k).is_none());
        prop_assert!(store.shadow_path(&k).is_none());
    }

    #[test]
    fn prop_set_then_get_roundtrip(k in key(), v in scalar()) {
        let mut store = PathStore::default();
        store.set(&k, v.clone());
        prop_assert_eq!(store.get(&k), Some(&v));
    }

    #[test]
    fn prop_roundtrip_survives_prior_writes(
        writes in prop::collection::vec((key(), scalar()), 0..8),
        k in key(),
        v in scalar(),
    ) {
        let mut store = PathStore::default();
        for (wk, wv) in writes {
            store.set(&wk, wv);
        }
        store.set(&k, v.clone());
        prop_assert_eq!(store.get(&k), Some(&v));
    }

    #[test]
    fn prop_scalar_shadows_extensions(
        k in key(),
        rest in key(),
        v in scalar().prop_filter("null is absent, not shadowing", |v| !v.is_null()),
    ) {
        let mut store = PathStore::default();
        store.set(&k, v);
        let deeper = format!("{}:{}", k, rest);
        prop_assert!(store.get(&deeper).is_none());
        prop_assert_eq!(store.shadow_path(&deeper), Some(k));
    }

    #[test]
    fn prop_prefixes_are_mappings_after_write(k in key(), v in scalar()) {
        let mut store = PathStore::default();
        store.set(&k, v);
        let segments: Vec<&str> = k.split(':').collect();
        for n in 1..segments.len() {
            let prefix = segments[..n].join(":");
            prop_assert!(store.get(&prefix).map(Node::is_object).unwrap_or(false));
        }
    }
}
