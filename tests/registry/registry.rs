//! Integration tests for registry ordering and membership.

use metakey_foundation::KeyType;
use metakey_registry::{KeyRegistry, MetaDataKey};

fn key(name: &str) -> MetaDataKey {
    MetaDataKey::new(name, KeyType::Flag, "")
}

#[test]
fn sort_order_is_independent_of_insertion_order() {
    let forward = KeyRegistry::from_keys([key("Alpha"), key("Beta"), key("Gamma")]);
    let reverse = KeyRegistry::from_keys([key("Gamma"), key("Beta"), key("Alpha")]);

    assert_eq!(forward.key_names(), reverse.key_names());
    assert_eq!(forward.key_names(), vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn duplicate_insertion_collapses_silently() {
    let registry = KeyRegistry::from_keys([
        key("Delta"),
        MetaDataKey::new("Delta", KeyType::Integer, "second"),
        key("Echo"),
    ]);

    assert_eq!(registry.len(), 2);
    // Last write wins.
    assert_eq!(registry.get("Delta").unwrap().key_type, KeyType::Integer);
}

#[test]
fn lookup_is_by_exact_name() {
    let registry = KeyRegistry::from_keys([key("BindWidget")]);

    assert!(registry.get("BindWidget").is_some());
    assert!(registry.get("bindwidget").is_none());
    assert!(registry.get("BindWidgetOptional").is_none());
}

#[test]
fn cheap_snapshots_are_isolated_from_edits() {
    let mut live = KeyRegistry::from_keys([key("A"), key("B")]);
    let snapshot = live.clone();

    live.remove("A");
    live.insert(key("C"));

    assert_eq!(snapshot.key_names(), vec!["A", "B"]);
    assert_eq!(live.key_names(), vec!["B", "C"]);
}

#[test]
fn iteration_matches_key_names() {
    let registry = KeyRegistry::from_keys([key("B"), key("A")]);
    let iterated: Vec<String> = registry.iter().map(|k| k.name.clone()).collect();
    assert_eq!(iterated, registry.key_names());
}
