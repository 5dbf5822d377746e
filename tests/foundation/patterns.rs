//! Integration tests for type patterns.

use metakey_foundation::{ContainerShape, Interner, PropertyCategory, PropertyTypePattern};

#[test]
fn default_pattern_is_wildcard() {
    let pattern = PropertyTypePattern::default();
    assert_eq!(pattern.category, PropertyCategory::Wildcard);
    assert_eq!(pattern.container, ContainerShape::None);
}

#[test]
fn patterns_compare_across_all_four_fields() {
    let mut interner = Interner::new();
    let widget = interner.intern_subtype("Widget");

    let base = PropertyTypePattern::of(PropertyCategory::Object);
    let with_subtype = base.clone().with_subtype(widget);
    let in_array = base.clone().in_array();
    let with_value = base
        .clone()
        .with_value_pattern(PropertyTypePattern::wildcard())
        .in_map();

    assert_eq!(base, PropertyTypePattern::of(PropertyCategory::Object));
    assert_ne!(base, with_subtype);
    assert_ne!(base, in_array);
    assert_ne!(base, with_value);
    assert_ne!(with_subtype, in_array);
}

#[test]
fn patterns_hash_consistently_with_equality() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(PropertyTypePattern::of(PropertyCategory::Int));
    set.insert(PropertyTypePattern::of(PropertyCategory::Int));
    set.insert(PropertyTypePattern::of(PropertyCategory::Int).in_array());

    assert_eq!(set.len(), 2);
}
