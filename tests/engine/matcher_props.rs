//! Property-based tests for matcher universals.

use proptest::prelude::*;

use metakey_engine::TypeMatcher;
use metakey_foundation::{
    ContainerShape, Interner, PropertyCategory, PropertyDescriptor, PropertyTypePattern,
};

fn category_strategy() -> impl Strategy<Value = PropertyCategory> {
    prop_oneof![
        Just(PropertyCategory::Bool),
        Just(PropertyCategory::Byte),
        Just(PropertyCategory::Int),
        Just(PropertyCategory::Int64),
        Just(PropertyCategory::Float),
        Just(PropertyCategory::Double),
        Just(PropertyCategory::String),
        Just(PropertyCategory::Name),
        Just(PropertyCategory::Text),
        Just(PropertyCategory::Struct),
        Just(PropertyCategory::Object),
        Just(PropertyCategory::Class),
        Just(PropertyCategory::SoftObject),
        Just(PropertyCategory::SoftClass),
        Just(PropertyCategory::Enum),
        Just(PropertyCategory::Interface),
    ]
}

fn shape_strategy() -> impl Strategy<Value = ContainerShape> {
    prop_oneof![
        Just(ContainerShape::None),
        Just(ContainerShape::Array),
        Just(ContainerShape::Set),
        Just(ContainerShape::Map),
    ]
}

fn descriptor_strategy() -> impl Strategy<Value = PropertyDescriptor> {
    (
        category_strategy(),
        proptest::option::of(0u32..4),
        shape_strategy(),
        category_strategy(),
    )
        .prop_map(|(category, subtype_pick, container, value_category)| {
            let mut interner = Interner::new();
            let subtype = subtype_pick.map(|i| {
                let names = ["Widget", "GameplayTag", "DataTable", "LinearColor"];
                interner.intern_subtype(names[i as usize])
            });

            let mut descriptor = PropertyDescriptor::of(category);
            descriptor.subtype = subtype;
            descriptor.container = container;
            if container == ContainerShape::Map {
                descriptor.value = Some(Box::new(PropertyDescriptor::of(value_category)));
            }
            descriptor
        })
}

proptest! {
    /// A set holding only the wildcard pattern matches every descriptor,
    /// including ones with non-default container shapes.
    #[test]
    fn wildcard_matches_every_descriptor(descriptor in descriptor_strategy()) {
        let pattern = PropertyTypePattern::wildcard();

        prop_assert!(TypeMatcher::matches_any(&[pattern], &descriptor));
    }

    /// The empty pattern set matches nothing.
    #[test]
    fn empty_set_matches_nothing(descriptor in descriptor_strategy()) {
        prop_assert!(!TypeMatcher::matches_any(&[], &descriptor));
    }

    /// A non-wildcarded category pattern only ever matches its own category.
    #[test]
    fn category_patterns_are_exact(
        pattern_category in category_strategy(),
        descriptor in descriptor_strategy(),
    ) {
        let mut pattern = PropertyTypePattern::of(pattern_category);
        pattern.container = descriptor.container;

        if TypeMatcher::matches(&pattern, &descriptor) {
            prop_assert_eq!(pattern_category, descriptor.category);
        }
    }

    /// For category-pinned patterns, container shape is an exact-match
    /// field: a pattern with a different shape never matches.
    #[test]
    fn container_shape_never_crosses(
        descriptor in descriptor_strategy(),
        pattern_category in category_strategy(),
        pattern_shape in shape_strategy(),
    ) {
        let mut pattern = PropertyTypePattern::of(pattern_category);
        pattern.container = pattern_shape;

        if pattern_shape != descriptor.container {
            prop_assert!(!TypeMatcher::matches(&pattern, &descriptor));
        }
    }
}
