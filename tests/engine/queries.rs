//! Integration tests for key enumeration over the built-in catalog.

use metakey_engine::{NONE_KEY, QueryEngine};
use metakey_foundation::{ClassId, Interner, PropertyCategory, PropertyDescriptor};
use metakey_registry::{ClassGraph, KeyRegistry, default_registry};

fn build() -> (Interner, ClassGraph, KeyRegistry) {
    let mut interner = Interner::new();
    let mut classes = ClassGraph::new();
    let registry = default_registry(&mut interner, &mut classes);
    (interner, classes, registry)
}

#[test]
fn int_variable_gets_numeric_keys_but_not_float_only_rules() {
    let (_, classes, registry) = build();
    let property = PropertyDescriptor::of(PropertyCategory::Int);

    let names: Vec<&str> =
        QueryEngine::variable_keys(&registry, &classes, ClassId::BLUEPRINT, &property)
            .map(|k| k.name.as_str())
            .collect();

    assert!(names.contains(&"SliderExponent"));
    assert!(names.contains(&"Delta"));
    assert!(names.contains(&"ArrayClamp"));
    assert!(names.contains(&"EditCondition"));
    // Bool-only and struct-only keys stay out.
    assert!(!names.contains(&"InlineEditConditionToggle"));
    assert!(!names.contains(&"ShowOnlyInnerProperties"));
}

#[test]
fn float_variable_excludes_integer_only_keys() {
    let (_, classes, registry) = build();
    let property = PropertyDescriptor::of(PropertyCategory::Float);

    let names: Vec<&str> =
        QueryEngine::variable_keys(&registry, &classes, ClassId::BLUEPRINT, &property)
            .map(|k| k.name.as_str())
            .collect();

    assert!(names.contains(&"SliderExponent"));
    assert!(!names.contains(&"ArrayClamp"));
}

#[test]
fn array_variable_gets_array_keys() {
    let (_, classes, registry) = build();
    let property = PropertyDescriptor::of(PropertyCategory::Struct).in_array();

    let names: Vec<&str> =
        QueryEngine::variable_keys(&registry, &classes, ClassId::BLUEPRINT, &property)
            .map(|k| k.name.as_str())
            .collect();

    assert!(names.contains(&"NoElementDuplicate"));
    assert!(names.contains(&"TitleProperty"));
    // Wildcard-default keys apply to any property, arrays included.
    assert!(names.contains(&"EditCondition"));
    // Single-value struct keys do not leak into arrays.
    assert!(!names.contains(&"ShowOnlyInnerProperties"));
}

#[test]
fn map_variable_gets_map_keys() {
    let (_, classes, registry) = build();
    let property = PropertyDescriptor::of(PropertyCategory::Name)
        .in_map(PropertyDescriptor::of(PropertyCategory::Int));

    let names: Vec<&str> =
        QueryEngine::variable_keys(&registry, &classes, ClassId::BLUEPRINT, &property)
            .map(|k| k.name.as_str())
            .collect();

    assert!(names.contains(&"ForceInlineRow"));
    assert!(!names.contains(&"NoElementDuplicate"));
}

#[test]
fn widget_keys_require_the_widget_blueprint_class() {
    let (interner, classes, registry) = build();
    let widget_bp = interner.class("WidgetBlueprint").unwrap();
    let widget = interner.subtype("Widget").unwrap();

    let property = PropertyDescriptor::of(PropertyCategory::Object).with_subtype(widget);

    let base_names: Vec<&str> =
        QueryEngine::variable_keys(&registry, &classes, ClassId::BLUEPRINT, &property)
            .map(|k| k.name.as_str())
            .collect();
    assert!(!base_names.contains(&"BindWidget"));

    let widget_names: Vec<&str> =
        QueryEngine::variable_keys(&registry, &classes, widget_bp, &property)
            .map(|k| k.name.as_str())
            .collect();
    assert!(widget_names.contains(&"BindWidget"));
    assert!(widget_names.contains(&"BindWidgetOptional"));
    assert!(widget_names.contains(&"DesignerRebuild"));
}

#[test]
fn function_enumeration_ignores_property_patterns() {
    let (_, classes, registry) = build();

    let names: Vec<&str> = QueryEngine::function_keys(&registry, &classes, ClassId::BLUEPRINT)
        .map(|k| k.name.as_str())
        .collect();

    // DefaultToSelf has no property patterns at all yet appears.
    assert_eq!(names, vec!["DefaultToSelf"]);
}

#[test]
fn function_only_keys_never_enumerate_for_variables() {
    let (_, classes, registry) = build();

    for category in [
        PropertyCategory::Bool,
        PropertyCategory::Int,
        PropertyCategory::String,
        PropertyCategory::Struct,
        PropertyCategory::Object,
    ] {
        let property = PropertyDescriptor::of(category);
        let names: Vec<&str> =
            QueryEngine::variable_keys(&registry, &classes, ClassId::BLUEPRINT, &property)
                .map(|k| k.name.as_str())
                .collect();
        assert!(!names.contains(&"DefaultToSelf"));
    }
}

#[test]
fn results_come_back_in_registry_order() {
    let (_, classes, registry) = build();
    let property = PropertyDescriptor::of(PropertyCategory::Int);

    let names: Vec<&str> =
        QueryEngine::variable_keys(&registry, &classes, ClassId::BLUEPRINT, &property)
            .map(|k| k.name.as_str())
            .collect();

    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn key_names_lists_sentinel_then_sorted_names() {
    let (_, _, registry) = build();

    let names = QueryEngine::key_names(&registry);
    assert_eq!(names[0], NONE_KEY);
    let rest = &names[1..];
    let mut sorted = rest.to_vec();
    sorted.sort();
    assert_eq!(rest, sorted.as_slice());
    assert_eq!(rest.len(), registry.len());
}
