//! Integration tests for the built-in catalog.

use metakey_foundation::{Interner, KeyType, PropertyCategory};
use metakey_registry::{ClassGraph, default_registry};

fn build() -> (Interner, ClassGraph, metakey_registry::KeyRegistry) {
    let mut interner = Interner::new();
    let mut classes = ClassGraph::new();
    let registry = default_registry(&mut interner, &mut classes);
    (interner, classes, registry)
}

#[test]
fn catalog_contains_the_shipped_keys() {
    let (_, _, registry) = build();

    for name in [
        "AllowAbstract",
        "AllowedClasses",
        "ArrayClamp",
        "AssetBundles",
        "BindWidget",
        "BindWidgetAnim",
        "Categories",
        "DefaultToSelf",
        "Delta",
        "DisplayPriority",
        "EditCondition",
        "ForceInlineRow",
        "GetOptions",
        "HideAlphaChannel",
        "NoElementDuplicate",
        "RowType",
        "ShowOnlyInnerProperties",
        "SliderExponent",
        "TitleProperty",
        "ValidEnumValues",
    ] {
        assert!(registry.contains(name), "catalog is missing {name}");
    }
}

#[test]
fn numeric_keys_are_merged_across_widths() {
    let (_, _, registry) = build();

    let delta = registry.get("Delta").unwrap();
    let categories: Vec<PropertyCategory> = delta
        .supported_properties
        .iter()
        .map(|p| p.category)
        .collect();

    assert!(categories.contains(&PropertyCategory::Int));
    assert!(categories.contains(&PropertyCategory::Int64));
    assert!(categories.contains(&PropertyCategory::Float));
    assert!(categories.contains(&PropertyCategory::Double));
}

#[test]
fn slider_exponent_declares_a_lower_bound() {
    let (_, _, registry) = build();

    let key = registry.get("SliderExponent").unwrap();
    assert_eq!(key.key_type, KeyType::Float);
    assert!((key.min_float - 1.0).abs() < f64::EPSILON);
}

#[test]
fn bind_widget_keys_target_widget_subtypes() {
    let (interner, _, registry) = build();
    let widget = interner.subtype("Widget").unwrap();
    let animation = interner.subtype("WidgetAnimation").unwrap();

    let bind = registry.get("BindWidget").unwrap();
    assert_eq!(bind.supported_properties.len(), 1);
    assert_eq!(bind.supported_properties[0].subtype, Some(widget));

    let anim = registry.get("BindWidgetAnim").unwrap();
    assert_eq!(anim.supported_properties[0].subtype, Some(animation));
}

#[test]
fn umg_keys_carry_category_paths() {
    let (_, _, registry) = build();

    assert_eq!(
        registry.get("DesignerRebuild").unwrap().category.as_deref(),
        Some("UMG")
    );
    assert_eq!(
        registry.get("BindWidget").unwrap().category.as_deref(),
        Some("UMG|Bind Widget")
    );
}
