//! Integration tests for attachment validation.

use std::collections::HashSet;

use metakey_engine::{AttachmentValidator, Violation};
use metakey_foundation::KeyType;
use metakey_registry::{ClassGraph, KeyRegistry, MetaDataKey, default_registry};

fn catalog() -> KeyRegistry {
    let mut interner = metakey_foundation::Interner::new();
    let mut classes = ClassGraph::new();
    default_registry(&mut interner, &mut classes)
}

fn attached(names: &[&str]) -> HashSet<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn companion_flow_attach_then_detach() {
    let registry = catalog();
    let hides = registry.get("EditConditionHides").unwrap();

    // Attaching without the companion is rejected.
    assert!(!AttachmentValidator::check(&registry, hides, &attached(&[])).is_allowed());

    // Attach EditCondition first, then EditConditionHides is accepted.
    let mut present = attached(&["EditCondition"]);
    assert!(AttachmentValidator::check(&registry, hides, &present).is_allowed());
    present.insert("EditConditionHides".to_string());

    // Detaching the companion afterwards does not retroactively un-attach;
    // validation only runs on new attachments.
    present.remove("EditCondition");
    assert!(present.contains("EditConditionHides"));
}

#[test]
fn incompatibility_applies_in_both_directions() {
    let registry = catalog();
    let bind = registry.get("BindWidget").unwrap();
    let optional = registry.get("BindWidgetOptional").unwrap();

    // Declared direction.
    assert!(
        !AttachmentValidator::check(&registry, bind, &attached(&["BindWidgetOptional"]))
            .is_allowed()
    );
    // Reverse direction, via the attached key's declared set.
    assert!(
        !AttachmentValidator::check(&registry, optional, &attached(&["BindWidget"])).is_allowed()
    );
}

#[test]
fn exact_class_requires_allowed_classes() {
    let registry = catalog();
    let exact = registry.get("ExactClass").unwrap();

    let decision = AttachmentValidator::check(&registry, exact, &attached(&["AllowAbstract"]));
    assert_eq!(
        decision.violations(),
        &[Violation::MissingCompanion {
            key: "ExactClass".to_string(),
            companion: "AllowedClasses".to_string(),
        }]
    );

    assert!(
        AttachmentValidator::check(&registry, exact, &attached(&["AllowedClasses"])).is_allowed()
    );
}

#[test]
fn renamed_companion_breaks_silently() {
    // A registry edit that renames a referenced key leaves a stale weak
    // reference: the requirement keeps failing, nothing is reported as a
    // registry error.
    let mut registry = catalog();
    let removed = registry.remove("EditCondition").unwrap();
    registry.insert(MetaDataKey::new(
        "EditGate",
        removed.key_type,
        removed.description,
    ));

    let hides = registry.get("EditConditionHides").unwrap();
    assert!(!AttachmentValidator::check(&registry, hides, &attached(&["EditGate"])).is_allowed());
}

#[test]
fn unresolvable_attached_names_declare_nothing() {
    let registry = catalog();
    let bind = registry.get("BindWidget").unwrap();

    let decision =
        AttachmentValidator::check(&registry, bind, &attached(&["SomeProjectLocalKey"]));
    assert!(decision.is_allowed());
}

#[test]
fn multiple_violations_are_all_reported() {
    let registry = KeyRegistry::from_keys([
        MetaDataKey::new("A", KeyType::Flag, "")
            .requires("Missing")
            .incompatible_with("B")
            .incompatible_with("C"),
        MetaDataKey::new("B", KeyType::Flag, ""),
        MetaDataKey::new("C", KeyType::Flag, ""),
    ]);

    let a = registry.get("A").unwrap();
    let decision = AttachmentValidator::check(&registry, a, &attached(&["B", "C"]));
    assert_eq!(decision.violations().len(), 3);
}
