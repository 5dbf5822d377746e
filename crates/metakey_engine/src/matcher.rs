//! Pattern matching over reflected property descriptors.
//!
//! Decides whether a concrete property shape is matched by a declared
//! pattern set, and whether a key's blueprint-class restriction covers a
//! given class.

use metakey_foundation::{
    ClassId, ContainerShape, PropertyCategory, PropertyDescriptor, PropertyTypePattern,
};
use metakey_registry::{ClassAncestry, MetaDataKey};

/// Matches declared patterns against reflected property descriptors.
pub struct TypeMatcher;

impl TypeMatcher {
    /// Returns true if a single pattern matches a property descriptor.
    ///
    /// A pattern matches iff the category matches (wildcard matches any),
    /// a declared subtype matches by exact identity, the container shape
    /// matches exactly, and, for map-shaped patterns with a value pattern,
    /// the property's value side matches the value pattern's category and
    /// subtype.
    ///
    /// The pure wildcard pattern (wildcard category, no container
    /// requirement) means "any property" and matches every shape. A pattern
    /// that pins a container shape matches that shape exactly, even with a
    /// wildcard category.
    #[must_use]
    pub fn matches(pattern: &PropertyTypePattern, property: &PropertyDescriptor) -> bool {
        if !Self::category_matches(pattern.category, property.category) {
            return false;
        }
        if pattern.subtype.is_some() && pattern.subtype != property.subtype {
            return false;
        }
        let any_shape = pattern.category == PropertyCategory::Wildcard
            && pattern.container == ContainerShape::None;
        if !any_shape && pattern.container != property.container {
            return false;
        }
        if pattern.container == ContainerShape::Map {
            if let Some(value_pattern) = &pattern.value_pattern {
                let Some(value) = &property.value else {
                    return false;
                };
                if !Self::category_matches(value_pattern.category, value.category) {
                    return false;
                }
                if value_pattern.subtype.is_some() && value_pattern.subtype != value.subtype {
                    return false;
                }
            }
        }
        true
    }

    /// Returns true if any pattern in the set matches the descriptor.
    ///
    /// An empty set matches nothing; this is how "functions only, no
    /// property applicability" is expressed, and is distinct from a
    /// wildcard pattern, which matches everything.
    #[must_use]
    pub fn matches_any(patterns: &[PropertyTypePattern], property: &PropertyDescriptor) -> bool {
        patterns.iter().any(|p| Self::matches(p, property))
    }

    /// Returns true if the key's blueprint restriction covers `class`.
    ///
    /// Hierarchy-aware, unlike property subtype matching: the class
    /// qualifies if it is a listed class or a subclass of one.
    #[must_use]
    pub fn supports_blueprint<A: ClassAncestry>(
        key: &MetaDataKey,
        class: ClassId,
        ancestry: &A,
    ) -> bool {
        key.supported_blueprints
            .iter()
            .any(|&restriction| ancestry.is_a(class, restriction))
    }

    fn category_matches(pattern: PropertyCategory, property: PropertyCategory) -> bool {
        pattern == PropertyCategory::Wildcard || pattern == property
    }
}
