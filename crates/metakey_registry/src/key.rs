//! Metadata key definitions.
//!
//! A [`MetaDataKey`] is the declarative unit a project maintainer authors:
//! which properties and blueprints it applies to, what kind of value it
//! carries, and how it relates to other keys. Definitions are built once at
//! configuration time through the fluent setters and treated as read-only
//! values during queries.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use metakey_foundation::{ClassId, KeyType, PropertyTypePattern};

/// A declarative metadata key definition.
///
/// The name doubles as the annotation key and the registry membership key;
/// it is case-sensitive. The setters perform no validation: a malformed
/// combination (numeric bounds on a flag key) is inert, never flagged. The
/// catalog is authored by a trusted maintainer, not untrusted input.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetaDataKey {
    /// Unique, case-sensitive key name.
    pub name: String,
    /// Kind of value the key carries.
    pub key_type: KeyType,
    /// Human description shown in the editing UI.
    pub description: String,
    /// Optional UI category path for grouping (e.g. `"UMG|Bind Widget"`).
    pub category: Option<String>,
    /// Property-type patterns this key applies to. Empty means the key has
    /// no property applicability at all (distinct from wildcard).
    pub supported_properties: Vec<PropertyTypePattern>,
    /// Blueprint classes this key is restricted to. Matching is
    /// hierarchy-aware: a subclass of a listed class also qualifies.
    pub supported_blueprints: HashSet<ClassId>,
    /// Whether the key may attach to functions.
    pub can_be_used_by_functions: bool,
    /// Whether numeric entry widgets may show a slider.
    pub allow_slider: bool,
    /// Minimum accepted integer value.
    pub min_int: i64,
    /// Maximum accepted integer value.
    pub max_int: i64,
    /// Slider lower bound for integer entry.
    pub min_slider_int: i64,
    /// Slider upper bound for integer entry.
    pub max_slider_int: i64,
    /// Minimum accepted float value.
    pub min_float: f64,
    /// Maximum accepted float value.
    pub max_float: f64,
    /// Slider lower bound for float entry.
    pub min_slider_float: f64,
    /// Slider upper bound for float entry.
    pub max_slider_float: f64,
    /// Values the user may select from when the kind is `ValueList`.
    pub value_list: Vec<String>,
    /// Name of a key that must already be attached before this one may be.
    pub required_key: Option<String>,
    /// Names of keys that may not be attached alongside this one.
    pub incompatible_keys: HashSet<String>,
}

impl MetaDataKey {
    /// Creates a key definition with default applicability: any property on
    /// any blueprint, variables only.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        key_type: KeyType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            key_type,
            description: description.into(),
            category: None,
            supported_properties: vec![PropertyTypePattern::wildcard()],
            supported_blueprints: HashSet::from([ClassId::BLUEPRINT]),
            can_be_used_by_functions: false,
            allow_slider: true,
            min_int: i64::MIN,
            max_int: i64::MAX,
            min_slider_int: 0,
            max_slider_int: 100,
            min_float: f64::MIN,
            max_float: f64::MAX,
            min_slider_float: 0.0,
            max_slider_float: 100.0,
            value_list: Vec::new(),
            required_key: None,
            incompatible_keys: HashSet::new(),
        }
    }

    /// Sets the UI category path.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Adds a supported property pattern. Structural duplicates are ignored.
    #[must_use]
    pub fn with_pattern(mut self, pattern: PropertyTypePattern) -> Self {
        if !self.supported_properties.contains(&pattern) {
            self.supported_properties.push(pattern);
        }
        self
    }

    /// Replaces the supported patterns with a single pattern.
    #[must_use]
    pub fn only_pattern(mut self, pattern: PropertyTypePattern) -> Self {
        self.supported_properties.clear();
        self.supported_properties.push(pattern);
        self
    }

    /// Replaces the supported patterns with the given set.
    #[must_use]
    pub fn with_patterns(mut self, patterns: impl IntoIterator<Item = PropertyTypePattern>) -> Self {
        self.supported_properties.clear();
        for pattern in patterns {
            self = self.with_pattern(pattern);
        }
        self
    }

    /// Removes all property applicability.
    #[must_use]
    pub fn clear_patterns(mut self) -> Self {
        self.supported_properties.clear();
        self
    }

    /// Adds a supported blueprint class.
    #[must_use]
    pub fn with_blueprint(mut self, class: ClassId) -> Self {
        self.supported_blueprints.insert(class);
        self
    }

    /// Restricts the key to a single blueprint class.
    #[must_use]
    pub fn only_blueprint(mut self, class: ClassId) -> Self {
        self.supported_blueprints.clear();
        self.supported_blueprints.insert(class);
        self
    }

    /// Sets whether the key may attach to functions.
    #[must_use]
    pub fn usable_by_functions(mut self, usable: bool) -> Self {
        self.can_be_used_by_functions = usable;
        self
    }

    /// Marks the key as a function key and clears all property
    /// applicability.
    ///
    /// Patterns added *after* this call re-introduce property applicability;
    /// calling it last is the only well-defined order.
    #[must_use]
    pub fn functions_only(mut self) -> Self {
        self.can_be_used_by_functions = true;
        self.supported_properties.clear();
        self
    }

    /// Sets whether numeric entry may show a slider.
    #[must_use]
    pub fn with_slider_allowed(mut self, allow: bool) -> Self {
        self.allow_slider = allow;
        self
    }

    /// Sets the minimum accepted integer value.
    #[must_use]
    pub fn with_min_int(mut self, min: i64) -> Self {
        debug_assert!(
            self.key_type == KeyType::Integer,
            "integer bounds on a {} key are inert",
            self.key_type
        );
        self.min_int = min;
        self
    }

    /// Sets the maximum accepted integer value.
    #[must_use]
    pub fn with_max_int(mut self, max: i64) -> Self {
        debug_assert!(
            self.key_type == KeyType::Integer,
            "integer bounds on a {} key are inert",
            self.key_type
        );
        self.max_int = max;
        self
    }

    /// Sets the integer slider range.
    #[must_use]
    pub fn with_int_slider(mut self, min: i64, max: i64) -> Self {
        self.min_slider_int = min;
        self.max_slider_int = max;
        self
    }

    /// Sets the minimum accepted float value.
    #[must_use]
    pub fn with_min_float(mut self, min: f64) -> Self {
        debug_assert!(
            self.key_type == KeyType::Float,
            "float bounds on a {} key are inert",
            self.key_type
        );
        self.min_float = min;
        self
    }

    /// Sets the maximum accepted float value.
    #[must_use]
    pub fn with_max_float(mut self, max: f64) -> Self {
        debug_assert!(
            self.key_type == KeyType::Float,
            "float bounds on a {} key are inert",
            self.key_type
        );
        self.max_float = max;
        self
    }

    /// Sets the float slider range.
    #[must_use]
    pub fn with_float_slider(mut self, min: f64, max: f64) -> Self {
        self.min_slider_float = min;
        self.max_slider_float = max;
        self
    }

    /// Replaces the value list.
    #[must_use]
    pub fn with_value_list(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.value_list = values.into_iter().map(Into::into).collect();
        self
    }

    /// Declares a companion key that must already be attached.
    #[must_use]
    pub fn requires(mut self, key: impl Into<String>) -> Self {
        self.required_key = Some(key.into());
        self
    }

    /// Declares a key that may not be attached alongside this one.
    #[must_use]
    pub fn incompatible_with(mut self, key: impl Into<String>) -> Self {
        self.incompatible_keys.insert(key.into());
        self
    }
}
