//! Declarative type patterns for key applicability.
//!
//! A [`PropertyTypePattern`] describes a class of reflected property shapes a
//! metadata key supports. Patterns are pure data; the matching rules live in
//! the engine crate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::descriptor::{ContainerShape, PropertyCategory};
use crate::intern::SubtypeId;

/// A pattern over reflected property shapes.
///
/// Two patterns are equal iff all four fields match structurally; subtypes
/// compare by interned identity. A `wildcard` category matches any category;
/// a value pattern is only consulted when the container shape is [`Map`].
///
/// [`Map`]: ContainerShape::Map
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyTypePattern {
    /// Base category to match, or `Wildcard` for any.
    pub category: PropertyCategory,
    /// Exact subtype identity required, if any.
    pub subtype: Option<SubtypeId>,
    /// Required container shape (exact match, never wildcarded).
    pub container: ContainerShape,
    /// Pattern for the value side of map-shaped properties.
    pub value_pattern: Option<Box<PropertyTypePattern>>,
}

impl PropertyTypePattern {
    /// Creates a pattern matching any single-value property.
    #[must_use]
    pub fn wildcard() -> Self {
        Self::of(PropertyCategory::Wildcard)
    }

    /// Creates a single-value pattern for the given category.
    #[must_use]
    pub fn of(category: PropertyCategory) -> Self {
        Self {
            category,
            subtype: None,
            container: ContainerShape::None,
            value_pattern: None,
        }
    }

    /// Requires an exact subtype identity.
    #[must_use]
    pub fn with_subtype(mut self, subtype: SubtypeId) -> Self {
        self.subtype = Some(subtype);
        self
    }

    /// Requires the property to be array-shaped.
    #[must_use]
    pub fn in_array(mut self) -> Self {
        self.container = ContainerShape::Array;
        self
    }

    /// Requires the property to be set-shaped.
    #[must_use]
    pub fn in_set(mut self) -> Self {
        self.container = ContainerShape::Set;
        self
    }

    /// Requires the property to be map-shaped.
    #[must_use]
    pub fn in_map(mut self) -> Self {
        self.container = ContainerShape::Map;
        self
    }

    /// Constrains the value side of a map-shaped property.
    ///
    /// Only the value pattern's category and subtype are consulted.
    #[must_use]
    pub fn with_value_pattern(mut self, value: PropertyTypePattern) -> Self {
        self.value_pattern = Some(Box::new(value));
        self
    }
}

impl Default for PropertyTypePattern {
    fn default() -> Self {
        Self::wildcard()
    }
}
