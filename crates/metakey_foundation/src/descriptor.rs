//! Reflected property descriptors.
//!
//! A [`PropertyDescriptor`] is the concrete shape the reflection source
//! reports for a blueprint member: a base category, an optional subtype
//! identity, a container shape, and (for maps) the value side's own shape.
//! The core never introspects memory layouts; descriptors are the whole
//! interface.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::intern::SubtypeId;

/// Base category of a reflected property type.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PropertyCategory {
    /// Boolean property.
    Bool,
    /// 8-bit integer (also the storage of byte-backed enums).
    Byte,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// String property.
    String,
    /// Name property (interned identifier string).
    Name,
    /// Localized text property.
    Text,
    /// Struct property (subtype names the struct).
    Struct,
    /// Hard object reference (subtype names the class).
    Object,
    /// Class reference (subtype names the base class).
    Class,
    /// Soft object reference.
    SoftObject,
    /// Soft class reference.
    SoftClass,
    /// Enum property (subtype names the enum).
    Enum,
    /// Interface reference.
    Interface,
    /// Matches any category when used in a pattern.
    Wildcard,
}

impl fmt::Debug for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::Int => "int",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Name => "name",
            Self::Text => "text",
            Self::Struct => "struct",
            Self::Object => "object",
            Self::Class => "class",
            Self::SoftObject => "soft-object",
            Self::SoftClass => "soft-class",
            Self::Enum => "enum",
            Self::Interface => "interface",
            Self::Wildcard => "wildcard",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Whether a property holds a single value, an array, a set, or a map.
///
/// Container shape is an exact-match field in patterns, never wildcarded.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContainerShape {
    /// A single value.
    #[default]
    None,
    /// An ordered array of values.
    Array,
    /// An unordered set of values.
    Set,
    /// A key-to-value map.
    Map,
}

impl fmt::Debug for ContainerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Array => "array",
            Self::Set => "set",
            Self::Map => "map",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for ContainerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The reflected shape of a blueprint member.
///
/// For map-shaped properties, `value` describes the value side; only its
/// category and subtype are consulted during matching.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyDescriptor {
    /// Base category of the property type.
    pub category: PropertyCategory,
    /// Subtype identity, relevant for struct/object/class/enum categories.
    pub subtype: Option<SubtypeId>,
    /// Container shape of the property.
    pub container: ContainerShape,
    /// Value-side descriptor for map-shaped properties.
    pub value: Option<Box<PropertyDescriptor>>,
}

impl PropertyDescriptor {
    /// Creates a single-value descriptor of the given category.
    #[must_use]
    pub fn of(category: PropertyCategory) -> Self {
        Self {
            category,
            subtype: None,
            container: ContainerShape::None,
            value: None,
        }
    }

    /// Sets the subtype identity.
    #[must_use]
    pub fn with_subtype(mut self, subtype: SubtypeId) -> Self {
        self.subtype = Some(subtype);
        self
    }

    /// Marks the property as array-shaped.
    #[must_use]
    pub fn in_array(mut self) -> Self {
        self.container = ContainerShape::Array;
        self
    }

    /// Marks the property as set-shaped.
    #[must_use]
    pub fn in_set(mut self) -> Self {
        self.container = ContainerShape::Set;
        self
    }

    /// Marks the property as map-shaped with the given value side.
    #[must_use]
    pub fn in_map(mut self, value: PropertyDescriptor) -> Self {
        self.container = ContainerShape::Map;
        self.value = Some(Box::new(value));
        self
    }
}
