//! Value kinds for metadata keys.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of value a metadata key carries.
///
/// Determines which editing widget the UI renders and how the raw annotation
/// string is parsed and validated.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyType {
    /// Present-or-absent marker with no value.
    Flag,
    /// Explicit true/false value.
    Bool,
    /// Free-form string value.
    String,
    /// Integer value, optionally bounded.
    Integer,
    /// Floating-point value, optionally bounded.
    Float,
    /// A single gameplay tag path.
    GameplayTag,
    /// One or more gameplay tag paths.
    GameplayTagContainer,
    /// A value selected from the key's declared list.
    ValueList,
}

impl KeyType {
    /// Returns true if this kind carries a numeric value.
    ///
    /// Numeric bounds and slider ranges are only meaningful for these kinds.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

impl fmt::Debug for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Flag => "flag",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::GameplayTag => "gameplay-tag",
            Self::GameplayTagContainer => "gameplay-tag-container",
            Self::ValueList => "value-list",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
