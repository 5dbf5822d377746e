//! Typed views of raw annotation strings.
//!
//! Metadata persists as `(key name, raw string)` pairs. [`MetaValue`] is the
//! typed view editing widgets work with: parse a raw string according to the
//! key's [`KeyType`], render it back when committing.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::KeyType;

/// A parsed annotation value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MetaValue {
    /// A flag; present with an empty raw value.
    Flag,
    /// An explicit boolean.
    Bool(bool),
    /// A free-form string.
    String(String),
    /// An integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A single gameplay tag path.
    Tag(String),
    /// A comma-joined container of gameplay tag paths.
    TagContainer(Vec<String>),
    /// An entry chosen from a key's value list.
    ListEntry(String),
}

impl MetaValue {
    /// Parses a raw annotation string according to a key type.
    ///
    /// Flags accept any raw value (the value is ignored). Tag containers
    /// split on commas and drop empty segments. List-entry membership is the
    /// widget layer's concern, not parsing.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidValue`] if the raw string does not parse
    /// for the key type.
    ///
    /// [`ErrorKind::InvalidValue`]: crate::error::ErrorKind::InvalidValue
    pub fn parse(key_type: KeyType, raw: &str) -> Result<Self> {
        match key_type {
            KeyType::Flag => Ok(Self::Flag),
            KeyType::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(Self::Bool(true)),
                "false" => Ok(Self::Bool(false)),
                _ => Err(Error::invalid_value(key_type, raw)),
            },
            KeyType::String => Ok(Self::String(raw.to_string())),
            KeyType::Integer => raw
                .trim()
                .parse::<i64>()
                .map(Self::Int)
                .map_err(|_| Error::invalid_value(key_type, raw)),
            KeyType::Float => raw
                .trim()
                .parse::<f64>()
                .map(Self::Float)
                .map_err(|_| Error::invalid_value(key_type, raw)),
            KeyType::GameplayTag => {
                let tag = raw.trim();
                if tag.is_empty() {
                    Err(Error::invalid_value(key_type, raw))
                } else {
                    Ok(Self::Tag(tag.to_string()))
                }
            }
            KeyType::GameplayTagContainer => {
                let tags: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect();
                if tags.is_empty() {
                    Err(Error::invalid_value(key_type, raw))
                } else {
                    Ok(Self::TagContainer(tags))
                }
            }
            KeyType::ValueList => Ok(Self::ListEntry(raw.to_string())),
        }
    }

    /// Renders this value back to its raw annotation string.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Flag => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::String(s) | Self::Tag(s) | Self::ListEntry(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::Float(x) => x.to_string(),
            Self::TagContainer(tags) => tags.join(","),
        }
    }

    /// Returns the key type this value belongs to.
    #[must_use]
    pub const fn key_type(&self) -> KeyType {
        match self {
            Self::Flag => KeyType::Flag,
            Self::Bool(_) => KeyType::Bool,
            Self::String(_) => KeyType::String,
            Self::Int(_) => KeyType::Integer,
            Self::Float(_) => KeyType::Float,
            Self::Tag(_) => KeyType::GameplayTag,
            Self::TagContainer(_) => KeyType::GameplayTagContainer,
            Self::ListEntry(_) => KeyType::ValueList,
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
