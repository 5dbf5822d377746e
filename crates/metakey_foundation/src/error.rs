//! Error types for the metakey system.
//!
//! Uses `thiserror` for ergonomic error definition. Nothing in this crate is
//! fatal: enumeration misses are absence, constraint violations reject an
//! edit and leave state untouched.

use thiserror::Error;

use crate::types::KeyType;

/// Convenience alias for results in this workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for metakey operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown key error.
    #[must_use]
    pub fn unknown_key(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownKey(name.into()))
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(expected: KeyType, raw: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidValue {
            expected,
            raw: raw.into(),
        })
    }

    /// Creates a value out of bounds error.
    #[must_use]
    pub fn value_out_of_bounds(key: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValueOutOfBounds {
            key: key.into(),
            detail: detail.into(),
        })
    }

    /// Creates a constraint violation error.
    #[must_use]
    pub fn constraint_violation(key: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConstraintViolation {
            key: key.into(),
            details: details.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A key name did not resolve against the live registry.
    #[error("unknown metadata key: {0}")]
    UnknownKey(String),

    /// A raw annotation string could not be parsed for its key type.
    #[error("invalid value for {expected} key: {raw:?}")]
    InvalidValue {
        /// The key type the value was parsed for.
        expected: KeyType,
        /// The raw annotation string.
        raw: String,
    },

    /// A parsed value fell outside the key's declared bounds or value list.
    #[error("value out of bounds for {key}: {detail}")]
    ValueOutOfBounds {
        /// The key whose bounds were violated.
        key: String,
        /// What was violated.
        detail: String,
    },

    /// A companion-key rule rejected an attachment.
    #[error("constraint violation for {key}: {details}")]
    ConstraintViolation {
        /// The key whose attachment was rejected.
        key: String,
        /// The violated rules, rendered.
        details: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// File I/O failed.
    #[error("io error: {0}")]
    IoError(String),
}
