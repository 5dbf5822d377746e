//! Core descriptors, patterns, and values for metakey.
//!
//! This crate provides:
//! - [`PropertyDescriptor`] - The reflected shape of a blueprint member
//! - [`PropertyTypePattern`] - Declarative patterns over reflected shapes
//! - [`KeyType`] - Value kinds a metadata key can carry
//! - [`MetaValue`] - Typed view of a raw annotation string
//! - [`Interner`] - Identity interning for subtypes and blueprint classes
//! - [`Error`] - Rich error types with helper constructors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod descriptor;
pub mod error;
pub mod intern;
pub mod pattern;
pub mod types;
pub mod value;

pub use descriptor::{ContainerShape, PropertyCategory, PropertyDescriptor};
pub use error::{Error, ErrorKind, Result};
pub use intern::{ClassId, Interner, SubtypeId};
pub use pattern::PropertyTypePattern;
pub use types::KeyType;
pub use value::MetaValue;
