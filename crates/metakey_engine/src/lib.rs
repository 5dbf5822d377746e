//! Type matching, key queries, and attachment validation for metakey.
//!
//! This crate provides:
//! - [`TypeMatcher`] - Pattern matching over reflected property descriptors
//! - [`QueryEngine`] - Read-only key enumeration for the editing UI
//! - [`AttachmentValidator`] - Companion/incompatibility checks at edit time

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod matcher;
pub mod query;
pub mod validate;

pub use matcher::TypeMatcher;
pub use query::{NONE_KEY, QueryEngine};
pub use validate::{AttachDecision, AttachmentValidator, Violation};
