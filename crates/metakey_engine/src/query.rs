//! Key enumeration queries for the editing UI.
//!
//! Read-only projections over a [`KeyRegistry`]: no caching, no side
//! effects. Every call recomputes from the live registry, so repeated
//! queries as the user changes selection are always fresh.

use metakey_foundation::{ClassId, PropertyDescriptor};
use metakey_registry::{ClassAncestry, KeyRegistry, MetaDataKey};

use crate::matcher::TypeMatcher;

/// Sentinel entry prepended to [`QueryEngine::key_names`], used by the UI's
/// "pick or clear a key" selector.
pub const NONE_KEY: &str = "none";

/// Enumerates applicable key definitions for a selection.
pub struct QueryEngine;

impl QueryEngine {
    /// Keys applicable to a variable of the given reflected shape in a
    /// blueprint of the given class, in registry (name) order.
    ///
    /// A key applies iff its blueprint restriction covers the class
    /// (hierarchy-aware) and its pattern set matches the descriptor.
    /// Enumeration is total: an unknown class or an unmatched descriptor
    /// yields an empty sequence, never an error.
    pub fn variable_keys<'a, A: ClassAncestry>(
        registry: &'a KeyRegistry,
        ancestry: &'a A,
        class: ClassId,
        property: &'a PropertyDescriptor,
    ) -> impl Iterator<Item = &'a MetaDataKey> {
        registry.iter().filter(move |key| {
            TypeMatcher::supports_blueprint(key, class, ancestry)
                && TypeMatcher::matches_any(&key.supported_properties, property)
        })
    }

    /// Keys applicable to a function in a blueprint of the given class, in
    /// registry (name) order.
    ///
    /// Property-type patterns are not consulted: functions have no single
    /// reflected type.
    pub fn function_keys<'a, A: ClassAncestry>(
        registry: &'a KeyRegistry,
        ancestry: &'a A,
        class: ClassId,
    ) -> impl Iterator<Item = &'a MetaDataKey> {
        registry.iter().filter(move |key| {
            key.can_be_used_by_functions && TypeMatcher::supports_blueprint(key, class, ancestry)
        })
    }

    /// All key names, prefixed with the sentinel [`NONE_KEY`] entry.
    #[must_use]
    pub fn key_names(registry: &KeyRegistry) -> Vec<String> {
        let mut names = Vec::with_capacity(registry.len() + 1);
        names.push(NONE_KEY.to_string());
        names.extend(registry.key_names());
        names
    }
}
