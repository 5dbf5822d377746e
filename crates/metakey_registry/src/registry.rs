//! The key registry.
//!
//! An ordered collection of [`MetaDataKey`] definitions, always sorted
//! lexicographically by name for deterministic, human-scannable
//! presentation. Backed by a persistent vector so snapshots handed to
//! dependent UI modules are O(1) clones.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::key::MetaDataKey;

/// Name-sorted collection of key definitions.
///
/// The key name is the membership key: inserting a definition whose name is
/// already present silently replaces the existing entry. Cloning shares
/// structure with the original.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyRegistry {
    /// Definitions in ascending name order.
    keys: im::Vector<MetaDataKey>,
}

impl KeyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a sequence of definitions.
    ///
    /// Later same-name definitions silently replace earlier ones.
    #[must_use]
    pub fn from_keys(keys: impl IntoIterator<Item = MetaDataKey>) -> Self {
        let mut registry = Self::new();
        for key in keys {
            registry.insert(key);
        }
        registry
    }

    /// Inserts a definition, keeping name order.
    ///
    /// An existing definition with the same name is silently replaced.
    pub fn insert(&mut self, key: MetaDataKey) {
        if let Some(index) = self.position(&key.name) {
            self.keys.set(index, key);
            return;
        }
        let index = self
            .keys
            .iter()
            .position(|k| k.name.as_str() > key.name.as_str())
            .unwrap_or(self.keys.len());
        self.keys.insert(index, key);
    }

    /// Removes a definition by name, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<MetaDataKey> {
        let index = self.position(name)?;
        Some(self.keys.remove(index))
    }

    /// Looks up a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MetaDataKey> {
        self.position(name).and_then(|i| self.keys.get(i))
    }

    /// Returns true if a definition with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterates definitions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &MetaDataKey> {
        self.keys.iter()
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the registry holds no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key names in ascending order.
    #[must_use]
    pub fn key_names(&self) -> Vec<String> {
        self.keys.iter().map(|k| k.name.clone()).collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.keys.iter().position(|k| k.name == name)
    }
}

impl FromIterator<MetaDataKey> for KeyRegistry {
    fn from_iter<I: IntoIterator<Item = MetaDataKey>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}
