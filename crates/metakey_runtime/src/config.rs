//! Process-wide editor configuration.
//!
//! Owns the interner, the blueprint-class graph, and the key registry.
//! Loaded once at startup; edits are rare (project-configuration time) and
//! bump a generation counter that dependent UI modules use as a coarse
//! invalidation signal.

use serde::{Deserialize, Serialize};

use metakey_foundation::{ClassId, Interner, SubtypeId};
use metakey_registry::{ClassGraph, KeyRegistry, MetaDataKey, default_registry};

/// The configuration object owning the key catalog.
///
/// All mutating methods bump the generation; any change invalidates every
/// dependent customization wholesale rather than incrementally.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Identity interner for subtypes and classes.
    interner: Interner,
    /// Blueprint-class ancestry.
    classes: ClassGraph,
    /// The key catalog.
    registry: KeyRegistry,
    /// Monotonically increasing edit counter.
    generation: u64,
}

impl EditorConfig {
    /// Creates an empty configuration with only the reserved base blueprint
    /// class interned.
    #[must_use]
    pub fn new() -> Self {
        Self {
            interner: Interner::new(),
            classes: ClassGraph::new(),
            registry: KeyRegistry::new(),
            generation: 0,
        }
    }

    /// Creates a configuration pre-populated with the built-in catalog.
    #[must_use]
    pub fn with_default_catalog() -> Self {
        let mut interner = Interner::new();
        let mut classes = ClassGraph::new();
        let registry = default_registry(&mut interner, &mut classes);
        Self {
            interner,
            classes,
            registry,
            generation: 0,
        }
    }

    /// The key registry.
    #[must_use]
    pub fn registry(&self) -> &KeyRegistry {
        &self.registry
    }

    /// An O(1) snapshot of the registry for a dependent module to hold.
    #[must_use]
    pub fn snapshot_registry(&self) -> KeyRegistry {
        self.registry.clone()
    }

    /// The blueprint-class ancestry.
    #[must_use]
    pub fn classes(&self) -> &ClassGraph {
        &self.classes
    }

    /// The identity interner.
    #[must_use]
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Current edit generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Interns a subtype name for use in patterns and descriptors.
    ///
    /// Interning alone changes no matching behavior, so the generation is
    /// untouched.
    pub fn intern_subtype(&mut self, name: &str) -> SubtypeId {
        self.interner.intern_subtype(name)
    }

    /// Registers a blueprint class as a subclass of `parent`.
    pub fn register_class(&mut self, name: &str, parent: ClassId) -> ClassId {
        let class = self.interner.intern_class(name);
        self.classes.register(class, parent);
        self.generation += 1;
        class
    }

    /// Inserts or replaces a key definition.
    pub fn add_key(&mut self, key: MetaDataKey) {
        self.registry.insert(key);
        self.generation += 1;
    }

    /// Removes a key definition by name.
    pub fn remove_key(&mut self, name: &str) -> Option<MetaDataKey> {
        let removed = self.registry.remove(name);
        if removed.is_some() {
            self.generation += 1;
        }
        removed
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}
