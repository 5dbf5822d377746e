//! Identity interning for subtypes and blueprint classes.
//!
//! Pattern subtypes are compared by *identity*, not by name: two patterns
//! agree on a subtype iff both reference the same interned entry. Interning
//! makes that comparison a cheap integer equality.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interned subtype identity.
///
/// Subtypes name a specific reflected struct, class, or enum (e.g. the
/// `GameplayTag` struct, the `Widget` class). Matching against them is strict
/// identity matching with no inheritance walk.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubtypeId(pub(crate) u32);

impl SubtypeId {
    /// Returns the raw index of this subtype.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SubtypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubtypeId({})", self.0)
    }
}

/// Interned blueprint-class identity.
///
/// Unlike subtypes, blueprint classes participate in hierarchy-aware
/// matching: a key restricted to a class also applies to its subclasses.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassId(pub(crate) u32);

impl ClassId {
    /// Returns the raw index of this class.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    // =========================================================================
    // Reserved Classes
    // =========================================================================
    // These are always interned at startup with fixed indices.

    /// The base blueprint class. Every key supports it by default, meaning
    /// "any blueprint".
    pub const BLUEPRINT: ClassId = ClassId(0);
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

/// Interner for subtype and blueprint-class names.
///
/// Maps names to unique IDs and back. It is not thread-safe; use external
/// synchronization if needed.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interner {
    /// Subtype name storage.
    subtypes: Vec<Arc<str>>,
    /// Map from subtype name to `SubtypeId`.
    subtype_map: HashMap<Arc<str>, SubtypeId>,
    /// Class name storage.
    classes: Vec<Arc<str>>,
    /// Map from class name to `ClassId`.
    class_map: HashMap<Arc<str>, ClassId>,
}

impl Interner {
    /// Reserved classes that are pre-interned at startup.
    const RESERVED_CLASSES: &'static [&'static str] = &[
        "Blueprint", // ClassId(0) = BLUEPRINT
    ];

    /// Creates a new interner with reserved classes pre-interned.
    #[must_use]
    pub fn new() -> Self {
        let mut interner = Self::default();

        // Pre-intern reserved classes at fixed indices
        for (i, &class) in Self::RESERVED_CLASSES.iter().enumerate() {
            let id = interner.intern_class(class);
            debug_assert_eq!(
                id.0 as usize, i,
                "Reserved class '{}' should have index {}, got {}",
                class, i, id.0
            );
        }

        interner
    }

    /// Interns a subtype name, returning its identity.
    ///
    /// Interning the same name twice returns the same id.
    pub fn intern_subtype(&mut self, name: &str) -> SubtypeId {
        if let Some(&id) = self.subtype_map.get(name) {
            return id;
        }
        let arc: Arc<str> = Arc::from(name);
        let id = SubtypeId(u32::try_from(self.subtypes.len()).unwrap_or(u32::MAX));
        self.subtypes.push(Arc::clone(&arc));
        self.subtype_map.insert(arc, id);
        id
    }

    /// Returns the name of an interned subtype.
    #[must_use]
    pub fn subtype_name(&self, id: SubtypeId) -> Option<&str> {
        self.subtypes.get(id.0 as usize).map(AsRef::as_ref)
    }

    /// Looks up a subtype by name without interning it.
    #[must_use]
    pub fn subtype(&self, name: &str) -> Option<SubtypeId> {
        self.subtype_map.get(name).copied()
    }

    /// Interns a blueprint-class name, returning its identity.
    pub fn intern_class(&mut self, name: &str) -> ClassId {
        if let Some(&id) = self.class_map.get(name) {
            return id;
        }
        let arc: Arc<str> = Arc::from(name);
        let id = ClassId(u32::try_from(self.classes.len()).unwrap_or(u32::MAX));
        self.classes.push(Arc::clone(&arc));
        self.class_map.insert(arc, id);
        id
    }

    /// Returns the name of an interned class.
    #[must_use]
    pub fn class_name(&self, id: ClassId) -> Option<&str> {
        self.classes.get(id.0 as usize).map(AsRef::as_ref)
    }

    /// Looks up a class by name without interning it.
    #[must_use]
    pub fn class(&self, name: &str) -> Option<ClassId> {
        self.class_map.get(name).copied()
    }

    /// Number of interned subtypes.
    #[must_use]
    pub fn subtype_count(&self) -> usize {
        self.subtypes.len()
    }

    /// Number of interned classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}
