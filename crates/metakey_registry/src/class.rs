//! Blueprint-class ancestry.
//!
//! Blueprint-class restrictions are hierarchy-aware: a key restricted to a
//! class also applies to its subclasses. The ancestry itself comes from an
//! external source; [`ClassAncestry`] models that collaborator and
//! [`ClassGraph`] is the in-memory implementation the runtime and tests use.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use metakey_foundation::ClassId;

/// Supplies the ancestor chain of blueprint classes.
pub trait ClassAncestry {
    /// Returns the immediate parent of a class, if it has one.
    fn parent_of(&self, class: ClassId) -> Option<ClassId>;

    /// Returns true if `class` is `ancestor` itself or a descendant of it.
    fn is_a(&self, class: ClassId, ancestor: ClassId) -> bool {
        let mut current = Some(class);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.parent_of(c);
        }
        false
    }
}

/// In-memory class hierarchy.
///
/// Classes without a registered parent are roots; [`ClassId::BLUEPRINT`] is
/// the conventional root for blueprint classes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassGraph {
    /// Immediate parent of each registered class.
    parents: HashMap<ClassId, ClassId>,
}

impl ClassGraph {
    /// Creates an empty class graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `child` as a direct subclass of `parent`.
    ///
    /// An edge that would introduce a cycle (including self-parenting) is
    /// silently ignored, matching the catalog's lenient authoring contract.
    pub fn register(&mut self, child: ClassId, parent: ClassId) {
        if child == parent || self.is_a(parent, child) {
            return;
        }
        self.parents.insert(child, parent);
    }

    /// Number of registered subclass edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns true if no subclass edges are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Iterates the ancestor chain of a class, starting with the class
    /// itself.
    pub fn ancestors(&self, class: ClassId) -> impl Iterator<Item = ClassId> + '_ {
        let mut current = Some(class);
        std::iter::from_fn(move || {
            let c = current?;
            current = self.parent_of(c);
            Some(c)
        })
    }
}

impl ClassAncestry for ClassGraph {
    fn parent_of(&self, class: ClassId) -> Option<ClassId> {
        self.parents.get(&class).copied()
    }
}
