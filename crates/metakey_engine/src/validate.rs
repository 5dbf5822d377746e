//! Companion-key validation at edit time.
//!
//! Before the UI attaches a key to a property or function it checks the
//! key's relational constraints against the names already attached there.
//! Validation is a pure function of (candidate, attached names, registry);
//! a rejection reports the violated rules and changes nothing.

use std::collections::HashSet;

use thiserror::Error;

use metakey_foundation::{Error as MetakeyError, Result};
use metakey_registry::{KeyRegistry, MetaDataKey};

/// A single violated attachment rule.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    /// The candidate requires a companion key that is not attached.
    #[error("{key} requires {companion} to be set first")]
    MissingCompanion {
        /// The candidate key.
        key: String,
        /// The companion it requires.
        companion: String,
    },
    /// The candidate and an attached key are declared incompatible.
    #[error("{key} is incompatible with {other} (declared by {declared_by})")]
    Incompatible {
        /// The candidate key.
        key: String,
        /// The attached key it conflicts with.
        other: String,
        /// Which side declared the incompatibility.
        declared_by: String,
    },
}

/// Result of an attachment check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttachDecision {
    /// The attachment may proceed.
    Allowed,
    /// The attachment must be rejected; no state change.
    Rejected(Vec<Violation>),
}

impl AttachDecision {
    /// Returns true if the attachment may proceed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns the violations, empty when allowed.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Allowed => &[],
            Self::Rejected(violations) => violations,
        }
    }
}

/// Checks relational constraints before an attachment is committed.
pub struct AttachmentValidator;

impl AttachmentValidator {
    /// Checks whether `candidate` may be attached given the names already
    /// attached to the same property or function.
    ///
    /// Incompatibility is symmetric in effect though declared
    /// one-directionally: both the candidate's declared set and the declared
    /// sets of the attached keys (resolved by name against the live
    /// registry) are consulted. An attached name with no live definition
    /// behaves as if it declared nothing; a required companion that no
    /// longer exists simply can never be attached, so the requirement keeps
    /// failing. Detaching a companion later never cascades.
    #[must_use]
    pub fn check(
        registry: &KeyRegistry,
        candidate: &MetaDataKey,
        attached: &HashSet<String>,
    ) -> AttachDecision {
        let mut violations = Vec::new();

        if let Some(companion) = &candidate.required_key {
            if !attached.contains(companion) {
                violations.push(Violation::MissingCompanion {
                    key: candidate.name.clone(),
                    companion: companion.clone(),
                });
            }
        }

        // Deterministic report order regardless of set iteration order.
        let mut attached_names: Vec<&String> = attached.iter().collect();
        attached_names.sort();

        for other in attached_names {
            if candidate.incompatible_keys.contains(other) {
                violations.push(Violation::Incompatible {
                    key: candidate.name.clone(),
                    other: other.clone(),
                    declared_by: candidate.name.clone(),
                });
            } else if let Some(definition) = registry.get(other) {
                if definition.incompatible_keys.contains(&candidate.name) {
                    violations.push(Violation::Incompatible {
                        key: candidate.name.clone(),
                        other: other.clone(),
                        declared_by: other.clone(),
                    });
                }
            }
        }

        if violations.is_empty() {
            AttachDecision::Allowed
        } else {
            AttachDecision::Rejected(violations)
        }
    }

    /// Like [`check`], but converts a rejection into an error.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ConstraintViolation`] listing the violated rules.
    ///
    /// [`check`]: Self::check
    /// [`ErrorKind::ConstraintViolation`]: metakey_foundation::ErrorKind::ConstraintViolation
    pub fn validate(
        registry: &KeyRegistry,
        candidate: &MetaDataKey,
        attached: &HashSet<String>,
    ) -> Result<()> {
        match Self::check(registry, candidate, attached) {
            AttachDecision::Allowed => Ok(()),
            AttachDecision::Rejected(violations) => {
                let details = violations
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                Err(MetakeyError::constraint_violation(&candidate.name, details))
            }
        }
    }
}
