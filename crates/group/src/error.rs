//! Unified error type for constant group operations
//!
//! Every violation of the group contract is an immediate, synchronous error
//! at the point of the illegal operation. Nothing is retried, deferred, or
//! downgraded to a warning: a group is either fully and validly frozen, or
//! it was never created.

use thiserror::Error;

/// Errors raised by group definition and by the (always-failing) dynamic
/// mutation surface of a frozen group.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// An attribute add, reassignment, or removal was attempted on a frozen
    /// group. Raised for brand-new names as well as pre-existing ones.
    #[error("group '{group}' is frozen: cannot modify member '{name}'")]
    ImmutableModification { group: String, name: String },

    /// An attempt was made to build an instance of a group. Groups are
    /// namespaces, never value-holders, so this fails for derived groups too.
    #[error("group '{group}' cannot be instantiated")]
    Instantiation { group: String },

    /// The declaration passed to the builder cannot be frozen: a member name
    /// collides with the group protocol, is not an identifier, or repeats.
    #[error("invalid declaration for group '{group}': {reason}")]
    InvalidDeclaration { group: String, reason: String },
}

impl GroupError {
    /// Create an immutable-modification error for a member of `group`.
    pub fn immutable(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self::ImmutableModification {
            group: group.into(),
            name: name.into(),
        }
    }

    /// Create an instantiation error for `group`.
    pub fn instantiation(group: impl Into<String>) -> Self {
        Self::Instantiation {
            group: group.into(),
        }
    }

    /// Creates a declaration error for groups that cannot be frozen.
    ///
    /// Use this at definition time, before any group is observable:
    /// - Member names that shadow the group protocol (`contains`, `iter`, ...)
    /// - Member names that are not identifiers
    /// - The same member name declared twice
    pub fn invalid_declaration(group: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDeclaration {
            group: group.into(),
            reason: reason.into(),
        }
    }
}
