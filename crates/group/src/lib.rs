//! Frozen, ordered groups of named constants with namespaced callables.
//!
//! A [`ConstantGroup`] is an enumeration-like container: its entries are
//! declared once through a [`GroupBuilder`], frozen atomically by
//! [`GroupBuilder::define`], and read-only from then on. Unlike an `enum`,
//! a group allows arbitrary (and duplicate) values across names, and can
//! carry namespaced functions next to its constants.
//!
//! # Design Principles
//!
//! - **Define once, read forever** - there is no mutation surface; the
//!   dynamic-access methods [`ConstantGroup::set_member`] and
//!   [`ConstantGroup::remove_member`] exist only to fail with
//!   [`GroupError::ImmutableModification`]
//! - **Namespaces, not instances** - [`ConstantGroup::instantiate`] always
//!   fails with [`GroupError::Instantiation`], for derived groups too
//! - **Declaration order is iteration order** - [`ConstantGroup::iter`] and
//!   `for v in &group` yield constants exactly as declared
//!
//! # Callable members: a deliberate asymmetry
//!
//! Plain functions declared in a group are **not** methods: they are
//! zero-argument namespace functions and never receive a receiver, because
//! a group is never instantiated. Bound functions receive the group itself
//! as their first argument, and static functions run exactly as declared.
//! This split mirrors the source pattern faithfully; do not "fix" it by
//! giving plain functions a receiver.
//!
//! # Examples
//!
//! ```
//! use constgroup::ConstantGroup;
//!
//! let tokens = ConstantGroup::builder("Tokens")
//!     .constant("A", 1)
//!     .constant("B", 2)
//!     .constant("C", 3)
//!     .constant("D", 3) // duplicate values are allowed
//!     .define()?;
//!
//! assert!(tokens.contains(2));
//! assert!(!tokens.contains(4));
//! assert_eq!(tokens.get("C"), tokens.get("D"));
//! assert_eq!(tokens.iter().count(), 4);
//! assert!(tokens.set_member("E", 4).is_err());
//! assert!(tokens.instantiate().is_err());
//! # Ok::<(), constgroup::GroupError>(())
//! ```

pub mod builder;
pub mod callable;
pub mod error;
pub mod group;
pub mod value;

pub use builder::{GroupBuilder, RESERVED_MEMBER_NAMES};
pub use callable::{CallableKind, GroupCallable};
pub use error::GroupError;
pub use group::{ConstantGroup, ConstantsIter};
pub use value::ConstantValue;
