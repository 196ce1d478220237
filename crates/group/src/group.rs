//! The frozen constant group container.
//!
//! A [`ConstantGroup`] is built once by [`GroupBuilder::define`] and is
//! read-only from that point on. There is no `&mut` surface at all: the
//! "error on mutation" behavior of the source pattern becomes "no such
//! operation exists", with [`ConstantGroup::set_member`] and
//! [`ConstantGroup::remove_member`] kept only as the explicit error-returning
//! variant for callers that need dynamic attribute access.
//!
//! Because a frozen group is never mutated, concurrent readers need no
//! locking: the container is `Send + Sync` and safe to share freely.

use std::collections::{HashMap, HashSet};
use std::convert::Infallible;

use crate::builder::GroupBuilder;
use crate::callable::GroupCallable;
use crate::error::GroupError;
use crate::value::{ConstantValue, ValueKey};

/// A single declared entry: either a constant value or a namespaced callable.
#[derive(Debug, Clone)]
pub(crate) enum Member {
    Constant(ConstantValue),
    Callable(GroupCallable),
}

/// A frozen, ordered group of named constants and namespaced callables.
///
/// Constants are the non-callable values; they participate in membership
/// tests and iteration, in declaration order. Callables are exposed for
/// lookup and invocation but are never part of the constant set.
///
/// Groups are namespaces, never value-holders: [`ConstantGroup::instantiate`]
/// always fails, for base and derived groups alike.
#[derive(Debug, Clone)]
pub struct ConstantGroup {
    name: String,
    members: Vec<(String, Member)>,
    index: HashMap<String, usize>,
    // Membership fast path for hashable constant values; floats fall back
    // to a linear scan over `unhashable`.
    hashed: HashSet<ValueKey>,
    unhashable: Vec<ConstantValue>,
}

/// Iterator over a group's constant values in declaration order.
pub struct ConstantsIter<'a> {
    inner: std::slice::Iter<'a, (String, Member)>,
}

impl<'a> Iterator for ConstantsIter<'a> {
    type Item = &'a ConstantValue;

    fn next(&mut self) -> Option<Self::Item> {
        for (_, member) in self.inner.by_ref() {
            if let Member::Constant(value) = member {
                return Some(value);
            }
        }
        None
    }
}

impl ConstantGroup {
    /// Start declaring a new group. Equivalent to [`GroupBuilder::new`].
    pub fn builder(name: impl Into<String>) -> GroupBuilder {
        GroupBuilder::new(name)
    }

    /// Freeze a validated declaration into a group. Builds the name index
    /// and the membership set in one step, so no partially-populated group
    /// is ever observable.
    pub(crate) fn freeze(name: String, members: Vec<(String, Member)>) -> Self {
        let mut index = HashMap::with_capacity(members.len());
        let mut hashed = HashSet::new();
        let mut unhashable = Vec::new();
        for (position, (member_name, member)) in members.iter().enumerate() {
            index.insert(member_name.clone(), position);
            if let Member::Constant(value) = member {
                match value.hash_key() {
                    Some(key) => {
                        hashed.insert(key);
                    }
                    None => unhashable.push(value.clone()),
                }
            }
        }
        Self {
            name,
            members,
            index,
            hashed,
            unhashable,
        }
    }

    /// The group's declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True iff `value` equals some constant's value. Callable members never
    /// match. Comparison is by value equality, not identity.
    pub fn contains(&self, value: impl Into<ConstantValue>) -> bool {
        let value = value.into();
        match value.hash_key() {
            Some(key) => self.hashed.contains(&key),
            None => self.unhashable.iter().any(|candidate| *candidate == value),
        }
    }

    /// Iterate constant values in declaration order. Each call starts a
    /// fresh iterator.
    pub fn iter(&self) -> ConstantsIter<'_> {
        ConstantsIter {
            inner: self.members.iter(),
        }
    }

    /// Iterate `(name, value)` pairs of constants in declaration order.
    pub fn constants(&self) -> impl Iterator<Item = (&str, &ConstantValue)> {
        self.members.iter().filter_map(|(name, member)| match member {
            Member::Constant(value) => Some((name.as_str(), value)),
            Member::Callable(_) => None,
        })
    }

    /// Iterate `(name, callable)` pairs in declaration order.
    pub fn callables(&self) -> impl Iterator<Item = (&str, &GroupCallable)> {
        self.members.iter().filter_map(|(name, member)| match member {
            Member::Callable(callable) => Some((name.as_str(), callable)),
            Member::Constant(_) => None,
        })
    }

    /// Look up a constant by name. Returns `None` for callable members.
    pub fn get(&self, name: &str) -> Option<&ConstantValue> {
        match self.member(name)? {
            Member::Constant(value) => Some(value),
            Member::Callable(_) => None,
        }
    }

    /// Look up a callable by name. Returns `None` for constant members.
    pub fn callable(&self, name: &str) -> Option<&GroupCallable> {
        match self.member(name)? {
            Member::Callable(callable) => Some(callable),
            Member::Constant(_) => None,
        }
    }

    /// Invoke the named callable. Plain and static callables run with no
    /// arguments; bound callables receive this group as their first
    /// argument. Returns `None` if no callable member has that name.
    pub fn invoke(&self, name: &str) -> Option<ConstantValue> {
        self.callable(name).map(|callable| callable.invoke(self))
    }

    /// Dynamic-access variant of attribute assignment. Always fails: the
    /// group is frozen, for brand-new names as well as existing ones.
    pub fn set_member(
        &self,
        name: &str,
        _value: impl Into<ConstantValue>,
    ) -> Result<(), GroupError> {
        Err(GroupError::immutable(&self.name, name))
    }

    /// Dynamic-access variant of attribute removal. Always fails, whether or
    /// not a member with that name exists.
    pub fn remove_member(&self, name: &str) -> Result<(), GroupError> {
        Err(GroupError::immutable(&self.name, name))
    }

    /// Groups are namespaces, never value-holders. This always fails, for
    /// derived groups as well as the group they extend; [`Infallible`]
    /// records in the type that no instance can ever exist.
    pub fn instantiate(&self) -> Result<Infallible, GroupError> {
        Err(GroupError::instantiation(&self.name))
    }

    /// Number of constants (callable members are not counted).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True iff the group holds no constants.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub(crate) fn members(&self) -> &[(String, Member)] {
        &self.members
    }

    fn member(&self, name: &str) -> Option<&Member> {
        self.index.get(name).map(|position| &self.members[*position].1)
    }
}

impl<'a> IntoIterator for &'a ConstantGroup {
    type Item = &'a ConstantValue;
    type IntoIter = ConstantsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
