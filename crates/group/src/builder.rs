//! Declarative front end for defining groups.
//!
//! The source pattern "declare attributes in a class body, then freeze"
//! becomes an ordinary builder: entries are collected in declaration order,
//! and [`GroupBuilder::define`] validates the whole declaration before any
//! group exists. There is no window where a partially-populated group is
//! visible; validation failure means the group is never created.

use std::collections::HashSet;

use crate::callable::GroupCallable;
use crate::error::GroupError;
use crate::group::{ConstantGroup, Member};
use crate::value::ConstantValue;

/// Member names that collide with the group protocol itself and are
/// rejected at definition time.
pub const RESERVED_MEMBER_NAMES: &[&str] = &[
    "builder",
    "name",
    "contains",
    "iter",
    "constants",
    "callables",
    "get",
    "callable",
    "invoke",
    "set_member",
    "remove_member",
    "instantiate",
    "len",
    "is_empty",
];

/// Ordered, append-only declaration of a group's members.
#[derive(Clone)]
pub struct GroupBuilder {
    name: String,
    entries: Vec<(String, Member)>,
}

impl GroupBuilder {
    /// Start an empty declaration for a group called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Start a declaration seeded with all of `parent`'s members, in their
    /// original order. Callables are shared with the parent, not copied.
    /// The derived group is still a namespace: it cannot be instantiated,
    /// and its own declaration must use fresh member names.
    pub fn extending(name: impl Into<String>, parent: &ConstantGroup) -> Self {
        Self {
            name: name.into(),
            entries: parent.members().to_vec(),
        }
    }

    /// Declare a named constant value.
    pub fn constant(mut self, name: impl Into<String>, value: impl Into<ConstantValue>) -> Self {
        self.entries.push((name.into(), Member::Constant(value.into())));
        self
    }

    /// Declare a plain function member: a zero-argument namespace function.
    /// No receiver is injected when it is invoked.
    pub fn plain_fn<F, V>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<ConstantValue>,
    {
        self.entries.push((
            name.into(),
            Member::Callable(GroupCallable::plain(move || f().into())),
        ));
        self
    }

    /// Declare a bound function member: it receives the group itself as its
    /// first argument when invoked.
    pub fn bound_fn<F, V>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&ConstantGroup) -> V + Send + Sync + 'static,
        V: Into<ConstantValue>,
    {
        self.entries.push((
            name.into(),
            Member::Callable(GroupCallable::bound(move |group| f(group).into())),
        ));
        self
    }

    /// Declare a static function member: invoked exactly as declared, with
    /// nothing injected.
    pub fn static_fn<F, V>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<ConstantValue>,
    {
        self.entries.push((
            name.into(),
            Member::Callable(GroupCallable::static_fn(move || f().into())),
        ));
        self
    }

    /// Validate the declaration and freeze it into a [`ConstantGroup`].
    ///
    /// Fails with [`GroupError::InvalidDeclaration`] if any member name is
    /// not an identifier, shadows a reserved protocol name, or repeats. On
    /// failure no group is created at all.
    pub fn define(self) -> Result<ConstantGroup, GroupError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.entries.len());
        for (name, _) in &self.entries {
            if !is_identifier(name) {
                return Err(GroupError::invalid_declaration(
                    &self.name,
                    format!("member name '{}' is not an identifier", name),
                ));
            }
            if RESERVED_MEMBER_NAMES.contains(&name.as_str()) {
                return Err(GroupError::invalid_declaration(
                    &self.name,
                    format!("member name '{}' shadows the group protocol", name),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(GroupError::invalid_declaration(
                    &self.name,
                    format!("duplicate member name '{}'", name),
                ));
            }
        }
        Ok(ConstantGroup::freeze(self.name, self.entries))
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::CallableKind;

    #[test]
    fn test_define_preserves_declaration_order() {
        let group = GroupBuilder::new("Ordered")
            .constant("FIRST", 10)
            .constant("SECOND", 20)
            .constant("THIRD", 30)
            .define()
            .expect("valid declaration");
        let names: Vec<_> = group.constants().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_reserved_name_is_rejected() {
        let err = GroupBuilder::new("Bad")
            .constant("contains", 1)
            .define()
            .expect_err("reserved names must be rejected");
        assert!(matches!(err, GroupError::InvalidDeclaration { .. }));
        assert!(err.to_string().contains("shadows the group protocol"));
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let err = GroupBuilder::new("Bad")
            .constant("A", 1)
            .constant("A", 2)
            .define()
            .expect_err("duplicate names must be rejected");
        assert!(err.to_string().contains("duplicate member name 'A'"));
    }

    #[test]
    fn test_non_identifier_name_is_rejected() {
        for bad in ["", "1A", "has space", "dash-ed"] {
            let err = GroupBuilder::new("Bad")
                .constant(bad, 1)
                .define()
                .expect_err("non-identifier names must be rejected");
            assert!(matches!(err, GroupError::InvalidDeclaration { .. }));
        }
    }

    #[test]
    fn test_underscore_names_are_identifiers() {
        let group = GroupBuilder::new("Ok")
            .constant("_private", 1)
            .constant("snake_case_2", 2)
            .define()
            .expect("underscored identifiers are valid");
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_extending_inherits_members_in_order() {
        let base = GroupBuilder::new("Base")
            .constant("A", 1)
            .constant("B", 2)
            .define()
            .expect("valid declaration");
        let derived = GroupBuilder::extending("Derived", &base)
            .constant("C", 3)
            .define()
            .expect("valid declaration");

        let names: Vec<_> = derived.constants().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert!(derived.contains(1));
        assert!(derived.contains(3));
        // The parent is untouched.
        assert!(!base.contains(3));
    }

    #[test]
    fn test_extending_shares_callables_with_parent() {
        let base = GroupBuilder::new("Base")
            .plain_fn("answer", || 42)
            .define()
            .expect("valid declaration");
        let derived = GroupBuilder::extending("Derived", &base)
            .define()
            .expect("valid declaration");

        assert_eq!(
            derived.callable("answer").map(GroupCallable::kind),
            Some(CallableKind::Plain)
        );
        assert_eq!(derived.invoke("answer"), Some(42.into()));
    }

    #[test]
    fn test_redeclaring_inherited_name_is_rejected() {
        let base = GroupBuilder::new("Base")
            .constant("A", 1)
            .define()
            .expect("valid declaration");
        let err = GroupBuilder::extending("Derived", &base)
            .constant("A", 9)
            .define()
            .expect_err("inherited names cannot be redeclared");
        assert!(err.to_string().contains("duplicate member name 'A'"));
    }

    #[test]
    fn test_derived_group_cannot_be_instantiated() {
        let base = GroupBuilder::new("Base")
            .constant("A", 1)
            .define()
            .expect("valid declaration");
        let derived = GroupBuilder::extending("Derived", &base)
            .define()
            .expect("valid declaration");
        let err = derived
            .instantiate()
            .expect_err("derived groups are never instantiable");
        assert_eq!(err, GroupError::instantiation("Derived"));
    }

    #[test]
    fn test_failed_define_creates_nothing() {
        // A failing declaration returns only the error; there is no partial
        // group to observe, by construction.
        let result = GroupBuilder::new("Bad")
            .constant("A", 1)
            .constant("A", 2)
            .define();
        assert!(result.is_err());
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("A"));
        assert!(is_identifier("_x9"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("9x"));
        assert!(!is_identifier("a.b"));
    }
}
