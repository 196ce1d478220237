//! Constant value model.
//!
//! Groups hold plain values, not instances: a constant is one of a small set
//! of value kinds compared by value equality, never identity. Duplicate
//! values across different names are allowed and preserved independently.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value held by a named constant in a group.
///
/// Equality is by value with no cross-kind coercion: `Int(1)` and
/// `Float(1.0)` are distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstantValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Hashable projection of a [`ConstantValue`], used to precompute the
/// membership set when a group is frozen. Floats have no projection and fall
/// back to a linear scan at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl ConstantValue {
    /// Hash key for this value, or `None` if the value kind cannot be
    /// hashed (floats).
    pub(crate) fn hash_key(&self) -> Option<ValueKey> {
        match self {
            Self::Bool(b) => Some(ValueKey::Bool(*b)),
            Self::Int(i) => Some(ValueKey::Int(*i)),
            Self::Str(s) => Some(ValueKey::Str(s.clone())),
            Self::Float(_) => None,
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ConstantValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for ConstantValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for ConstantValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ConstantValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}
