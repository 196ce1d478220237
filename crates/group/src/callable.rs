//! Callable members of a group.
//!
//! Groups are namespaces for functions as well as values. Callable members
//! come in three kinds, and the split is deliberate (and easy to "fix"
//! accidentally, so: don't):
//!
//! - **Plain** functions and closures are zero-argument namespace functions.
//!   They are *not* methods: no receiver is ever injected, because a group is
//!   never instantiated and an instance-style binding would be meaningless.
//! - **Bound** functions receive the group itself as their first argument.
//! - **Static** functions run exactly as declared, with nothing injected.
//!
//! Callables are excluded from the constant set: they never participate in
//! membership tests or iteration.

use std::fmt;
use std::sync::Arc;

use crate::group::ConstantGroup;
use crate::value::ConstantValue;

type NullaryFn = Arc<dyn Fn() -> ConstantValue + Send + Sync>;
type BoundFn = Arc<dyn Fn(&ConstantGroup) -> ConstantValue + Send + Sync>;

/// Invocation kind of a callable member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallableKind {
    /// Zero-argument namespace function; no receiver injected.
    Plain,
    /// Receives the group as its first argument.
    Bound,
    /// Runs exactly as declared.
    Static,
}

/// A callable member of a frozen group.
///
/// The implementation is shared behind an `Arc`, so derived groups reuse
/// their parent's callables without copying them.
#[derive(Clone)]
pub struct GroupCallable {
    imp: CallableImpl,
}

#[derive(Clone)]
enum CallableImpl {
    Plain(NullaryFn),
    Bound(BoundFn),
    Static(NullaryFn),
}

impl GroupCallable {
    pub(crate) fn plain<F>(f: F) -> Self
    where
        F: Fn() -> ConstantValue + Send + Sync + 'static,
    {
        Self {
            imp: CallableImpl::Plain(Arc::new(f)),
        }
    }

    pub(crate) fn bound<F>(f: F) -> Self
    where
        F: Fn(&ConstantGroup) -> ConstantValue + Send + Sync + 'static,
    {
        Self {
            imp: CallableImpl::Bound(Arc::new(f)),
        }
    }

    pub(crate) fn static_fn<F>(f: F) -> Self
    where
        F: Fn() -> ConstantValue + Send + Sync + 'static,
    {
        Self {
            imp: CallableImpl::Static(Arc::new(f)),
        }
    }

    /// How this callable is invoked.
    pub fn kind(&self) -> CallableKind {
        match self.imp {
            CallableImpl::Plain(_) => CallableKind::Plain,
            CallableImpl::Bound(_) => CallableKind::Bound,
            CallableImpl::Static(_) => CallableKind::Static,
        }
    }

    /// Dispatch on kind: plain and static callables run with no arguments,
    /// bound callables receive the group.
    pub(crate) fn invoke(&self, group: &ConstantGroup) -> ConstantValue {
        match &self.imp {
            CallableImpl::Plain(f) | CallableImpl::Static(f) => f(),
            CallableImpl::Bound(f) => f(group),
        }
    }
}

impl fmt::Debug for GroupCallable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GroupCallable").field(&self.kind()).finish()
    }
}
