//! Thread-local current context and scoped substitution
//!
//! # Invariant
//!
//! Every substitution made through [`ContextGuard`] (and therefore through
//! [`run_in`] and [`run_in_parent`]) is undone exactly once, when the guard
//! drops. That covers normal return, early return via `?`, and panic unwinding.
//!
//! The slot is per thread, so concurrent callers never see each other's
//! substitutions. The guard is `!Send`: it cannot be moved to, and dropped on,
//! a thread other than the one whose slot it changed.

use crate::context::ExecutionContext;
use std::cell::RefCell;
use std::marker::PhantomData;
use tracing::trace;

thread_local! {
    /// Context active on this thread
    static CURRENT: RefCell<Option<ExecutionContext>> = const { RefCell::new(None) };
}

/// Context active on the calling thread
pub fn current() -> Option<ExecutionContext> {
    CURRENT.with(|slot| slot.borrow().clone())
}

/// Set the calling thread's context, returning the previous one
///
/// This is an unscoped write; prefer [`ContextGuard`] when the previous
/// context has to come back.
pub fn replace_current(ctx: Option<ExecutionContext>) -> Option<ExecutionContext> {
    CURRENT.with(|slot| slot.replace(ctx))
}

/// Scoped substitution of the calling thread's context
///
/// # Example
///
/// ```
/// use txbridge_context::{current, replace_current, ContextGuard, ExecutionContext};
///
/// let host = ExecutionContext::root("host");
/// let app = ExecutionContext::child_of(&host, "app");
/// replace_current(Some(app.clone()));
/// {
///     let _guard = ContextGuard::enter(Some(host.clone()));
///     assert_eq!(current(), Some(host));
/// }
/// assert_eq!(current(), Some(app));
/// ```
#[must_use = "the substitution is undone as soon as the guard is dropped"]
pub struct ContextGuard {
    previous: Option<Option<ExecutionContext>>,
    _not_send: PhantomData<*const ()>,
}

impl ContextGuard {
    /// Make `ctx` current until the guard drops
    pub fn enter(ctx: Option<ExecutionContext>) -> Self {
        let previous = replace_current(ctx);
        ContextGuard {
            previous: Some(previous),
            _not_send: PhantomData,
        }
    }
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            // The slot may already be gone during thread teardown.
            let _ = CURRENT.try_with(|slot| slot.replace(previous));
        }
    }
}

/// Run `f` with `ctx` as the current context
pub fn run_in<R>(ctx: Option<ExecutionContext>, f: impl FnOnce() -> R) -> R {
    let _guard = ContextGuard::enter(ctx);
    f()
}

/// Run `f` with the current context's parent as the current context
///
/// When the current context is a root, `f` runs with no current context.
/// When the thread has no current context at all, `f` runs unchanged.
/// The caller's context is current again once this returns or unwinds.
pub fn run_in_parent<R>(f: impl FnOnce() -> R) -> R {
    let Some(caller) = current() else {
        trace!("no current context; running without substitution");
        return f();
    };
    let target = caller.parent().cloned();
    trace!(
        caller = caller.name(),
        parent = target.as_ref().map(ExecutionContext::name),
        "substituting parent context"
    );
    run_in(target, f)
}
