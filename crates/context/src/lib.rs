//! Execution contexts for txbridge
//!
//! An execution context decides how names resolve on the current thread.
//! Contexts form a tree: an application unit's context has the host's shared
//! context as its parent.
//!
//! This crate provides:
//! - [`ExecutionContext`]: parent-linked context handle
//! - A thread-local "current context" slot ([`current`], [`replace_current`])
//! - [`ContextGuard`]: substitution that is undone on every exit path
//! - [`run_in`] / [`run_in_parent`]: scoped helpers built on the guard

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod scope;

pub use context::{ContextId, ExecutionContext};
pub use scope::{current, replace_current, run_in, run_in_parent, ContextGuard};
