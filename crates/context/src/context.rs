//! Parent-linked execution contexts

use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Unique identifier for an execution context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(Uuid);

impl ContextId {
    /// Create a new random ContextId using UUID v4
    pub fn new() -> Self {
        ContextId(Uuid::new_v4())
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct ContextInner {
    id: ContextId,
    name: String,
    parent: Option<ExecutionContext>,
}

/// Handle to an execution context
///
/// Cloning is cheap and yields the same context. Equality is identity:
/// two independently created contexts are never equal, even with the same name.
///
/// # Examples
///
/// ```
/// use txbridge_context::ExecutionContext;
///
/// let host = ExecutionContext::root("host");
/// let app = ExecutionContext::child_of(&host, "app");
/// assert_eq!(app.parent(), Some(&host));
/// assert_eq!(app.root_of(), host);
/// assert!(host.parent().is_none());
/// ```
#[derive(Clone)]
pub struct ExecutionContext(Arc<ContextInner>);

impl ExecutionContext {
    /// Create a context without a parent
    pub fn root(name: impl Into<String>) -> Self {
        Self::build(name.into(), None)
    }

    /// Create a context whose parent is `parent`
    pub fn child_of(parent: &ExecutionContext, name: impl Into<String>) -> Self {
        Self::build(name.into(), Some(parent.clone()))
    }

    fn build(name: String, parent: Option<ExecutionContext>) -> Self {
        ExecutionContext(Arc::new(ContextInner {
            id: ContextId::new(),
            name,
            parent,
        }))
    }

    /// Unique id
    pub fn id(&self) -> ContextId {
        self.0.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Declared parent, `None` for a root
    pub fn parent(&self) -> Option<&ExecutionContext> {
        self.0.parent.as_ref()
    }

    /// Topmost ancestor (self for a root)
    pub fn root_of(&self) -> ExecutionContext {
        let mut ctx = self;
        while let Some(parent) = ctx.parent() {
            ctx = parent;
        }
        ctx.clone()
    }
}

impl PartialEq for ExecutionContext {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ExecutionContext {}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("id", &self.0.id)
            .field("name", &self.0.name)
            .field("parent", &self.0.parent.as_ref().map(|p| p.name().to_string()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_equality() {
        let a = ExecutionContext::root("host");
        let b = ExecutionContext::root("host");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_ancestry() {
        let host = ExecutionContext::root("host");
        let app = ExecutionContext::child_of(&host, "app");
        let module = ExecutionContext::child_of(&app, "module");

        assert_eq!(module.parent(), Some(&app));
        assert_eq!(module.root_of(), host);
    }

    #[test]
    fn test_debug_shows_parent_name() {
        let host = ExecutionContext::root("host");
        let app = ExecutionContext::child_of(&host, "app");
        let rendered = format!("{:?}", app);
        assert!(rendered.contains("\"app\""));
        assert!(rendered.contains("\"host\""));
    }
}
