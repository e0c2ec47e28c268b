//! Attributes shared by resources and resource groups.
//!
//! Every node in a resource tree has a name, an optional URL path segment and an
//! inclusion flag. The resolver assigns each node a *resolved path* while it walks the
//! tree; until then the resolved path falls back to the node's own path.

use std::fmt;
use std::rc::Rc;

/// Inclusion flag of a resource or group.
///
/// `Dynamic` predicates are evaluated every time inclusion is queried and the result is
/// never cached, so a predicate may depend on state that changes between renders
/// (request data, feature toggles, environment variables).
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use webresource::core::Include;
///
/// let flag = Rc::new(Cell::new(true));
/// let include = {
///     let flag = Rc::clone(&flag);
///     Include::dynamic(move || flag.get())
/// };
/// assert!(include.evaluate());
/// flag.set(false);
/// assert!(!include.evaluate());
/// ```
#[derive(Clone)]
pub enum Include {
    /// Fixed inclusion flag.
    Static(bool),
    /// Predicate evaluated on every query.
    Dynamic(Rc<dyn Fn() -> bool>),
}

impl Include {
    /// Wrap a predicate as a dynamic inclusion flag.
    pub fn dynamic(predicate: impl Fn() -> bool + 'static) -> Self {
        Self::Dynamic(Rc::new(predicate))
    }

    /// Evaluate the flag now.
    pub fn evaluate(&self) -> bool {
        match self {
            Self::Static(flag) => *flag,
            Self::Dynamic(predicate) => predicate(),
        }
    }
}

impl Default for Include {
    fn default() -> Self {
        Self::Static(true)
    }
}

impl From<bool> for Include {
    fn from(flag: bool) -> Self {
        Self::Static(flag)
    }
}

impl fmt::Debug for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(flag) => f.debug_tuple("Static").field(flag).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Name, path and inclusion state common to resources and groups.
#[derive(Debug, Clone, Default)]
pub struct NodeAttrs {
    pub(crate) name: String,
    pub(crate) path: String,
    pub(crate) include: Include,
    resolved_path: Option<String>,
}

impl NodeAttrs {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// URL path configured on the node itself.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path assigned by the last resolve pass, or the node's own path before that.
    pub fn resolved_path(&self) -> &str {
        self.resolved_path.as_deref().unwrap_or(&self.path)
    }

    /// Whether the node takes part in resolution, evaluated freshly on every call.
    pub fn is_included(&self) -> bool {
        self.include.evaluate()
    }

    /// Recompute the resolved path from the path inherited from enclosing groups.
    ///
    /// A non-empty inherited path always wins over the node's own path.
    pub(crate) fn inherit_path(&mut self, inherited: &str) {
        self.resolved_path = if inherited.is_empty() {
            None
        } else {
            Some(inherited.to_string())
        };
    }
}
