//! Resolution of resource trees into dependency-ordered resource lists.
//!
//! [`ResourceResolver`] owns the root members of a resource tree. Resolving runs three
//! steps over the tree:
//!
//! 1. **Path propagation** - every node receives its resolved URL path. A group's path
//!    overrides the paths of everything below it.
//! 2. **Flattening** - included resources are collected depth-first in declaration
//!    order. Excluded groups drop their whole subtree.
//! 3. **Ordering** - names are checked for uniqueness and each resource with a
//!    dependency is inserted directly after the resource it depends on.
//!
//! Each call recomputes everything from scratch, so resolving an unchanged tree twice
//! yields the same list. Include predicates are evaluated anew on every call.
//!
//! # Examples
//!
//! ```rust
//! use webresource::core::{Resource, ResourceGroup};
//! use webresource::resolver::ResourceResolver;
//!
//! # fn main() -> Result<(), webresource::core::ResourceError> {
//! let group = ResourceGroup::new("js")
//!     .path("static/js")
//!     .with(Resource::script("plugin").directory("/srv/assets").depends("jquery").resource("plugin.js").build()?)
//!     .with(Resource::script("jquery").directory("/srv/assets").resource("jquery.js").build()?);
//!
//! let mut resolver = ResourceResolver::new([group]);
//! let names: Vec<_> = resolver.resolve()?.iter().map(|r| r.name()).collect();
//! assert_eq!(names, ["jquery", "plugin"]);
//! # Ok(())
//! # }
//! ```

mod ordering;
mod tree;

#[cfg(test)]
mod tests;

use crate::core::{Member, Resource, ResourceError};

/// Resolves a list of root members into an ordered list of resources.
#[derive(Debug, Clone, Default)]
pub struct ResourceResolver {
    members: Vec<Member>,
}

impl ResourceResolver {
    pub fn new<I, M>(members: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Member>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Append a root member.
    pub fn add(&mut self, member: impl Into<Member>) {
        self.members.push(member.into());
    }

    /// Included resources in declaration order, without dependency ordering.
    ///
    /// Uses the resolved paths of the last [`resolve`](Self::resolve) call.
    pub fn flat_resources(&self) -> Vec<&Resource> {
        let mut resources = Vec::new();
        tree::flatten(&self.members, &mut resources);
        resources
    }

    /// Resolve paths, flatten the tree and order resources by dependency.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Conflict`] when resource names are not unique
    /// - [`ResourceError::MissingDependency`] when a dependency is not included
    /// - [`ResourceError::CircularDependency`] when dependencies form a cycle
    pub fn resolve(&mut self) -> Result<Vec<&Resource>, ResourceError> {
        tree::propagate_paths(&mut self.members, "");
        let candidates = self.flat_resources();
        tracing::debug!("Resolving {} resource(s)", candidates.len());
        ordering::order_by_dependency(candidates)
    }
}
