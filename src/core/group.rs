//! Resource groups.
//!
//! A [`ResourceGroup`] is an ordered container of resources and nested groups. Groups
//! share two things with their members: a URL path, which overrides the members' own
//! paths during resolution, and an include flag, which excludes the whole subtree when
//! it evaluates to false.

use std::fmt;

use super::node::{Include, NodeAttrs};
use super::resource::Resource;

/// A member of a resource group or resolver: either a resource or a nested group.
#[derive(Debug, Clone)]
pub enum Member {
    Resource(Resource),
    Group(ResourceGroup),
}

impl Member {
    pub fn name(&self) -> &str {
        self.node().name()
    }

    pub fn is_included(&self) -> bool {
        self.node().is_included()
    }

    pub fn resolved_path(&self) -> &str {
        self.node().resolved_path()
    }

    pub(crate) fn node(&self) -> &NodeAttrs {
        match self {
            Self::Resource(resource) => &resource.node,
            Self::Group(group) => &group.node,
        }
    }

    pub(crate) fn node_mut(&mut self) -> &mut NodeAttrs {
        match self {
            Self::Resource(resource) => &mut resource.node,
            Self::Group(group) => &mut group.node,
        }
    }
}

impl From<Resource> for Member {
    fn from(resource: Resource) -> Self {
        Self::Resource(resource)
    }
}

impl From<ResourceGroup> for Member {
    fn from(group: ResourceGroup) -> Self {
        Self::Group(group)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource(resource) => resource.fmt(f),
            Self::Group(group) => group.fmt(f),
        }
    }
}

/// Named, ordered collection of resources and groups.
///
/// # Examples
///
/// ```rust
/// use webresource::core::{Resource, ResourceGroup};
///
/// # fn main() -> Result<(), webresource::core::ResourceError> {
/// let mut vendor = ResourceGroup::new("vendor").path("static/vendor");
/// vendor.add(Resource::script("jquery").directory("/srv/assets").resource("jquery.js").build()?);
/// vendor.add(Resource::style("bootstrap").directory("/srv/assets").resource("bootstrap.css").build()?);
///
/// assert_eq!(vendor.members().len(), 2);
/// assert_eq!(vendor.to_string(), r#"<ResourceGroup name="vendor">"#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceGroup {
    pub(crate) node: NodeAttrs,
    members: Vec<Member>,
}

impl ResourceGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            node: NodeAttrs::new(name),
            members: Vec::new(),
        }
    }

    /// URL path applied to every member during resolution.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.node.path = path.into();
        self
    }

    #[must_use]
    pub fn include(mut self, include: impl Into<Include>) -> Self {
        self.node.include = include.into();
        self
    }

    /// Include the group only while `predicate` returns true.
    #[must_use]
    pub fn include_if(mut self, predicate: impl Fn() -> bool + 'static) -> Self {
        self.node.include = Include::dynamic(predicate);
        self
    }

    /// Builder-style [`add`](Self::add).
    #[must_use]
    pub fn with(mut self, member: impl Into<Member>) -> Self {
        self.add(member);
        self
    }

    /// Append a member; declaration order is kept.
    pub fn add(&mut self, member: impl Into<Member>) {
        self.members.push(member.into());
    }

    pub fn name(&self) -> &str {
        self.node.name()
    }

    pub fn resolved_path(&self) -> &str {
        self.node.resolved_path()
    }

    pub fn is_included(&self) -> bool {
        self.node.is_included()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub(crate) fn members_mut(&mut self) -> &mut [Member] {
        &mut self.members
    }
}

impl fmt::Display for ResourceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"<ResourceGroup name="{}">"#, self.node.name())
    }
}
