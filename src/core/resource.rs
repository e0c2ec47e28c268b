//! Resource definitions and construction.
//!
//! A [`Resource`] is a single web asset: a script, a stylesheet or a generic `<link>`
//! target. It points either at a file inside a source directory (with an optional
//! compressed variant used in production) or at an external URL.
//!
//! Resources are created through [`ResourceBuilder`], obtained from one of the kind
//! constructors:
//!
//! ```rust
//! use webresource::core::Resource;
//!
//! # fn main() -> Result<(), webresource::core::ResourceError> {
//! let jquery = Resource::script("jquery")
//!     .directory("/srv/assets/js")
//!     .resource("jquery.js")
//!     .compressed("jquery.min.js")
//!     .build()?;
//!
//! let plugin = Resource::script("jquery-plugin")
//!     .depends("jquery")
//!     .directory("/srv/assets/js")
//!     .resource("plugin.js")
//!     .defer("defer")
//!     .build()?;
//!
//! assert_eq!(plugin.depends(), "jquery");
//! assert_eq!(jquery.to_string(), r#"<ScriptResource name="jquery", depends="", path="">"#);
//! # Ok(())
//! # }
//! ```

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::ResourceError;
use super::node::{Include, NodeAttrs};
use crate::checksum::{self, HashAlgorithm};
use crate::render::{RenderContext, render_tag};
use crate::utils::normalize_path;

/// Media type forced on stylesheet resources.
pub const STYLESHEET_TYPE: &str = "text/css";

/// Attributes specific to `<script>` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptAttrs {
    pub async_: Option<String>,
    pub defer: Option<String>,
    pub integrity: Option<String>,
    pub nomodule: Option<String>,
}

/// Attributes specific to `<link>` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkAttrs {
    pub hreflang: Option<String>,
    pub media: Option<String>,
    pub rel: Option<String>,
    pub sizes: Option<String>,
    pub title: Option<String>,
}

/// What kind of HTML tag a resource renders to.
///
/// `Generic` resources take part in resolution but have no tag of their own;
/// rendering one fails with [`ResourceError::AbstractOperation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    Generic,
    Script(ScriptAttrs),
    Link(LinkAttrs),
    Style(LinkAttrs),
}

impl ResourceKind {
    /// Label used when displaying resources.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Generic => "Resource",
            Self::Script(_) => "ScriptResource",
            Self::Link(_) => "LinkResource",
            Self::Style(_) => "StyleResource",
        }
    }

    const fn attr_scope(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Script(_) => "script",
            Self::Link(_) => "link",
            Self::Style(_) => "style",
        }
    }
}

/// Snapshot of a resource's identity, carried by errors and listings.
///
/// `path` is the resolved path, so a resource inside a group shows the group's path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRef {
    pub kind: &'static str,
    pub name: String,
    pub depends: String,
    pub path: String,
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<{} name="{}", depends="{}", path="{}">"#,
            self.kind, self.name, self.depends, self.path
        )
    }
}

/// A single web resource.
#[derive(Debug, Clone)]
pub struct Resource {
    pub(crate) node: NodeAttrs,
    kind: ResourceKind,
    depends: String,
    directory: PathBuf,
    resource: Option<String>,
    compressed: Option<String>,
    url: Option<String>,
    hash: bool,
    hash_algorithm: HashAlgorithm,
    crossorigin: Option<String>,
    referrerpolicy: Option<String>,
    type_: Option<String>,
    hash_cache: RefCell<Option<String>>,
}

impl Resource {
    /// Start building an abstract resource that cannot be rendered on its own.
    pub fn generic(name: impl Into<String>) -> ResourceBuilder {
        ResourceBuilder::new(ResourceKind::Generic, name)
    }

    /// Start building a `<script>` resource.
    pub fn script(name: impl Into<String>) -> ResourceBuilder {
        ResourceBuilder::new(ResourceKind::Script(ScriptAttrs::default()), name)
    }

    /// Start building a `<link>` resource.
    pub fn link(name: impl Into<String>) -> ResourceBuilder {
        ResourceBuilder::new(ResourceKind::Link(LinkAttrs::default()), name)
    }

    /// Start building a stylesheet `<link>` resource.
    ///
    /// The media type is fixed to `text/css`; `media` defaults to `all` and `rel` to
    /// `stylesheet`.
    pub fn style(name: impl Into<String>) -> ResourceBuilder {
        let mut builder = ResourceBuilder::new(
            ResourceKind::Style(LinkAttrs {
                media: Some("all".to_string()),
                rel: Some("stylesheet".to_string()),
                ..LinkAttrs::default()
            }),
            name,
        );
        builder.type_ = Some(STYLESHEET_TYPE.to_string());
        builder
    }

    pub fn name(&self) -> &str {
        self.node.name()
    }

    /// Name of the resource this one must follow, empty if none.
    pub fn depends(&self) -> &str {
        &self.depends
    }

    pub fn path(&self) -> &str {
        self.node.path()
    }

    pub fn resolved_path(&self) -> &str {
        self.node.resolved_path()
    }

    pub fn is_included(&self) -> bool {
        self.node.is_included()
    }

    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    pub fn compressed(&self) -> Option<&str> {
        self.compressed.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn hash_enabled(&self) -> bool {
        self.hash
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }

    pub fn crossorigin(&self) -> Option<&str> {
        self.crossorigin.as_deref()
    }

    pub fn referrerpolicy(&self) -> Option<&str> {
        self.referrerpolicy.as_deref()
    }

    pub fn type_(&self) -> Option<&str> {
        self.type_.as_deref()
    }

    /// File name for the given mode.
    ///
    /// Production mode prefers the compressed file when one is configured. Resources
    /// defined only by an external URL have no file name.
    pub fn file_name(&self, development: bool) -> Option<&str> {
        match (&self.compressed, development) {
            (Some(compressed), false) => Some(compressed),
            _ => self.resource.as_deref(),
        }
    }

    /// Absolute path of the file selected for the given mode.
    pub fn file_path(&self, development: bool) -> Option<PathBuf> {
        self.file_name(development).map(|name| self.directory.join(name))
    }

    /// Base64 digest of the selected file.
    ///
    /// The digest is cached in production mode, where files are expected to stay
    /// unchanged for the lifetime of the process. Development mode rehashes on every
    /// call.
    pub fn file_hash(&self, ctx: &RenderContext<'_>) -> Result<String, ResourceError> {
        let development = ctx.config.development;
        if !development && let Some(cached) = self.hash_cache.borrow().as_ref() {
            return Ok(cached.clone());
        }

        let path = self.file_path(development).ok_or_else(|| ResourceError::Construction {
            message: format!("resource '{}' has no file to hash", self.name()),
        })?;
        let digest = checksum::file_digest(ctx.reader, &path, self.hash_algorithm)?;

        if !development {
            *self.hash_cache.borrow_mut() = Some(digest.clone());
        }
        Ok(digest)
    }

    /// URL of the resource below `base_url`.
    ///
    /// External URLs are returned unchanged. Otherwise the base URL, the resolved path
    /// and the selected file name are joined with single slashes and, when hashing is
    /// enabled, the file digest is appended as fragment.
    pub fn resource_url(
        &self,
        base_url: &str,
        ctx: &RenderContext<'_>,
    ) -> Result<String, ResourceError> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }

        let file_name =
            self.file_name(ctx.config.development).ok_or_else(|| ResourceError::Construction {
                message: format!("resource '{}' has neither file nor url", self.name()),
            })?;

        let mut parts = vec![base_url.trim_end_matches('/')];
        let path = self.resolved_path().trim_matches('/');
        if !path.is_empty() {
            parts.push(path);
        }
        parts.push(file_name);
        let url = parts.join("/");

        if self.hash {
            let hash = self.file_hash(ctx)?;
            return Ok(format!("{url}#{hash}"));
        }
        Ok(url)
    }

    /// Render the HTML tag for this resource.
    pub fn render(&self, base_url: &str, ctx: &RenderContext<'_>) -> Result<String, ResourceError> {
        let attr = |value: &Option<String>| value.clone();
        match &self.kind {
            ResourceKind::Generic => Err(ResourceError::AbstractOperation {
                resource: self.to_ref(),
            }),
            ResourceKind::Script(script) => {
                let src = self.resource_url(base_url, ctx)?;
                Ok(render_tag(
                    "script",
                    true,
                    [
                        ("src", Some(src)),
                        ("crossorigin", attr(&self.crossorigin)),
                        ("referrerpolicy", attr(&self.referrerpolicy)),
                        ("type", attr(&self.type_)),
                        ("async", attr(&script.async_)),
                        ("defer", attr(&script.defer)),
                        ("integrity", attr(&script.integrity)),
                        ("nomodule", attr(&script.nomodule)),
                    ],
                ))
            }
            ResourceKind::Link(link) | ResourceKind::Style(link) => {
                let href = self.resource_url(base_url, ctx)?;
                let sizes = match self.kind {
                    ResourceKind::Style(_) => None,
                    _ => attr(&link.sizes),
                };
                Ok(render_tag(
                    "link",
                    false,
                    [
                        ("href", Some(href)),
                        ("crossorigin", attr(&self.crossorigin)),
                        ("referrerpolicy", attr(&self.referrerpolicy)),
                        ("type", attr(&self.type_)),
                        ("hreflang", attr(&link.hreflang)),
                        ("media", attr(&link.media)),
                        ("rel", attr(&link.rel)),
                        ("sizes", sizes),
                        ("title", attr(&link.title)),
                    ],
                ))
            }
        }
    }

    /// Identity snapshot used in errors and listings.
    pub fn to_ref(&self) -> ResourceRef {
        ResourceRef {
            kind: self.kind.label(),
            name: self.name().to_string(),
            depends: self.depends.clone(),
            path: self.resolved_path().to_string(),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_ref().fmt(f)
    }
}

impl PartialEq for Resource {
    /// Resources compare by identity and configuration; the hash cache is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.to_ref() == other.to_ref()
            && self.kind == other.kind
            && self.directory == other.directory
            && self.resource == other.resource
            && self.compressed == other.compressed
            && self.url == other.url
            && self.resolved_path() == other.resolved_path()
    }
}

/// Builder for [`Resource`].
///
/// Kind-specific setters (`async_`, `media`, ...) used on a resource of another kind are
/// reported by [`build`](Self::build) instead of being silently dropped.
#[derive(Debug, Clone)]
#[must_use]
pub struct ResourceBuilder {
    kind: ResourceKind,
    node: NodeAttrs,
    depends: String,
    directory: Option<PathBuf>,
    base_dir: Option<PathBuf>,
    resource: Option<String>,
    compressed: Option<String>,
    url: Option<String>,
    hash: bool,
    hash_algorithm: HashAlgorithm,
    crossorigin: Option<String>,
    referrerpolicy: Option<String>,
    type_: Option<String>,
    misplaced: Vec<&'static str>,
}

macro_rules! script_attr {
    ($(#[$meta:meta])* $method:ident, $field:ident, $attr:literal) => {
        $(#[$meta])*
        pub fn $method(mut self, value: impl Into<String>) -> Self {
            match &mut self.kind {
                ResourceKind::Script(script) => script.$field = Some(value.into()),
                _ => self.misplaced.push($attr),
            }
            self
        }
    };
}

macro_rules! link_attr {
    ($(#[$meta:meta])* $method:ident, $attr:literal) => {
        $(#[$meta])*
        pub fn $method(mut self, value: impl Into<String>) -> Self {
            match &mut self.kind {
                ResourceKind::Link(link) | ResourceKind::Style(link) => {
                    link.$method = Some(value.into())
                }
                _ => self.misplaced.push($attr),
            }
            self
        }
    };
}

impl ResourceBuilder {
    fn new(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            node: NodeAttrs::new(name),
            depends: String::new(),
            directory: None,
            base_dir: None,
            resource: None,
            compressed: None,
            url: None,
            hash: false,
            hash_algorithm: HashAlgorithm::default(),
            crossorigin: None,
            referrerpolicy: None,
            type_: None,
            misplaced: Vec::new(),
        }
    }

    /// Name of the resource that must precede this one.
    pub fn depends(mut self, name: impl Into<String>) -> Self {
        self.depends = name.into();
        self
    }

    /// Directory containing the resource files.
    ///
    /// Relative directories are resolved against [`base_dir`](Self::base_dir). Resources
    /// without an external URL need the result to be absolute.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Base for relative resource directories.
    pub fn base_dir(mut self, base: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base.into());
        self
    }

    /// URL path segment used when building the resource URL.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.node.path = path.into();
        self
    }

    /// Resource file name.
    pub fn resource(mut self, file_name: impl Into<String>) -> Self {
        self.resource = Some(file_name.into());
        self
    }

    /// Compressed file name used in production mode.
    pub fn compressed(mut self, file_name: impl Into<String>) -> Self {
        self.compressed = Some(file_name.into());
        self
    }

    /// External URL; overrides every file based URL setting.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn include(mut self, include: impl Into<Include>) -> Self {
        self.node.include = include.into();
        self
    }

    /// Include the resource only while `predicate` returns true.
    pub fn include_if(mut self, predicate: impl Fn() -> bool + 'static) -> Self {
        self.node.include = Include::dynamic(predicate);
        self
    }

    /// Append a content hash fragment to the resource URL.
    pub fn hash(mut self, enabled: bool) -> Self {
        self.hash = enabled;
        self
    }

    pub fn hash_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = algorithm;
        self
    }

    pub fn crossorigin(mut self, value: impl Into<String>) -> Self {
        self.crossorigin = Some(value.into());
        self
    }

    pub fn referrerpolicy(mut self, value: impl Into<String>) -> Self {
        self.referrerpolicy = Some(value.into());
        self
    }

    /// Media type of the resource. Stylesheets always use `text/css`.
    pub fn type_(mut self, value: impl Into<String>) -> Self {
        match self.kind {
            ResourceKind::Style(_) => self.misplaced.push("type"),
            _ => self.type_ = Some(value.into()),
        }
        self
    }

    script_attr!(async_, async_, "async");
    script_attr!(defer, defer, "defer");
    script_attr!(
        /// Subresource integrity value, e.g. `sha384-...`.
        integrity,
        integrity,
        "integrity"
    );
    script_attr!(nomodule, nomodule, "nomodule");

    link_attr!(hreflang, "hreflang");
    link_attr!(media, "media");
    link_attr!(rel, "rel");
    link_attr!(title, "title");

    /// Size hint for icons. Not available on stylesheets.
    pub fn sizes(mut self, value: impl Into<String>) -> Self {
        match &mut self.kind {
            ResourceKind::Link(link) => link.sizes = Some(value.into()),
            _ => self.misplaced.push("sizes"),
        }
        self
    }

    /// Finish the resource.
    ///
    /// # Errors
    ///
    /// Fails with [`ResourceError::Construction`] when neither a resource file nor an
    /// external URL was given, or when an attribute was set that the resource kind does
    /// not support. A file-based resource also fails unless its directory, after joining
    /// with `base_dir`, is absolute.
    pub fn build(self) -> Result<Resource, ResourceError> {
        if self.resource.is_none() && self.url.is_none() {
            return Err(ResourceError::Construction {
                message: format!(
                    "either resource or url must be given for resource '{}'",
                    self.node.name
                ),
            });
        }
        if let Some(attr) = self.misplaced.first() {
            return Err(ResourceError::Construction {
                message: format!(
                    "attribute '{attr}' is not supported on {} resource '{}'",
                    self.kind.attr_scope(),
                    self.node.name
                ),
            });
        }

        let directory = match (self.directory, self.base_dir) {
            (Some(dir), Some(base)) if dir.is_relative() => normalize_path(&base.join(dir)),
            (Some(dir), _) => normalize_path(&dir),
            (None, Some(base)) => normalize_path(&base),
            (None, None) => PathBuf::new(),
        };
        if self.url.is_none() && !directory.is_absolute() {
            return Err(ResourceError::Construction {
                message: format!(
                    "resource '{}' needs an absolute directory, got '{}'; pass an absolute directory or a base_dir",
                    self.node.name,
                    directory.display()
                ),
            });
        }

        Ok(Resource {
            node: self.node,
            kind: self.kind,
            depends: self.depends,
            directory,
            resource: self.resource,
            compressed: self.compressed,
            url: self.url,
            hash: self.hash,
            hash_algorithm: self.hash_algorithm,
            crossorigin: self.crossorigin,
            referrerpolicy: self.referrerpolicy,
            type_: self.type_,
            hash_cache: RefCell::new(None),
        })
    }
}
