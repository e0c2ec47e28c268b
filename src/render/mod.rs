//! HTML rendering of resolved resources.
//!
//! [`render_tag`] produces a single canonical tag. Attribute order never depends on the
//! order in which attributes were supplied, so rendered output is stable across runs and
//! can be compared or cached by callers.
//!
//! [`ResourceRenderer`] resolves a [`ResourceResolver`] and joins the tags of all
//! resulting resources, one per line.

use crate::checksum::{FileReader, FsReader};
use crate::config::ResourceConfig;
use crate::core::ResourceError;
use crate::resolver::ResourceResolver;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://tld.org";

/// Mode and file access used while building resource URLs.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a ResourceConfig,
    pub reader: &'a dyn FileReader,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a ResourceConfig, reader: &'a dyn FileReader) -> Self {
        Self {
            config,
            reader,
        }
    }

    /// Context reading resource files from disk.
    pub fn with_fs(config: &'a ResourceConfig) -> Self {
        Self::new(config, &FsReader)
    }
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render an HTML tag.
///
/// Attributes without a value are dropped, the rest are sorted by name. Paired tags are
/// rendered with an empty body, other tags self-close.
///
/// # Examples
///
/// ```rust
/// use webresource::render::render_tag;
///
/// let tag = render_tag("tag", false, [("foo", Some("bar".to_string())), ("baz", None)]);
/// assert_eq!(tag, r#"<tag foo="bar" />"#);
///
/// let tag = render_tag("tag", true, [("foo", Some("bar".to_string()))]);
/// assert_eq!(tag, r#"<tag foo="bar"></tag>"#);
/// ```
pub fn render_tag<'n>(
    tag: &str,
    paired: bool,
    attributes: impl IntoIterator<Item = (&'n str, Option<String>)>,
) -> String {
    let mut attrs: Vec<(&str, String)> = attributes
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
        .collect();
    attrs.sort_by(|a, b| a.0.cmp(b.0));

    let mut opening = format!("<{tag}");
    for (name, value) in &attrs {
        opening.push_str(&format!(r#" {name}="{}""#, escape_attr(value)));
    }

    if paired {
        format!("{opening}></{tag}>")
    } else {
        format!("{opening} />")
    }
}

/// Renders all resources of a resolver as newline separated HTML tags.
///
/// # Examples
///
/// ```rust
/// use webresource::config::ResourceConfig;
/// use webresource::core::{Resource, ResourceGroup};
/// use webresource::render::{RenderContext, ResourceRenderer};
/// use webresource::resolver::ResourceResolver;
///
/// # fn main() -> Result<(), webresource::core::ResourceError> {
/// let group = ResourceGroup::new("res")
///     .with(Resource::style("css").directory("/srv/assets").resource("styles.css").build()?)
///     .with(Resource::script("js").directory("/srv/assets").resource("script.js").compressed("script.min.js").build()?);
///
/// let config = ResourceConfig::default();
/// let mut renderer = ResourceRenderer::new(ResourceResolver::new([group]), "https://example.com");
/// let html = renderer.render(&RenderContext::with_fs(&config))?;
/// assert_eq!(
///     html,
///     "<link href=\"https://example.com/styles.css\" media=\"all\" rel=\"stylesheet\" type=\"text/css\" />\n\
///      <script src=\"https://example.com/script.min.js\"></script>"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceRenderer {
    resolver: ResourceResolver,
    base_url: String,
}

impl ResourceRenderer {
    pub fn new(resolver: ResourceResolver, base_url: impl Into<String>) -> Self {
        Self {
            resolver,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn resolver(&self) -> &ResourceResolver {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut ResourceResolver {
        &mut self.resolver
    }

    /// Resolve once and render every resource.
    ///
    /// # Errors
    ///
    /// Any resolution or rendering error aborts the whole render; no partial output is
    /// returned.
    pub fn render(&mut self, ctx: &RenderContext<'_>) -> Result<String, ResourceError> {
        let resources = self.resolver.resolve()?;
        let tags = resources
            .iter()
            .map(|resource| resource.render(&self.base_url, ctx))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Rendered {} resource tag(s)", tags.len());
        Ok(tags.join("\n"))
    }
}

impl Default for ResourceRenderer {
    fn default() -> Self {
        Self::new(ResourceResolver::default(), DEFAULT_BASE_URL)
    }
}
