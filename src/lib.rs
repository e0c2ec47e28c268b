//! webresource - dependency-ordered web resources
//!
//! Declares the scripts, stylesheets and links of a web page as a tree of resources and
//! groups, orders them so that every resource follows the one it depends on, and renders
//! them as HTML tags.
//!
//! # Architecture Overview
//!
//! - A [`Resource`](core::Resource) points at a file in a source directory, optionally
//!   with a compressed variant for production, or at an external URL.
//! - A [`ResourceGroup`](core::ResourceGroup) nests resources and groups and shares a URL
//!   path and an include flag with its members.
//! - A [`ResourceResolver`](resolver::ResourceResolver) flattens the tree, rejects
//!   duplicate names and orders resources by their `depends` name.
//! - A [`ResourceRenderer`](render::ResourceRenderer) renders the resolved list as
//!   newline separated tags below a base URL.
//!
//! Development and production mode are selected through
//! [`ResourceConfig`](config::ResourceConfig) and passed to rendering explicitly.
//!
//! # Core Modules
//!
//! - [`core`] - resources, groups, include flags and the error family
//! - [`resolver`] - path propagation, flattening and dependency ordering
//! - [`render`] - HTML tag rendering
//! - [`checksum`] - content hashes for resource URLs
//! - [`config`] - global configuration (`~/.webresource/config.toml`)
//! - [`manifest`] - `webresource.toml` parsing
//! - [`cli`] - the `webresource` command line tool
//! - [`utils`] - path helpers
//!
//! # Example
//!
//! ```rust
//! use webresource::config::ResourceConfig;
//! use webresource::core::{Resource, ResourceGroup};
//! use webresource::render::{RenderContext, ResourceRenderer};
//! use webresource::resolver::ResourceResolver;
//!
//! # fn main() -> Result<(), webresource::core::ResourceError> {
//! let vendor = ResourceGroup::new("vendor")
//!     .path("vendor")
//!     .with(Resource::script("plugin").directory("/srv/assets").depends("jquery").resource("plugin.js").build()?)
//!     .with(Resource::script("jquery").directory("/srv/assets").resource("jquery.js").build()?);
//!
//! let config = ResourceConfig::default();
//! let mut renderer = ResourceRenderer::new(ResourceResolver::new([vendor]), "https://tld.org");
//! assert_eq!(
//!     renderer.render(&RenderContext::with_fs(&config))?,
//!     "<script src=\"https://tld.org/vendor/jquery.js\"></script>\n\
//!      <script src=\"https://tld.org/vendor/plugin.js\"></script>"
//! );
//! # Ok(())
//! # }
//! ```

pub mod checksum;
pub mod cli;
pub mod config;
pub mod core;
pub mod manifest;
pub mod render;
pub mod resolver;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
