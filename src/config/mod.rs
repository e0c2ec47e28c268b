//! Configuration management for webresource
//!
//! The only process-wide setting of the resource subsystem is the development mode flag.
//! It is held in [`ResourceConfig`] together with a few defaults used by the command line
//! tool, and passed explicitly to rendering through
//! [`RenderContext`](crate::render::RenderContext).
//!
//! # Configuration File
//!
//! `~/.webresource/config.toml` (`%LOCALAPPDATA%\webresource\config.toml` on Windows),
//! overridable with the `WEBRESOURCE_CONFIG_PATH` environment variable:
//!
//! ```toml
//! development = false
//! base_url = "https://cdn.example.com"
//! hash_algorithm = "sha384"
//! ```
//!
//! `WEBRESOURCE_DEVELOPMENT=1` (or `true`) switches development mode on regardless of the
//! file content.

pub mod global;

pub use global::{CONFIG_PATH_ENV, DEVELOPMENT_ENV, ResourceConfig};
