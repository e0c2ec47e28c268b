//! Core types for webresource
//!
//! This module holds the entity model of the crate and its error family:
//!
//! - [`Resource`] and [`ResourceBuilder`] - a single script, stylesheet or link
//! - [`ResourceGroup`] and [`Member`] - ordered, nestable containers of resources
//! - [`Include`] - static or dynamic inclusion flag shared by resources and groups
//! - [`ResourceError`] - every failure of construction, resolution and rendering
//! - [`ErrorContext`] and [`user_friendly_error`] - error presentation for the CLI

pub mod error;
pub mod group;
pub mod node;
pub mod resource;

pub use error::{ErrorContext, ResourceError, user_friendly_error};
pub use group::{Member, ResourceGroup};
pub use node::{Include, NodeAttrs};
pub use resource::{
    LinkAttrs, Resource, ResourceBuilder, ResourceKind, ResourceRef, STYLESHEET_TYPE, ScriptAttrs,
};
