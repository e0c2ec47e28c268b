//! Manifest parsing for webresource
//!
//! A manifest (`webresource.toml`) declares a resource tree in TOML. Every entry of a
//! `members` array is a resource or a group, told apart by its `kind` key; groups nest
//! further `members` arrays.
//!
//! ```toml
//! base_url = "https://cdn.example.com"
//!
//! [[members]]
//! kind = "group"
//! name = "vendor"
//! path = "static/vendor"
//!
//!   [[members.members]]
//!   kind = "script"
//!   name = "jquery"
//!   directory = "assets/js"
//!   resource = "jquery.js"
//!   compressed = "jquery.min.js"
//!   hash = true
//!
//!   [[members.members]]
//!   kind = "script"
//!   name = "jquery-ui"
//!   depends = "jquery"
//!   directory = "assets/js"
//!   resource = "jquery-ui.js"
//!
//! [[members]]
//! kind = "style"
//! name = "theme"
//! resource = "theme.css"
//! include = { env = "WITH_THEME" }
//! ```
//!
//! Member kinds are `group`, `script`, `link`, `style` and `resource` (a generic resource
//! that orders but does not render). Relative `directory` values are resolved against the
//! directory containing the manifest.
//!
//! `include` is either a boolean or `{ env = "NAME" }`; the latter is re-evaluated on
//! every resolve and is true while the variable holds a non-empty value other than a
//! false-like flag (`0`, `false`, `no`, `off`).

mod helpers;

pub use helpers::{MANIFEST_FILE, find_manifest, find_manifest_from, find_manifest_with_optional};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ResourceConfig;
use crate::config::global::parse_flag;
use crate::core::{Include, Member, Resource, ResourceBuilder, ResourceError, ResourceGroup};
use crate::resolver::ResourceResolver;

/// Parsed manifest file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Base URL for rendered resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Root members in declaration order.
    #[serde(default)]
    pub members: Vec<MemberEntry>,

    /// Absolute directory containing the manifest; base for relative resource directories.
    #[serde(skip)]
    pub manifest_dir: Option<PathBuf>,
}

/// Inclusion setting of a manifest member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IncludeSetting {
    Flag(bool),
    Env { env: String },
}

impl Default for IncludeSetting {
    fn default() -> Self {
        Self::Flag(true)
    }
}

impl IncludeSetting {
    fn to_include(&self) -> Include {
        match self {
            Self::Flag(flag) => Include::Static(*flag),
            Self::Env { env } => {
                let var = env.clone();
                Include::dynamic(move || {
                    std::env::var(&var).ok().is_some_and(|value| {
                        !value.trim().is_empty() && parse_flag(&value) != Some(false)
                    })
                })
            }
        }
    }
}

/// A resource or group entry of a manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberEntry {
    /// `group`, `script`, `link`, `style` or `resource`.
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default)]
    pub include: IncludeSetting,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub depends: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub hash: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossorigin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrerpolicy: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, rename = "async", skip_serializing_if = "Option::is_none")]
    pub async_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nomodule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hreflang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberEntry>,
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest file {}", path.display()))?;

        let mut manifest: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid TOML syntax in manifest file: {}", path.display()))?;

        let parent =
            path.parent().ok_or_else(|| anyhow::anyhow!("Manifest path has no parent directory"))?;
        manifest.manifest_dir = Some(std::path::absolute(parent).with_context(|| {
            format!("Failed to resolve manifest directory {}", parent.display())
        })?);
        tracing::debug!(
            "Loaded manifest {} with {} root member(s)",
            path.display(),
            manifest.members.len()
        );

        Ok(manifest)
    }

    /// Build the resource tree declared by the manifest.
    ///
    /// `config` supplies the default hash algorithm.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Construction`] for unknown member kinds, resources without file
    ///   or URL, unsupported attributes, resources with nested members and groups with
    ///   resource keys
    /// - [`ResourceError::UnsupportedAlgorithm`] for unknown hash algorithm names
    pub fn to_resolver(&self, config: &ResourceConfig) -> Result<ResourceResolver, ResourceError> {
        let members = self
            .members
            .iter()
            .map(|entry| self.build_member(entry, config))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ResourceResolver::new(members))
    }

    fn build_member(&self, entry: &MemberEntry, config: &ResourceConfig) -> Result<Member, ResourceError> {
        let builder = match entry.kind.as_str() {
            "group" => return self.build_group(entry, config).map(Member::Group),
            "script" => Resource::script(&entry.name),
            "link" => Resource::link(&entry.name),
            "style" => Resource::style(&entry.name),
            "resource" => Resource::generic(&entry.name),
            other => {
                return Err(ResourceError::Construction {
                    message: format!(
                        "member '{}' has invalid kind '{other}', expected one of: group, script, link, style, resource",
                        entry.name
                    ),
                });
            }
        };

        if !entry.members.is_empty() {
            return Err(ResourceError::Construction {
                message: format!("{} '{}' cannot contain members", entry.kind, entry.name),
            });
        }

        self.build_resource(builder, entry, config).map(Member::Resource)
    }

    fn build_group(&self, entry: &MemberEntry, config: &ResourceConfig) -> Result<ResourceGroup, ResourceError> {
        let group_keys_only = MemberEntry {
            kind: entry.kind.clone(),
            name: entry.name.clone(),
            path: entry.path.clone(),
            include: entry.include.clone(),
            members: entry.members.clone(),
            ..MemberEntry::default()
        };
        if *entry != group_keys_only {
            return Err(ResourceError::Construction {
                message: format!(
                    "group '{}' only supports name, path, include and members",
                    entry.name
                ),
            });
        }

        let mut group =
            ResourceGroup::new(&entry.name).path(&entry.path).include(entry.include.to_include());
        for member in &entry.members {
            group.add(self.build_member(member, config)?);
        }
        Ok(group)
    }

    fn build_resource(
        &self,
        mut builder: ResourceBuilder,
        entry: &MemberEntry,
        config: &ResourceConfig,
    ) -> Result<Resource, ResourceError> {
        let hash_algorithm = match &entry.hash_algorithm {
            Some(name) => name.parse()?,
            None => config.hash_algorithm.unwrap_or_default(),
        };

        builder = builder
            .depends(&entry.depends)
            .path(&entry.path)
            .include(entry.include.to_include())
            .hash(entry.hash)
            .hash_algorithm(hash_algorithm);

        if let Some(dir) = &self.manifest_dir {
            builder = builder.base_dir(dir);
        }

        macro_rules! apply {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = &entry.$field {
                        builder = builder.$field(value);
                    }
                )*
            };
        }

        apply!(
            directory,
            resource,
            compressed,
            url,
            crossorigin,
            referrerpolicy,
            type_,
            async_,
            defer,
            integrity,
            nomodule,
            hreflang,
            media,
            rel,
            sizes,
            title,
        );

        builder.build()
    }
}
