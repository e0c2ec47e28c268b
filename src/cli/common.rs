//! Shared helpers for CLI commands.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::ResourceConfig;
use crate::manifest::{Manifest, find_manifest_with_optional};
use crate::render::DEFAULT_BASE_URL;
use crate::resolver::ResourceResolver;

/// Output format for listing and validation commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output with colors.
    #[default]
    Text,

    /// Structured JSON output for automation.
    Json,
}

/// Manifest and configuration a command operates on.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
    pub config: ResourceConfig,
}

impl ProjectContext {
    /// Locate and load the manifest, then load the global configuration.
    pub fn load(manifest_path: Option<PathBuf>, config_path: Option<&Path>) -> Result<Self> {
        let manifest_path = find_manifest_with_optional(manifest_path)
            .context("No webresource.toml found. Create one to declare your resources.")?;
        let manifest = Manifest::load(&manifest_path)?;
        let config = ResourceConfig::load(config_path).context("Failed to load configuration")?;

        Ok(Self {
            manifest_path,
            manifest,
            config,
        })
    }

    /// Build a fresh resource tree from the manifest.
    pub fn resolver(&self) -> Result<ResourceResolver> {
        self.manifest.to_resolver(&self.config).with_context(|| {
            format!("Failed to build resources from {}", self.manifest_path.display())
        })
    }

    /// Base URL by precedence: `explicit`, manifest, configuration, built-in default.
    pub fn base_url(&self, explicit: Option<&str>) -> String {
        explicit
            .or(self.manifest.base_url.as_deref())
            .or(self.config.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }
}
