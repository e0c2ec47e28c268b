//! Global configuration file handling.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::checksum::HashAlgorithm;

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "WEBRESOURCE_CONFIG_PATH";

/// Environment variable overriding the development mode flag.
pub const DEVELOPMENT_ENV: &str = "WEBRESOURCE_DEVELOPMENT";

/// Process-wide settings owned by the host application.
///
/// # Examples
///
/// ```rust
/// use webresource::config::ResourceConfig;
///
/// let config: ResourceConfig = toml::from_str("development = true").unwrap();
/// assert!(config.development);
/// assert!(config.base_url.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Development mode: render uncompressed files and rehash on every render.
    #[serde(default)]
    pub development: bool,

    /// Base URL for rendered resource URLs when the manifest and command line give none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Hash algorithm for manifest resources that do not name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_algorithm: Option<HashAlgorithm>,
}

impl ResourceConfig {
    /// Load the configuration from `path` if given, otherwise from the default location,
    /// then apply environment overrides.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load the configuration from a specific file without environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Write the configuration as TOML, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Default configuration file location, honoring `WEBRESOURCE_CONFIG_PATH`.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("webresource")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".webresource")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup(DEVELOPMENT_ENV) {
            match parse_flag(&value) {
                Some(flag) => self.development = flag,
                None => tracing::warn!("Ignoring invalid {}={}", DEVELOPMENT_ENV, value),
            }
        }
    }
}

/// Parse a boolean environment flag.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
