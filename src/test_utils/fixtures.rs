//! Test fixtures: sample manifests and temporary project directories.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::manifest::MANIFEST_FILE;

/// Sample `webresource.toml` content.
#[derive(Clone, Debug)]
pub struct ManifestFixture {
    pub name: String,
    pub content: String,
}

impl ManifestFixture {
    /// Icon, local and external stylesheet and a script with a compressed variant.
    pub fn basic() -> Self {
        Self {
            name: "basic".to_string(),
            content: r#"
base_url = "https://example.com"

[[members]]
kind = "group"
name = "res"

  [[members.members]]
  kind = "link"
  name = "icon"
  directory = "assets"
  resource = "icon.png"
  rel = "icon"
  type = "image/png"

  [[members.members]]
  kind = "style"
  name = "css"
  directory = "assets"
  resource = "styles.css"

  [[members.members]]
  kind = "style"
  name = "ext_css"
  url = "https://ext.org/styles.css"

  [[members.members]]
  kind = "script"
  name = "js"
  directory = "assets"
  resource = "script.js"
  compressed = "script.min.js"
"#
            .trim()
            .to_string(),
        }
    }

    /// Scripts declared out of order across two groups.
    pub fn with_dependencies() -> Self {
        Self {
            name: "with_dependencies".to_string(),
            content: r#"
[[members]]
kind = "group"
name = "app"
path = "app"

  [[members.members]]
  kind = "script"
  name = "widgets"
  depends = "jquery"
  resource = "widgets.js"

[[members]]
kind = "group"
name = "vendor"
path = "vendor"

  [[members.members]]
  kind = "script"
  name = "jquery"
  resource = "jquery.js"

  [[members.members]]
  kind = "script"
  name = "jquery-ui"
  depends = "jquery"
  resource = "jquery-ui.js"
"#
            .trim()
            .to_string(),
        }
    }

    /// Two resources depending on each other.
    pub fn circular() -> Self {
        Self {
            name: "circular".to_string(),
            content: r#"
[[members]]
kind = "script"
name = "a"
depends = "b"
resource = "a.js"

[[members]]
kind = "script"
name = "b"
depends = "a"
resource = "b.js"
"#
            .trim()
            .to_string(),
        }
    }

    /// Manifest with invalid TOML syntax.
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: "[[members]\nkind = \"script\"\nname = ".to_string(),
        }
    }
}

/// A temporary project directory, removed on drop.
pub struct TestProject {
    temp_dir: TempDir,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new().context("Failed to create temp directory")?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path().join(MANIFEST_FILE)
    }

    pub fn write_manifest(&self, fixture: &ManifestFixture) -> Result<PathBuf> {
        self.write_file(MANIFEST_FILE, &fixture.content)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}
