//! Locating the manifest file.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

/// File name searched for when no manifest path is given.
pub const MANIFEST_FILE: &str = "webresource.toml";

/// Search for `webresource.toml` from the current directory upwards.
pub fn find_manifest() -> Result<PathBuf> {
    let current = std::env::current_dir()
        .context("Cannot determine current working directory")?;
    find_manifest_from(current)
}

/// Use `explicit_path` when given, otherwise search from the current directory.
///
/// # Errors
///
/// Fails when the explicit path does not exist or the search finds no manifest.
pub fn find_manifest_with_optional(explicit_path: Option<PathBuf>) -> Result<PathBuf> {
    match explicit_path {
        Some(path) => {
            if path.exists() {
                Ok(path)
            } else {
                bail!("Manifest file {} not found", path.display())
            }
        }
        None => find_manifest(),
    }
}

/// Search for `webresource.toml` in `current` and its ancestors.
pub fn find_manifest_from(mut current: PathBuf) -> Result<PathBuf> {
    loop {
        let manifest_path = current.join(MANIFEST_FILE);
        if manifest_path.exists() {
            return Ok(manifest_path);
        }

        if !current.pop() {
            bail!(
                "Manifest file {MANIFEST_FILE} not found in current directory or any parent directory"
            );
        }
    }
}
