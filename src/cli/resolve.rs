//! List resources in dependency order.
//!
//! # Output Format
//!
//! ```text
//! 1. jquery (ScriptResource) path=static/vendor
//! 2. jquery-ui (ScriptResource) path=static/vendor depends=jquery
//! 3. theme (StyleResource)
//! ```
//!
//! `--format json` prints the same entries as a JSON array.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::common::{OutputFormat, ProjectContext};
use crate::core::Resource;

#[derive(Args, Debug, Default)]
pub struct ResolveCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// One resolved resource as listed by `resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub name: String,
    pub kind: &'static str,
    pub depends: String,
    pub path: String,
    /// File selected for the current mode, or the external URL.
    pub source: String,
}

impl ResolvedEntry {
    fn new(resource: &Resource, development: bool) -> Self {
        let source = match resource.url() {
            Some(url) => url.to_string(),
            None => resource
                .file_path(development)
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
        };

        Self {
            name: resource.name().to_string(),
            kind: resource.kind().label(),
            depends: resource.depends().to_string(),
            path: resource.resolved_path().to_string(),
            source,
        }
    }
}

impl ResolveCommand {
    pub fn execute(self, ctx: ProjectContext) -> Result<()> {
        let entries = Self::entries(&ctx)?;

        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&entries)
                    .context("Failed to serialize resolved resources")?;
                println!("{json}");
            }
            OutputFormat::Text => {
                if entries.is_empty() {
                    println!("No resources to render.");
                }
                for (index, entry) in entries.iter().enumerate() {
                    let mut line =
                        format!("{}. {} ({})", index + 1, entry.name.bold(), entry.kind.cyan());
                    if !entry.path.is_empty() {
                        line.push_str(&format!(" path={}", entry.path));
                    }
                    if !entry.depends.is_empty() {
                        line.push_str(&format!(" depends={}", entry.depends.yellow()));
                    }
                    println!("{line}");
                }
            }
        }
        Ok(())
    }

    /// Resolve the manifest and describe every resource in order.
    pub fn entries(ctx: &ProjectContext) -> Result<Vec<ResolvedEntry>> {
        let mut resolver = ctx.resolver()?;
        let resources = resolver
            .resolve()
            .with_context(|| format!("Failed to resolve {}", ctx.manifest_path.display()))?;

        Ok(resources
            .into_iter()
            .map(|resource| ResolvedEntry::new(resource, ctx.config.development))
            .collect())
    }
}
