//! Render the manifest's resources as HTML tags.
//!
//! # Examples
//!
//! ```bash
//! webresource render
//! webresource render --base-url https://cdn.example.com
//! webresource render --development
//! ```

use anyhow::{Context, Result};
use clap::Args;

use super::common::ProjectContext;
use crate::render::{RenderContext, ResourceRenderer};

/// Print the rendered tags to stdout, one per line.
#[derive(Args, Debug, Default)]
pub struct RenderCommand {
    /// Base URL for resource URLs. Overrides the manifest and configuration.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Render uncompressed files and rehash on every render.
    #[arg(long, conflicts_with = "production")]
    pub development: bool,

    /// Render compressed files. Overrides a development configuration.
    #[arg(long)]
    pub production: bool,
}

impl RenderCommand {
    pub fn execute(self, mut ctx: ProjectContext) -> Result<()> {
        let html = self.render(&mut ctx)?;
        if !html.is_empty() {
            println!("{html}");
        }
        Ok(())
    }

    /// Apply mode flags to the configuration and render the manifest.
    pub fn render(&self, ctx: &mut ProjectContext) -> Result<String> {
        if self.development {
            ctx.config.development = true;
        } else if self.production {
            ctx.config.development = false;
        }

        let base_url = ctx.base_url(self.base_url.as_deref());
        tracing::debug!(
            "Rendering {} in {} mode with base URL {}",
            ctx.manifest_path.display(),
            if ctx.config.development { "development" } else { "production" },
            base_url
        );

        let mut renderer = ResourceRenderer::new(ctx.resolver()?, base_url);
        renderer
            .render(&RenderContext::with_fs(&ctx.config))
            .with_context(|| format!("Failed to render {}", ctx.manifest_path.display()))
    }
}
