//! Validate a manifest by resolving and rendering it.
//!
//! Validation runs the same steps as `render` without printing the HTML:
//!
//! 1. **Manifest**: the file is found, parses and converts into a resource tree
//! 2. **Resolution**: names are unique and every dependency can be ordered
//! 3. **Rendering**: every resource renders, including content hashes
//!
//! Local resource files that do not exist are reported as warnings, since only hashed
//! resources need their file at render time.
//!
//! # Examples
//!
//! ```bash
//! webresource validate
//! webresource validate --format json
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::common::{OutputFormat, ProjectContext};
use crate::render::RenderContext;

#[derive(Args, Debug, Default)]
pub struct ValidateCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Aggregated validation outcome, printed as JSON with `--format json`.
///
/// ```json
/// {
///   "valid": true,
///   "manifest_valid": true,
///   "resources_resolvable": true,
///   "resources_renderable": true,
///   "resources_total": 4,
///   "errors": [],
///   "warnings": ["File for resource 'theme' does not exist: /srv/site/theme.css"]
/// }
/// ```
#[derive(Debug, Default, Serialize)]
pub struct ValidationResults {
    pub valid: bool,
    pub manifest_valid: bool,
    pub resources_resolvable: bool,
    pub resources_renderable: bool,
    /// Number of included resources.
    pub resources_total: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResults {
    fn fail(&mut self, error: &anyhow::Error) {
        self.valid = false;
        self.errors.push(format!("{error:#}"));
    }
}

impl ValidateCommand {
    /// Validate the loaded project; `ctx` is the outcome of loading it.
    pub fn execute(self, ctx: Result<ProjectContext>) -> Result<()> {
        let results = Self::validate(ctx);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
            OutputFormat::Text => Self::print_text(&results),
        }

        if results.valid {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Validation failed with {} error(s)", results.errors.len()))
        }
    }

    pub fn validate(ctx: Result<ProjectContext>) -> ValidationResults {
        let mut results = ValidationResults {
            valid: true,
            ..ValidationResults::default()
        };

        let ctx = match ctx {
            Ok(ctx) => ctx,
            Err(e) => {
                results.fail(&e);
                return results;
            }
        };

        let mut resolver = match ctx.resolver() {
            Ok(resolver) => resolver,
            Err(e) => {
                results.fail(&e);
                return results;
            }
        };
        results.manifest_valid = true;

        let base_url = ctx.base_url(None);
        let render_ctx = RenderContext::with_fs(&ctx.config);
        let resources = match resolver.resolve() {
            Ok(resources) => resources,
            Err(e) => {
                results.fail(&anyhow::Error::from(e));
                return results;
            }
        };
        results.resources_resolvable = true;
        results.resources_total = resources.len();

        if resources.is_empty() {
            results.warnings.push("Manifest declares no included resources".to_string());
        }

        let mut renderable = true;
        for resource in &resources {
            if resource.url().is_none()
                && let Some(path) = resource.file_path(ctx.config.development)
                && !path.exists()
            {
                results.warnings.push(format!(
                    "File for resource '{}' does not exist: {}",
                    resource.name(),
                    path.display()
                ));
            }

            if let Err(e) = resource.render(&base_url, &render_ctx) {
                renderable = false;
                results.fail(&anyhow::Error::from(e));
            }
        }
        results.resources_renderable = renderable;

        tracing::debug!(
            "Validated {} resource(s): {} error(s), {} warning(s)",
            results.resources_total,
            results.errors.len(),
            results.warnings.len()
        );
        results
    }

    fn print_text(results: &ValidationResults) {
        let check = |ok: bool, label: &str| {
            if ok {
                println!("{} {}", "✓".green(), label);
            }
        };
        check(results.manifest_valid, "Manifest is valid");
        check(
            results.resources_resolvable,
            &format!("{} resource(s) resolved", results.resources_total),
        );
        check(results.resources_renderable, "All resources render");

        for error in &results.errors {
            println!("{} {}", "✗".red(), error);
        }
        for warning in &results.warnings {
            println!("{} {}", "⚠".yellow(), warning);
        }
    }
}
