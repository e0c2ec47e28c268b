//! Command-line interface for webresource.
//!
//! The CLI loads a resource tree from a `webresource.toml` manifest and resolves or
//! renders it.
//!
//! # Available Commands
//!
//! - `render` - print the HTML tags of all included resources
//! - `resolve` - list the resources in dependency order
//! - `validate` - check that the manifest resolves and every resource renders
//!
//! # Global Options
//!
//! - `--verbose` - enable debug output
//! - `--quiet` - suppress all output except errors
//! - `--config` - path to a custom config file
//! - `--manifest-path` - path to the manifest instead of searching upward
//!
//! # Example
//!
//! ```bash
//! webresource render --base-url https://cdn.example.com
//! webresource --verbose resolve --format json
//! webresource --manifest-path site/webresource.toml validate
//! ```

mod common;
mod render;
mod resolve;
mod validate;

pub use common::{OutputFormat, ProjectContext};
pub use render::RenderCommand;
pub use resolve::{ResolveCommand, ResolvedEntry};
pub use validate::{ValidateCommand, ValidationResults};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Main CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "webresource",
    about = "Resolve and render web resources declared in a manifest",
    version,
    long_about = "webresource orders scripts, stylesheets and links by their dependencies and renders them as HTML tags."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output. Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to custom global configuration file.
    ///
    /// Overrides `~/.webresource/config.toml` and the `WEBRESOURCE_CONFIG_PATH`
    /// environment variable.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the manifest file (webresource.toml).
    ///
    /// By default the manifest is searched in the current directory and its parents.
    #[arg(long, global = true)]
    manifest_path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the HTML tags of all included resources.
    Render(RenderCommand),

    /// List resources in dependency order.
    Resolve(ResolveCommand),

    /// Check that the manifest resolves and every resource renders.
    Validate(ValidateCommand),
}

impl Cli {
    /// Set up logging and run the selected command.
    pub fn execute(self) -> Result<()> {
        self.init_logging();

        let ctx = ProjectContext::load(self.manifest_path, self.config.as_deref());
        match self.command {
            Commands::Render(cmd) => cmd.execute(ctx?),
            Commands::Resolve(cmd) => cmd.execute(ctx?),
            Commands::Validate(cmd) => cmd.execute(ctx),
        }
    }

    /// Log filter derived from the verbosity flags. `RUST_LOG` wins when set and no
    /// flag was given.
    fn log_filter(&self) -> EnvFilter {
        if self.verbose {
            EnvFilter::new("webresource=debug")
        } else if self.quiet {
            EnvFilter::new("error")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        }
    }

    fn init_logging(&self) {
        let _ = tracing_subscriber::registry()
            .with(self.log_filter())
            .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init();
    }
}
