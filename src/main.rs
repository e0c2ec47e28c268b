//! webresource CLI entry point
//!
//! Parses command-line arguments, runs the selected command and displays errors with
//! details and suggestions.

use anyhow::Result;
use clap::Parser;
use webresource::cli;
use webresource::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
