//! Integration test suite for webresource
//!
//! End-to-end tests of the library API and the `webresource` binary.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: the `render`, `resolve` and `validate` commands
//! - **hashing**: content hash fragments in both modes
//! - **resolve**: resolving and rendering trees built in code

use assert_cmd::Command;
use webresource::config::{CONFIG_PATH_ENV, DEVELOPMENT_ENV};
use webresource::test_utils::TestProject;

mod cli;
mod hashing;
mod resolve;

/// `webresource` command running inside `project` with an isolated configuration.
pub fn webresource(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("webresource").unwrap();
    cmd.current_dir(project.path())
        .env(CONFIG_PATH_ENV, project.path().join("config.toml"))
        .env_remove(DEVELOPMENT_ENV)
        .env_remove("RUST_LOG");
    cmd
}
