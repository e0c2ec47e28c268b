//! End-to-end tests of the `webresource` binary.

use predicates::prelude::*;
use webresource::test_utils::{ManifestFixture, TestProject};

use super::webresource;

const BASIC_HTML: &str = concat!(
    r#"<link href="https://example.com/icon.png" rel="icon" type="image/png" />"#,
    "\n",
    r#"<link href="https://example.com/styles.css" media="all" rel="stylesheet" type="text/css" />"#,
    "\n",
    r#"<link href="https://ext.org/styles.css" media="all" rel="stylesheet" type="text/css" />"#,
    "\n",
    r#"<script src="https://example.com/script.min.js"></script>"#,
    "\n",
);

fn basic_project() -> TestProject {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic()).unwrap();
    project
}

#[test]
fn test_render_basic() {
    let project = basic_project();
    webresource(&project).arg("render").assert().success().stdout(BASIC_HTML);
}

#[test]
fn test_render_development_mode() {
    let project = basic_project();

    webresource(&project)
        .args(["render", "--development"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<script src="https://example.com/script.js"></script>"#));

    webresource(&project)
        .arg("render")
        .env("WEBRESOURCE_DEVELOPMENT", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("script.js\""));

    webresource(&project)
        .args(["render", "--production"])
        .env("WEBRESOURCE_DEVELOPMENT", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("script.min.js\""));
}

#[test]
fn test_render_base_url_precedence() {
    let project = basic_project();
    project.write_file("config.toml", "base_url = \"https://config.org\"").unwrap();

    webresource(&project)
        .args(["render", "--base-url", "https://cdn.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://cdn.org/icon.png"));

    // manifest base_url beats the configuration
    webresource(&project)
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.com/icon.png"));
}

#[test]
fn test_render_from_subdirectory() {
    let project = basic_project();
    let nested = project.path().join("templates").join("partials");
    std::fs::create_dir_all(&nested).unwrap();

    webresource(&project).current_dir(&nested).arg("render").assert().success().stdout(BASIC_HTML);
}

#[test]
fn test_render_with_hash_and_env_include() {
    let project = TestProject::new().unwrap();
    project.write_file("static/app.js", "console.log('app');").unwrap();
    project
        .write_file(
            "webresource.toml",
            r#"
[[members]]
kind = "script"
name = "app"
directory = "static"
resource = "app.js"
hash = true
hash_algorithm = "sha256"

[[members]]
kind = "script"
name = "debug"
depends = "app"
url = "https://cdn.org/debug.js"
include = { env = "WITH_DEBUG" }
"#,
        )
        .unwrap();

    let digest = webresource::checksum::HashAlgorithm::Sha256.digest_base64(b"console.log('app');");
    webresource(&project)
        .arg("render")
        .env_remove("WITH_DEBUG")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "<script src=\"https://tld.org/app.js#{digest}\"></script>\n"
        )));

    webresource(&project)
        .arg("render")
        .env("WITH_DEBUG", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<script src="https://cdn.org/debug.js"></script>"#));

    webresource(&project)
        .arg("render")
        .env("WITH_DEBUG", "false")
        .assert()
        .success()
        .stdout(predicate::str::contains("debug.js").not());
}

#[test]
fn test_resolve_text_and_json() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::with_dependencies()).unwrap();

    webresource(&project)
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("jquery"))
        .stdout(predicate::str::contains("widgets"));

    let output = webresource(&project).args(["resolve", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> =
        entries.as_array().unwrap().iter().map(|e| e["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["jquery", "jquery-ui", "widgets"]);
    assert_eq!(entries[2]["path"], "app");
    assert_eq!(entries[2]["depends"], "jquery");
}

#[test]
fn test_resolve_circular_dependency() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::circular()).unwrap();

    webresource(&project)
        .arg("resolve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("circular dependencies"))
        .stderr(predicate::str::contains("suggestion"));
}

#[test]
fn test_validate_success_and_warnings() {
    let project = basic_project();
    project.write_file("assets/icon.png", "png").unwrap();
    project.write_file("assets/styles.css", "body {}").unwrap();

    webresource(&project)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Manifest is valid"))
        .stdout(predicate::str::contains("4 resource(s) resolved"))
        .stdout(predicate::str::contains("script.min.js"));
}

#[test]
fn test_validate_json_failure() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::circular()).unwrap();

    let output = webresource(&project).args(["validate", "--format", "json"]).output().unwrap();
    assert!(!output.status.success());
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results["valid"], false);
    assert_eq!(results["manifest_valid"], true);
    assert_eq!(results["resources_resolvable"], false);
}

#[test]
fn test_invalid_manifest_syntax() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::invalid_syntax()).unwrap();

    webresource(&project)
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid TOML syntax"))
        .stderr(predicate::str::contains("[[members]]"));
}

#[test]
fn test_missing_manifest() {
    let project = TestProject::new().unwrap();

    webresource(&project)
        .args(["--manifest-path", "missing.toml", "render"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
