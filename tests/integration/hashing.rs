//! Content hash fragments on resource URLs, read from real files.

use webresource::checksum::HashAlgorithm;
use webresource::config::ResourceConfig;
use webresource::core::Resource;
use webresource::render::RenderContext;
use webresource::test_utils::TestProject;

#[test]
fn test_hash_follows_mode() {
    let project = TestProject::new().unwrap();
    project.write_file("js/app.js", "let a = 1;").unwrap();
    project.write_file("js/app.min.js", "let a=1;").unwrap();

    let resource = Resource::script("app")
        .directory("js")
        .base_dir(project.path())
        .resource("app.js")
        .compressed("app.min.js")
        .hash(true)
        .hash_algorithm(HashAlgorithm::Sha256)
        .build()
        .unwrap();

    let production = ResourceConfig::default();
    let url = resource.resource_url("https://tld.org", &RenderContext::with_fs(&production)).unwrap();
    assert_eq!(
        url,
        format!("https://tld.org/app.min.js#{}", HashAlgorithm::Sha256.digest_base64(b"let a=1;"))
    );

    let development = ResourceConfig {
        development: true,
        ..ResourceConfig::default()
    };
    let ctx = RenderContext::with_fs(&development);
    let url = resource.resource_url("https://tld.org", &ctx).unwrap();
    assert_eq!(
        url,
        format!("https://tld.org/app.js#{}", HashAlgorithm::Sha256.digest_base64(b"let a = 1;"))
    );

    project.write_file("js/app.js", "let a = 2;").unwrap();
    assert_eq!(resource.file_hash(&ctx).unwrap(), HashAlgorithm::Sha256.digest_base64(b"let a = 2;"));
}

#[test]
fn test_production_hash_survives_file_change() {
    let project = TestProject::new().unwrap();
    project.write_file("style.css", "body {}").unwrap();

    let resource = Resource::style("style")
        .base_dir(project.path())
        .resource("style.css")
        .hash(true)
        .build()
        .unwrap();

    let config = ResourceConfig::default();
    let ctx = RenderContext::with_fs(&config);
    let first = resource.file_hash(&ctx).unwrap();
    assert_eq!(first, HashAlgorithm::Sha384.digest_base64(b"body {}"));

    project.write_file("style.css", "body { margin: 0 }").unwrap();
    assert_eq!(resource.file_hash(&ctx).unwrap(), first);
}

#[test]
fn test_missing_file_fails_render() {
    let project = TestProject::new().unwrap();
    let resource = Resource::script("gone")
        .base_dir(project.path())
        .resource("gone.js")
        .hash(true)
        .build()
        .unwrap();

    let config = ResourceConfig::default();
    let err = resource.render("https://tld.org", &RenderContext::with_fs(&config)).unwrap_err();
    assert!(err.to_string().contains("Cannot read resource file"));
}
