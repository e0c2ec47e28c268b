//! Resolving and rendering resource trees built through the library API.

use webresource::config::ResourceConfig;
use webresource::core::{Resource, ResourceError, ResourceGroup};
use webresource::render::{RenderContext, ResourceRenderer};
use webresource::resolver::ResourceResolver;
use webresource::test_utils::init_test_logging;

fn script(name: &str, depends: &str) -> Resource {
    Resource::script(name)
        .directory("/srv/assets")
        .depends(depends)
        .resource(format!("{name}.js"))
        .build()
        .unwrap()
}

#[test]
fn test_dependencies_across_groups() {
    init_test_logging(None);

    let app = ResourceGroup::new("app").path("app").with(script("widgets", "jquery"));
    let vendor = ResourceGroup::new("vendor")
        .path("vendor")
        .with(script("jquery", ""))
        .with(script("jquery-ui", "jquery"));

    let mut resolver = ResourceResolver::new([app, vendor]);
    let resolved: Vec<_> = resolver
        .resolve()
        .unwrap()
        .iter()
        .map(|r| (r.name().to_string(), r.resolved_path().to_string()))
        .collect();

    // the latest dependent is inserted directly after its dependency
    assert_eq!(
        resolved,
        vec![
            ("jquery".to_string(), "vendor".to_string()),
            ("jquery-ui".to_string(), "vendor".to_string()),
            ("widgets".to_string(), "app".to_string()),
        ]
    );
}

#[test]
fn test_include_predicate_reevaluated_per_render() {
    use std::cell::Cell;
    use std::rc::Rc;

    let enabled = Rc::new(Cell::new(false));
    let flag = Rc::clone(&enabled);
    let optional = Resource::style("print")
        .directory("/srv/assets")
        .resource("print.css")
        .media("print")
        .include_if(move || flag.get())
        .build()
        .unwrap();

    let group = ResourceGroup::new("css")
        .with(Resource::style("main").directory("/srv/assets").resource("main.css").build().unwrap())
        .with(optional);
    let mut renderer = ResourceRenderer::new(ResourceResolver::new([group]), "https://tld.org");
    let config = ResourceConfig::default();
    let ctx = RenderContext::with_fs(&config);

    assert_eq!(renderer.render(&ctx).unwrap().lines().count(), 1);
    enabled.set(true);
    let html = renderer.render(&ctx).unwrap();
    assert_eq!(html.lines().count(), 2);
    assert!(html.contains(
        r#"<link href="https://tld.org/print.css" media="print" rel="stylesheet" type="text/css" />"#
    ));
}

#[test]
fn test_excluded_group_hides_dependency() {
    let vendor = ResourceGroup::new("vendor").include(false).with(script("jquery", ""));
    let mut resolver = ResourceResolver::new([script("plugin", "jquery")]);
    resolver.add(vendor);

    let err = resolver.resolve().unwrap_err();
    assert!(matches!(err, ResourceError::MissingDependency { ref resource } if resource.name == "plugin"));
}

#[test]
fn test_duplicate_names_conflict() {
    let mut resolver = ResourceResolver::new([
        ResourceGroup::new("a").with(script("res", "")),
        ResourceGroup::new("b").with(script("res", "")),
    ]);
    let err = resolver.resolve().unwrap_err();
    assert_eq!(err.conflicting(), vec!["res"]);
}

#[test]
fn test_errors_convert_into_anyhow() {
    fn resolve_names(resolver: &mut ResourceResolver) -> anyhow::Result<Vec<String>> {
        Ok(resolver.resolve()?.iter().map(|r| r.name().to_string()).collect())
    }

    let mut resolver = ResourceResolver::new([script("a", "b"), script("b", "a")]);
    let err = resolve_names(&mut resolver).unwrap_err();
    let resource_error = err.downcast_ref::<ResourceError>().unwrap();
    match resource_error {
        ResourceError::CircularDependency { resources } => {
            let mut names: Vec<_> = resources.iter().map(|r| r.name.as_str()).collect();
            names.sort_unstable();
            assert_eq!(names, vec!["a", "b"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}
