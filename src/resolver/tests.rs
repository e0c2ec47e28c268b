//! Tests for the resolver module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::core::ResourceGroup;

fn res(name: &str, depends: &str) -> Resource {
    Resource::generic(name)
        .directory("/srv/assets")
        .depends(depends)
        .resource(format!("{name}.ext"))
        .build()
        .unwrap()
}

fn resolved_names(resolver: &mut ResourceResolver) -> Vec<String> {
    resolver.resolve().unwrap().iter().map(|r| r.name().to_string()).collect()
}

#[test]
fn test_resolver_new() {
    let resolver = ResourceResolver::new([res("res1", "")]);
    assert_eq!(resolver.members().len(), 1);
    assert_eq!(resolver.flat_resources().len(), 1);

    let resolver = ResourceResolver::new([res("res1", ""), res("res2", "")]);
    let names: Vec<_> = resolver.flat_resources().iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["res1", "res2"]);
}

#[test]
fn test_resolve_orders_chain() {
    let mut resolver =
        ResourceResolver::new([res("res1", "res2"), res("res2", "res3"), res("res3", "")]);
    assert_eq!(resolved_names(&mut resolver), vec!["res3", "res2", "res1"]);

    let mut resolver =
        ResourceResolver::new([res("res2", "res3"), res("res1", "res2"), res("res3", "")]);
    assert_eq!(resolved_names(&mut resolver), vec!["res3", "res2", "res1"]);
}

#[test]
fn test_resolve_is_idempotent() {
    let group = ResourceGroup::new("group")
        .path("static")
        .with(res("b", "a"))
        .with(res("a", ""))
        .with(ResourceGroup::new("nested").with(res("c", "b")));
    let mut resolver = ResourceResolver::new([Member::from(group), Member::from(res("d", ""))]);

    let first = resolved_names(&mut resolver);
    let second = resolved_names(&mut resolver);
    assert_eq!(first, second);
    assert_eq!(first, vec!["a", "b", "c", "d"]);

    let paths: Vec<_> = resolver.resolve().unwrap().iter().map(|r| r.resolved_path().to_string()).collect();
    assert_eq!(paths, vec!["static", "static", "static", ""]);
}

#[test]
fn test_resolve_never_returns_groups_or_excluded() {
    let group = ResourceGroup::new("group")
        .with(res("kept", ""))
        .with(Resource::generic("dropped").directory("/srv/assets").resource("dropped.ext").include(false).build().unwrap())
        .with(ResourceGroup::new("off").include(false).with(res("hidden", "")));
    let mut resolver = ResourceResolver::new([group]);

    assert_eq!(resolved_names(&mut resolver), vec!["kept"]);
}

#[test]
fn test_dynamic_include_evaluated_per_resolve() {
    let enabled = Rc::new(Cell::new(true));
    let group = {
        let enabled = Rc::clone(&enabled);
        ResourceGroup::new("optional").include_if(move || enabled.get()).with(res("extra", ""))
    };
    let mut resolver = ResourceResolver::new([Member::from(res("base", "")), Member::from(group)]);

    assert_eq!(resolved_names(&mut resolver), vec!["base", "extra"]);
    enabled.set(false);
    assert_eq!(resolved_names(&mut resolver), vec!["base"]);
}

#[test]
fn test_excluded_dependency_is_missing() {
    let mut resolver = ResourceResolver::new([
        Resource::generic("lib")
            .directory("/srv/assets")
            .resource("lib.ext")
            .include(false)
            .build()
            .unwrap(),
        res("plugin", "lib"),
    ]);
    assert!(matches!(
        resolver.resolve().unwrap_err(),
        ResourceError::MissingDependency { .. }
    ));
}

#[test]
fn test_conflicting_names_across_groups() {
    let mut resolver = ResourceResolver::new([
        ResourceGroup::new("one").with(res("res", "")),
        ResourceGroup::new("two").with(res("res", "")),
    ]);
    let err = resolver.resolve().unwrap_err();
    assert_eq!(err.conflicting(), vec!["res"]);
}

#[test]
fn test_groups_need_not_be_unique() {
    let mut resolver = ResourceResolver::new([
        ResourceGroup::new("same").with(res("a", "")),
        ResourceGroup::new("same").with(res("b", "")),
    ]);
    assert_eq!(resolved_names(&mut resolver), vec!["a", "b"]);
}

#[test]
fn test_circular_dependency() {
    let mut resolver = ResourceResolver::new([res("res1", "res2"), res("res2", "res1")]);
    match resolver.resolve().unwrap_err() {
        ResourceError::CircularDependency { resources } => {
            let names: Vec<_> = resources.iter().map(|r| r.name.clone()).collect();
            assert!(names.contains(&"res1".to_string()));
            assert!(names.contains(&"res2".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_dependency_reports_group_path() {
    let mut resolver =
        ResourceResolver::new([ResourceGroup::new("app").path("static").with(res("app", "lib"))]);
    let err = resolver.resolve().unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Resource defines missing dependency: <Resource name="app", depends="lib", path="static">"#
    );
}

#[test]
fn test_add_member() {
    let mut resolver = ResourceResolver::default();
    resolver.add(res("a", ""));
    resolver.add(ResourceGroup::new("g").with(res("b", "a")));
    assert_eq!(resolved_names(&mut resolver), vec!["a", "b"]);
}
