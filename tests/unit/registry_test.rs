//! Tests for src/resources/registry.rs - ResourceRegistry

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Pod;
use resinfo::error::ResError;
use resinfo::resources::{
    list_factory, object_factory, GroupResource, ResourceInfo, ResourceList, ResourceRegistry,
    RESOURCE_REGISTRY,
};

fn widget_info(group: &str) -> ResourceInfo {
    ResourceInfo::from_factories(
        group,
        "v1",
        "widgets",
        "widget",
        "Widget",
        object_factory::<String>(),
        list_factory::<String>(),
    )
}

// ============================================================================
// lookup tests
// ============================================================================

#[test]
fn test_lookup_pod_by_kind() {
    let info = RESOURCE_REGISTRY.lookup("Pod").unwrap();
    assert_eq!(info.kind(), "Pod");
    assert_eq!(info.resource_name(), "pods");
    assert_eq!(info.group(), "");
}

#[test]
fn test_lookup_by_plural_singular_and_alias() {
    for name in ["deployments", "deployment", "deploy", "Deployment", "DEPLOY"] {
        let info = RESOURCE_REGISTRY.lookup(name).unwrap();
        assert_eq!(info.kind(), "Deployment", "lookup of {name}");
        assert_eq!(info.group(), "apps");
    }
}

#[test]
fn test_lookup_by_qualified_name() {
    let info = RESOURCE_REGISTRY.lookup("statefulsets.apps").unwrap();
    assert_eq!(info.kind(), "StatefulSet");
}

#[test]
fn test_lookup_short_aliases() {
    assert_eq!(RESOURCE_REGISTRY.lookup("po").unwrap().kind(), "Pod");
    assert_eq!(RESOURCE_REGISTRY.lookup("svc").unwrap().kind(), "Service");
    assert_eq!(RESOURCE_REGISTRY.lookup("cm").unwrap().kind(), "ConfigMap");
    assert_eq!(RESOURCE_REGISTRY.lookup("ns").unwrap().kind(), "Namespace");
    assert_eq!(RESOURCE_REGISTRY.lookup("no").unwrap().kind(), "Node");
    assert_eq!(RESOURCE_REGISTRY.lookup("sts").unwrap().kind(), "StatefulSet");
    assert_eq!(RESOURCE_REGISTRY.lookup("ds").unwrap().kind(), "DaemonSet");
    assert_eq!(RESOURCE_REGISTRY.lookup("rs").unwrap().kind(), "ReplicaSet");
}

#[test]
fn test_lookup_unknown() {
    assert!(RESOURCE_REGISTRY.lookup("bogus").is_none());
    let err = RESOURCE_REGISTRY.get("bogus").unwrap_err();
    assert!(matches!(err, ResError::UnknownResource(ref name) if name == "bogus"));
}

#[test]
fn test_by_group_resource() {
    let info = RESOURCE_REGISTRY
        .by_group_resource(&GroupResource::new("apps", "daemonsets"))
        .unwrap();
    assert_eq!(info.kind(), "DaemonSet");
    assert!(RESOURCE_REGISTRY
        .by_group_resource(&GroupResource::new("", "daemonsets"))
        .is_none());
}

// ============================================================================
// builtin factories
// ============================================================================

#[test]
fn test_builtin_factories_produce_typed_objects() {
    let pods = RESOURCE_REGISTRY.get("pods").unwrap();
    assert!(pods.new_object().is::<Pod>());
    assert!(pods.new_list().is::<ResourceList<Pod>>());

    let deployments = RESOURCE_REGISTRY.get("deployments").unwrap();
    assert!(deployments.new_object().is::<Deployment>());
}

#[test]
fn test_builtin_not_found_uses_singular() {
    let err = RESOURCE_REGISTRY.get("deploy").unwrap().new_not_found("api");
    assert_eq!(err.group_resource(), GroupResource::new("apps", "deployment"));
}

#[test]
fn test_builtin_count_and_order() {
    assert_eq!(RESOURCE_REGISTRY.len(), 10);
    let first = RESOURCE_REGISTRY.all().next().unwrap();
    assert_eq!(first.info.kind(), "Pod");
    assert_eq!(first.aliases, vec!["po".to_string()]);
}

// ============================================================================
// register tests
// ============================================================================

#[test]
fn test_register_custom_resource() {
    let mut registry = ResourceRegistry::new();
    assert!(registry.is_empty());

    registry
        .register(widget_info("example.com"), vec!["wd".to_string()])
        .unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.lookup("wd").unwrap().kind(), "Widget");
    assert_eq!(registry.lookup("widgets.example.com").unwrap().group(), "example.com");
}

#[test]
fn test_register_duplicate_group_resource_fails() {
    let mut registry = ResourceRegistry::new();
    registry.register(widget_info("example.com"), vec![]).unwrap();

    let err = registry
        .register(widget_info("example.com"), vec![])
        .unwrap_err();
    assert!(matches!(err, ResError::DuplicateResource(ref gr) if gr == "widgets.example.com"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_same_plural_in_other_group_keeps_first_for_bare_name() {
    let mut registry = ResourceRegistry::new();
    registry.register(widget_info("a.example.com"), vec![]).unwrap();
    registry.register(widget_info("b.example.com"), vec![]).unwrap();

    assert_eq!(registry.lookup("widgets").unwrap().group(), "a.example.com");
    assert_eq!(
        registry.lookup("widgets.b.example.com").unwrap().group(),
        "b.example.com"
    );
}

// ============================================================================
// all_names tests
// ============================================================================

#[test]
fn test_all_names_sorted_and_deduped() {
    let names = RESOURCE_REGISTRY.all_names();
    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(names, sorted);
    assert!(names.contains(&"pods"));
    assert!(names.contains(&"po"));
    assert!(names.contains(&"deployments.apps"));
}
