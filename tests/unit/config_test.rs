//! Tests for src/config/mod.rs - resource declarations

use kube::core::DynamicObject;
use resinfo::config::{load_config, parse_config, ResourceConfig};
use resinfo::error::ResError;
use resinfo::resources::{ResourceList, RESOURCE_REGISTRY};

const WIDGETS: &str = r#"
[[resources]]
group = "example.com"
version = "v1alpha1"
plural = "widgets"
singular = "widget"
kind = "Widget"
aliases = ["wd"]

[[resources]]
version = "v1"
plural = "gadgets"
singular = "gadget"
kind = "Gadget"
"#;

#[test]
fn test_parse_config() {
    let config = parse_config(WIDGETS).unwrap();
    assert_eq!(config.resources.len(), 2);

    let widget = &config.resources[0];
    assert_eq!(widget.group, "example.com");
    assert_eq!(widget.aliases, vec!["wd".to_string()]);

    let gadget = &config.resources[1];
    assert_eq!(gadget.group, "");
    assert!(gadget.aliases.is_empty());
}

#[test]
fn test_parse_empty_config() {
    let config = parse_config("").unwrap();
    assert!(config.resources.is_empty());
}

#[test]
fn test_parse_missing_field_is_config_error() {
    let err = parse_config("[[resources]]\nversion = \"v1\"\n").unwrap_err();
    assert!(matches!(err, ResError::Config(_)));
}

#[test]
fn test_declared_resource_info() {
    let config = parse_config(WIDGETS).unwrap();
    let info = config.resources[0].clone().into_info();

    assert_eq!(info.type_meta().api_version, "example.com/v1alpha1");
    assert_eq!(info.storage_path(&["status"]), "widgets/status");
    assert!(info.new_object().is::<DynamicObject>());
    assert!(info.new_list().is::<ResourceList<DynamicObject>>());
}

#[test]
fn test_declared_core_resource_keeps_literal_type_meta() {
    let config = parse_config(WIDGETS).unwrap();
    let info = config.resources[1].clone().into_info();
    assert_eq!(info.type_meta().api_version, "/v1");
}

#[test]
fn test_build_registry_merges_builtins() {
    let registry = parse_config(WIDGETS).unwrap().build_registry().unwrap();
    assert_eq!(registry.len(), 12);
    assert_eq!(registry.lookup("wd").unwrap().kind(), "Widget");
    assert_eq!(registry.lookup("pods").unwrap().kind(), "Pod");
    assert!(RESOURCE_REGISTRY.lookup("wd").is_none());
}

#[test]
fn test_build_registry_rejects_builtin_clash() {
    let config = parse_config(
        r#"
[[resources]]
version = "v1"
plural = "pods"
singular = "pod"
kind = "Pod"
"#,
    )
    .unwrap();
    let err = config.build_registry().unwrap_err();
    assert!(matches!(err, ResError::DuplicateResource(ref gr) if gr == "pods"));
}

#[test]
fn test_default_config_builds_builtins_only() {
    let registry = ResourceConfig::default().build_registry().unwrap();
    assert_eq!(registry.len(), 10);
}

#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("resinfo-config-{}.toml", std::process::id()));
    std::fs::write(&path, WIDGETS).unwrap();

    let config = load_config(Some(&path)).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.resources.len(), 2);
}

#[test]
fn test_load_config_missing_explicit_file() {
    let path = std::env::temp_dir().join("resinfo-does-not-exist.toml");
    let err = load_config(Some(&path)).unwrap_err();
    assert!(matches!(err, ResError::Io(_)));
}
