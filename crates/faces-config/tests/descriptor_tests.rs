//! Integration tests for loading deployment descriptors from disk

use faces_config::{
    DescriptorStore, Error, INITIALIZER_CLASS_NAME, InitParams, SUPPORT_JSP,
    configured_initializer, support_jsp_enabled,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

fn write(temp: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_toml_descriptor() {
    let temp = TempDir::new().unwrap();
    let path = write(
        &temp,
        "web.toml",
        r#"display-name = "storefront"

[context-params]
initializer-class-name = "app.StorefrontInitializer"
"#,
    );

    let descriptor = DescriptorStore::new().load(&path).unwrap();

    assert_eq!(descriptor.display_name.as_deref(), Some("storefront"));
    assert_eq!(
        configured_initializer(&descriptor),
        Some("app.StorefrontInitializer")
    );
    assert!(support_jsp_enabled(&descriptor));
}

#[test]
fn test_load_json_descriptor() {
    let temp = TempDir::new().unwrap();
    let path = write(
        &temp,
        "web.json",
        r#"{ "context-params": { "support-jsp": false } }"#,
    );

    let descriptor = DescriptorStore::new().load(&path).unwrap();

    assert_eq!(descriptor.init_parameter(SUPPORT_JSP), Some("false"));
    assert!(!support_jsp_enabled(&descriptor));
}

#[rstest]
#[case("web.yaml")]
#[case("web.yml")]
#[case("WEB.YAML")]
fn test_load_yaml_descriptor(#[case] name: &str) {
    let temp = TempDir::new().unwrap();
    let path = write(
        &temp,
        name,
        "context-params:\n  initializer-class-name: app.YamlInitializer\n  support-jsp: \"TRUE\"\n",
    );

    let descriptor = DescriptorStore::new().load(&path).unwrap();

    assert_eq!(
        descriptor.init_parameter(INITIALIZER_CLASS_NAME),
        Some("app.YamlInitializer")
    );
    // Only the exact lowercase literal enables JSP support
    assert!(!support_jsp_enabled(&descriptor));
}

#[test]
fn test_yaml_null_value_is_blank() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "web.yaml", "context-params:\n  support-jsp:\n");

    let descriptor = DescriptorStore::new().load(&path).unwrap();

    assert_eq!(descriptor.init_parameter(SUPPORT_JSP), Some(""));
    assert!(support_jsp_enabled(&descriptor));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = DescriptorStore::new()
        .load(&temp.path().join("absent.toml"))
        .unwrap_err();

    assert!(matches!(err, Error::Io { .. }), "got: {err}");
}

#[test]
fn test_malformed_json_reports_format() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "web.json", "{ not json");

    let err = DescriptorStore::new().load(&path).unwrap_err();

    match err {
        Error::Parse { format, path: p, .. } => {
            assert_eq!(format, "JSON");
            assert_eq!(p, path);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_section_is_ignored() {
    let temp = TempDir::new().unwrap();
    let path = write(
        &temp,
        "web.toml",
        "[servlets]\nfaces = \"/faces/*\"\n\n[context-params]\nsupport-jsp = \"false\"\n",
    );

    let descriptor = DescriptorStore::new().load(&path).unwrap();

    assert_eq!(descriptor.context_params.len(), 1);
}
