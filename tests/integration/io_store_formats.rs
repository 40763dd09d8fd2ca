use std::fs;
use std::path::Path;

use rulecheck::io::{Format, IoError, read_flat_map, read_tree, resolve_store_format};
use serde_json::json;
use tempfile::tempdir;

#[test]
fn extension_decides_and_unknown_falls_back_to_json() {
    assert_eq!(resolve_store_format(Path::new("rules.yml")), Format::Yaml);
    assert_eq!(resolve_store_format(Path::new("rules.TOML")), Format::Toml);
    assert_eq!(resolve_store_format(Path::new("rules.txt")), Format::Json);
    assert_eq!(resolve_store_format(Path::new("rules")), Format::Json);
}

#[test]
fn extension_matching_ignores_case() {
    assert_eq!(Format::from_extension("YML"), Some(Format::Yaml));
    assert_eq!(Format::from_extension("Json"), Some(Format::Json));
    assert_eq!(Format::from_extension("xml"), None);
}

#[test]
fn tree_reads_keep_nested_structure() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("page.yaml");
    fs::write(&path, "title: Login\nfields:\n  - user\n  - password\n").expect("write");

    let tree = read_tree(&path).expect("tree");
    assert_eq!(
        tree,
        json!({"title": "Login", "fields": ["user", "password"]})
    );

    let err = read_flat_map(&path).expect_err("nested values are not flat");
    assert!(matches!(err, IoError::NotFlatStringMap { .. }));
}

#[test]
fn missing_files_are_not_found() {
    let dir = tempdir().expect("tempdir");
    let err = read_tree(&dir.path().join("absent.json")).expect_err("must fail");
    assert!(matches!(err, IoError::NotFound { .. }));
}
