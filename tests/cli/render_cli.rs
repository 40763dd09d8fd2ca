use std::fs;

use predicates::prelude::predicate;
use rulecheck::cmd::PlaceholderArgs;
use rulecheck::cmd::render::{RenderCommandArgs, run};
use serde_json::{Value, json};
use tempfile::tempdir;

#[test]
fn render_command_api_applies_file_then_assignments() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("placeholders.json");
    fs::write(&path, r#"{"name": "Bob", "site": "example.org"}"#).expect("write");

    let response = run(&RenderCommandArgs {
        template: "{name}@{site}".to_string(),
        placeholders: PlaceholderArgs {
            assignments: vec!["name=alice".to_string()],
            file: Some(path),
            ..PlaceholderArgs::default()
        },
    });

    assert_eq!(response.exit_code, 0);
    assert_eq!(response.payload, json!({"rendered": "alice@example.org"}));
}

#[test]
fn render_binary_prints_rendered_json() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("rulecheck")
        .args([
            "render",
            "--template",
            "This <Type> is written in <Language>",
            "--set",
            "Type=test",
            "--set",
            "Language=Rust",
            "--prefix",
            "<",
            "--suffix",
            ">",
        ])
        .output()
        .expect("run render");

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
    let payload: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    assert_eq!(payload["rendered"], json!("This test is written in Rust"));
}

#[test]
fn render_binary_reports_overlap_on_stderr() {
    assert_cmd::cargo::cargo_bin_cmd!("rulecheck")
        .args([
            "render", "--template", "abc", "--set", "ab=x", "--set", "bc=y", "--prefix", "",
            "--suffix", "",
        ])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("input_usage_error"))
        .stderr(predicate::str::contains("overlapping"));
}

#[test]
fn render_binary_rejects_malformed_assignment() {
    assert_cmd::cargo::cargo_bin_cmd!("rulecheck")
        .args(["render", "--template", "{x}", "--set", "novalue"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("expected `key=value`"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    assert_cmd::cargo::cargo_bin_cmd!("rulecheck")
        .arg("explode")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cli_parse_error"));
}
