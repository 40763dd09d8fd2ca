use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use rulecheck::domain::error::{ConfigError, PlaceholderError};
use rulecheck::engine::placeholder::Placeholders;
use rulecheck::io::IoError;

fn fixture(relative: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

#[test]
fn literal_round_trip_with_angle_delimiters() {
    let rendered = Placeholders::of()
        .define_prefix("<")
        .define_suffix(">")
        .add("Type", "test")
        .add("Language", "Java")
        .add("Framework", "JUnit")
        .apply("This <Type> is written in <Language> with <Framework>")
        .expect("apply");

    assert_eq!(rendered, "This test is written in Java with JUnit");
}

#[test]
fn empty_set_is_identity() {
    let placeholders = Placeholders::of();
    for input in [
        "",
        "{}",
        "{unregistered}",
        "multi\nline {text}",
        "unicode ✓ {é}",
    ] {
        assert_eq!(placeholders.apply(input).expect("apply"), input);
    }
}

#[test]
fn output_does_not_depend_on_registration_order() {
    let entries = [("first", "1"), ("second", "twenty-two"), ("third", "")];
    let input = "{third}{first} then {second}, {first}{third}";
    let orders: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    let outputs: Vec<String> = orders
        .iter()
        .map(|order| {
            order
                .iter()
                .fold(Placeholders::of(), |set, &index| {
                    set.add(entries[index].0, entries[index].1)
                })
                .apply(input)
                .expect("apply")
        })
        .collect();

    assert!(outputs.iter().all(|output| output == "1 then twenty-two, 1"));
}

#[test]
fn overlapping_patterns_fail_instead_of_corrupting() {
    let placeholders = Placeholders::of()
        .add("user", "alice")
        .add_pattern("user.*", |captures| format!("[{}]", &captures[0]));

    let err = placeholders.apply("{user}").expect_err("must conflict");
    assert!(matches!(err, PlaceholderError::OverlapConflict { .. }));
    assert!(err.to_string().contains("overlapping"));
}

#[test]
fn lazy_values_change_between_applies() {
    let ticks = Rc::new(Cell::new(100));
    let clock = Rc::clone(&ticks);
    let placeholders = Placeholders::of()
        .add("session", "abc")
        .add_lazy("clock", move || clock.get().to_string());

    assert_eq!(
        placeholders.apply("{session}@{clock}").expect("first"),
        "abc@100"
    );
    ticks.set(200);
    assert_eq!(
        placeholders.apply("{session}@{clock}").expect("second"),
        "abc@200"
    );
    assert_eq!(placeholders.get("clock").expect("get"), "200");
}

#[test]
fn config_file_entries_become_literals() {
    let placeholders =
        Placeholders::from_config_file(fixture("placeholders.toml")).expect("load config");
    assert_eq!(placeholders.len(), 2);
    assert_eq!(
        placeholders.apply("{name} is {role}").expect("apply"),
        "Bob is admin"
    );
}

#[test]
fn config_file_keys_match_verbatim() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("placeholders.json");
    std::fs::write(&path, r#"{"user.name": "bob", "a(b": "x"}"#).expect("write");

    let placeholders = Placeholders::from_config_file(&path).expect("load config");
    assert_eq!(
        placeholders
            .apply("{user.name} {userXname} {a(b}")
            .expect("apply"),
        "bob {userXname} x"
    );
}

#[test]
fn missing_config_file_is_reported() {
    let err = Placeholders::from_config_file(fixture("absent.json")).expect_err("must fail");
    assert!(matches!(err, ConfigError::Store(IoError::NotFound { .. })));
}
