use rulecheck::domain::error::ValidatorError;
use rulecheck::engine::assertions::Assertions;
use rulecheck::engine::fail_message::FailMessage;
use rulecheck::engine::placeholder::Placeholders;
use rulecheck::engine::validator::{
    CollectingSink, PanicSink, Validator, contains_validator, regex_validator,
};

#[test]
fn containment_validator_passes_and_fails() {
    contains_validator("lo", "hello")
        .check()
        .expect("hello contains lo");

    let sink = CollectingSink::default();
    let err = contains_validator("hi", "hello")
        .report_to(sink.clone())
        .check()
        .expect_err("hello does not contain hi");
    assert!(err.is_assertion_failure());

    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("hello"));
    assert!(messages[0].contains("hi"));
}

#[test]
fn negation_inverts_the_goal() {
    contains_validator("hi", "hello")
        .not()
        .check()
        .expect("hello does not contain hi");
}

#[test]
fn regex_validator_searches_substrings() {
    regex_validator("^h.*o$", "hello")
        .expect("valid pattern")
        .check()
        .expect("matches");
    assert!(
        regex_validator("^x", "hello")
            .expect("valid pattern")
            .check()
            .is_err()
    );
}

#[test]
fn unconfigured_validator_is_a_usage_error() {
    let err = Validator::of("x").check().expect_err("no action");
    assert!(matches!(err, ValidatorError::Unconfigured));
    assert!(!err.is_assertion_failure());
}

#[test]
fn rendered_template_feeds_a_validator() {
    let expected = Placeholders::of()
        .add("user", "alice")
        .apply("signed in as {user}")
        .expect("apply");
    let page_text = "Welcome back! You are signed in as alice.";

    contains_validator(expected.as_str(), page_text)
        .check()
        .expect("page shows the rendered text");

    let err = contains_validator(expected.as_str(), "Welcome, guest.")
        .check()
        .expect_err("guest page lacks the text");
    assert_eq!(
        err.to_string(),
        FailMessage::of(true).build_contains(&expected, "Welcome, guest.")
    );
}

#[test]
fn generic_validator_compares_numbers() {
    let within_limit = |limit: Option<&u32>, value: &u32| limit.is_some_and(|limit| value <= limit);

    Validator::of(3_u32)
        .compare_against(5)
        .with_action(within_limit)
        .check()
        .expect("3 <= 5");
    Validator::of(8_u32)
        .compare_against(5)
        .with_action(within_limit)
        .not()
        .check()
        .expect("8 > 5");
}

#[test]
fn assertions_facade_reports_to_one_sink() {
    let assertions = Assertions::new(CollectingSink::default());
    let _ = assertions.assert_contains("hi", "hello");
    let _ = assertions.assert_regex_not_matching("l+", "hello");
    assertions
        .assert_regex_matching(r"\bworld\b", "hello world")
        .expect("word boundary match");

    assert_eq!(
        assertions.sink().messages(),
        vec![
            "hello should contain the text hi",
            "hello should not follow the template of l+",
        ]
    );
}

#[test]
#[should_panic(expected = "hello should follow the template of ^x")]
fn panic_sink_behaves_like_a_test_assertion() {
    let _ = regex_validator("^x", "hello")
        .expect("valid pattern")
        .report_to(PanicSink)
        .check();
}
