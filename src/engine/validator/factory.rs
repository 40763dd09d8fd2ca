use regex::Regex;

use crate::domain::error::ValidatorError;
use crate::engine::fail_message::FailMessage;
use crate::engine::validator::Validator;

/// Passes when `actual` contains `expected` (exact, case-sensitive).
pub fn contains_validator(
    expected: impl Into<String>,
    actual: impl Into<String>,
) -> Validator<String> {
    let (expected, actual) = (expected.into(), actual.into());
    let (message_expected, message_actual) = (expected.clone(), actual.clone());
    contains_validator_with_message(expected, actual, move |goal| {
        FailMessage::of(goal).build_contains(&message_expected, &message_actual)
    })
}

pub fn contains_validator_with_message<F>(
    expected: impl Into<String>,
    actual: impl Into<String>,
    message: F,
) -> Validator<String>
where
    F: Fn(bool) -> String + 'static,
{
    Validator::of(actual.into())
        .compare_against(expected.into())
        .with_action(|expected, actual| {
            expected.is_some_and(|expected| actual.contains(expected.as_str()))
        })
        .with_message(message)
}

/// Passes when `pattern` matches anywhere in `value`; anchors inside the
/// pattern still apply.
pub fn regex_validator(
    pattern: &str,
    value: impl Into<String>,
) -> Result<Validator<String>, ValidatorError> {
    let value = value.into();
    let (message_pattern, message_value) = (pattern.to_string(), value.clone());
    regex_validator_with_message(pattern, value, move |goal| {
        FailMessage::of(goal).build_pattern_match(&message_pattern, &message_value)
    })
}

pub fn regex_validator_with_message<F>(
    pattern: &str,
    value: impl Into<String>,
    message: F,
) -> Result<Validator<String>, ValidatorError>
where
    F: Fn(bool) -> String + 'static,
{
    let regex = Regex::new(pattern).map_err(|source| ValidatorError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(Validator::of(value.into())
        .compare_against(pattern.to_string())
        .with_action(move |_, value| regex.is_match(value))
        .with_message(message))
}
