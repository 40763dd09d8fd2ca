use crate::cmd::{CommandError, CommandResponse};
use crate::domain::error::ValidatorError;
use crate::domain::report::CheckReport;
use crate::engine::assertions::Assertions;
use crate::engine::validator::CollectingSink;

/// Comparison strategy for the `contains` and `matches` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckKind {
    Contains { expected: String, actual: String },
    Matches { pattern: String, value: String },
}

/// Input arguments for check command execution API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCommandArgs {
    pub kind: CheckKind,
    /// Invert the goal: the text must not be contained / matched.
    pub negate: bool,
    pub message: Option<String>,
}

pub fn run(args: &CheckCommandArgs) -> CommandResponse {
    match execute(args) {
        Ok(report) => {
            let exit_code = if report.passed { 0 } else { 2 };
            CommandResponse::report(&report, exit_code)
        }
        Err(error) => error.into_response(),
    }
}

fn execute(args: &CheckCommandArgs) -> Result<CheckReport, CommandError> {
    let assertions = Assertions::new(CollectingSink::default());
    let outcome = match (&args.kind, args.negate, args.message.as_deref()) {
        (CheckKind::Contains { expected, actual }, false, None) => {
            assertions.assert_contains(expected, actual)
        }
        (CheckKind::Contains { expected, actual }, false, Some(message)) => {
            assertions.assert_contains_with_message(message, expected, actual)
        }
        (CheckKind::Contains { expected, actual }, true, None) => {
            assertions.assert_not_contains(expected, actual)
        }
        (CheckKind::Contains { expected, actual }, true, Some(message)) => {
            assertions.assert_not_contains_with_message(message, expected, actual)
        }
        (CheckKind::Matches { pattern, value }, false, None) => {
            assertions.assert_regex_matching(pattern, value)
        }
        (CheckKind::Matches { pattern, value }, false, Some(message)) => {
            assertions.assert_regex_matching_with_message(message, pattern, value)
        }
        (CheckKind::Matches { pattern, value }, true, None) => {
            assertions.assert_regex_not_matching(pattern, value)
        }
        (CheckKind::Matches { pattern, value }, true, Some(message)) => {
            assertions.assert_regex_not_matching_with_message(message, pattern, value)
        }
    };

    match outcome {
        Ok(()) => Ok(CheckReport {
            passed: true,
            message: None,
        }),
        Err(ValidatorError::AssertionFailed { message }) => Ok(CheckReport {
            passed: false,
            message: Some(message),
        }),
        Err(error @ ValidatorError::InvalidPattern { .. }) => {
            Err(CommandError::input_usage(error))
        }
        Err(error @ ValidatorError::Unconfigured) => Err(CommandError::Internal(error.to_string())),
    }
}
