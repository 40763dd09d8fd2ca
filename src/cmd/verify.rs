use std::path::PathBuf;

use crate::cmd::{CommandError, CommandResponse, PlaceholderArgs};
use crate::domain::error::RuleError;
use crate::domain::report::VerifyReport;
use crate::engine::verify::RuleVerifier;

/// Input arguments for verify command execution API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyCommandArgs {
    pub rules: PathBuf,
    pub key: String,
    pub value: String,
    pub placeholders: PlaceholderArgs,
}

pub fn run(args: &VerifyCommandArgs) -> CommandResponse {
    match execute(args) {
        Ok(report) => {
            let exit_code = if report.matched { 0 } else { 2 };
            CommandResponse::report(&report, exit_code)
        }
        Err(error) => error.into_response(),
    }
}

fn execute(args: &VerifyCommandArgs) -> Result<VerifyReport, CommandError> {
    let loaded = if args.placeholders.is_empty() {
        RuleVerifier::load(&args.rules)
    } else {
        let placeholders = args
            .placeholders
            .build()
            .map_err(CommandError::input_usage)?;
        RuleVerifier::load_with_placeholders(&args.rules, placeholders)
    };
    let verifier = loaded.map_err(map_rule_error)?;

    verifier
        .verify(&args.key, &args.value)
        .map_err(map_rule_error)
}

fn map_rule_error(error: RuleError) -> CommandError {
    match error {
        RuleError::Io { .. } => CommandError::Internal(error.to_string()),
        other => CommandError::input_usage(other),
    }
}
