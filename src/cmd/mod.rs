//! Command execution API behind the `rulecheck` binary.
//!
//! Every command returns a [`CommandResponse`] carrying the process exit code
//! and the JSON payload: 0 success, 2 a check that did not hold, 3 input or
//! usage errors, 1 internal errors.

pub mod check;
pub mod render;
pub mod verify;

use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::error::ConfigError;
use crate::engine::placeholder::Placeholders;

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

impl CommandResponse {
    fn report<T: Serialize>(report: &T, exit_code: i32) -> Self {
        match serde_json::to_value(report) {
            Ok(payload) => Self { exit_code, payload },
            Err(error) => CommandError::Internal(format!("failed to serialize report: {error}"))
                .into_response(),
        }
    }
}

pub(crate) enum CommandError {
    InputUsage(String),
    Internal(String),
}

impl CommandError {
    pub(crate) fn input_usage(error: impl ToString) -> Self {
        Self::InputUsage(error.to_string())
    }

    pub(crate) fn into_response(self) -> CommandResponse {
        match self {
            Self::InputUsage(message) => CommandResponse {
                exit_code: 3,
                payload: json!({
                    "error": "input_usage_error",
                    "message": message,
                }),
            },
            Self::Internal(message) => CommandResponse {
                exit_code: 1,
                payload: json!({
                    "error": "internal_error",
                    "message": message,
                }),
            },
        }
    }
}

/// Placeholder options shared by `render` and `verify`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderArgs {
    /// `key=value` literal assignments; applied after `file`, so they win.
    /// Keys match their exact text.
    pub assignments: Vec<String>,
    pub file: Option<PathBuf>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl PlaceholderArgs {
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty() && self.file.is_none()
    }

    pub fn build(&self) -> Result<Placeholders, ConfigError> {
        let mut placeholders = match &self.file {
            Some(path) => Placeholders::from_config_file(path)?,
            None => Placeholders::of(),
        };
        for raw in &self.assignments {
            let (key, value) = parse_assignment(raw)?;
            placeholders = placeholders.add_escaped(key, value);
        }
        if let Some(prefix) = &self.prefix {
            placeholders = placeholders.define_prefix(prefix.as_str());
        }
        if let Some(suffix) = &self.suffix {
            placeholders = placeholders.define_suffix(suffix.as_str());
        }
        Ok(placeholders)
    }
}

fn parse_assignment(raw: &str) -> Result<(&str, &str), ConfigError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(ConfigError::InvalidAssignment {
            raw: raw.to_string(),
        }),
    }
}
