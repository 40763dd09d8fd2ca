use thiserror::Error;

use crate::io::IoError;

/// Errors produced by the placeholder engine boundary.
#[derive(Debug, Error)]
pub enum PlaceholderError {
    /// Two registered patterns matched overlapping spans of the same input.
    #[error(
        "placeholders `{first_key}` ({first_start}..{first_end}) and `{second_key}` \
         ({second_start}..{second_end}) match overlapping text"
    )]
    OverlapConflict {
        first_key: String,
        first_start: usize,
        first_end: usize,
        second_key: String,
        second_start: usize,
        second_end: usize,
    },

    /// `get` was called for a key with no lazy entry.
    #[error("no lazy placeholder registered for key `{key}`")]
    NotFound { key: String },

    /// A key did not compile once wrapped with the current delimiters.
    #[error("placeholder key `{key}` is not a valid pattern: {source}")]
    InvalidPattern {
        key: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors produced by `Validator::check` and the validator factory.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// `check` was called before any comparison action was configured.
    #[error("there is no action configured for this validator")]
    Unconfigured,

    /// The comparison outcome did not meet the validator goal.
    #[error("{message}")]
    AssertionFailed { message: String },

    /// The regex factory was given a pattern that does not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ValidatorError {
    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, Self::AssertionFailed { .. })
    }
}

/// Errors produced by the rule verifier.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The rule store does not exist.
    #[error("rule store `{path}` was not found")]
    FileNotFound { path: String },

    /// The rule store exists but could not be read.
    #[error("failed to read rule store `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The rule store could not be decoded into a flat string map.
    #[error("malformed rule data in `{path}`: {message}")]
    MalformedRuleData { path: String, message: String },

    /// The requested rule key is absent from the loaded rule set.
    #[error("rule `{key}` not found; known rules: [{}]", .known_keys.join(", "))]
    RuleNotFound { key: String, known_keys: Vec<String> },

    /// The rule template could not be substituted.
    #[error("failed to substitute rule template: {0}")]
    Placeholder(#[from] PlaceholderError),
}

impl RuleError {
    pub(crate) fn from_store(path: &str, error: IoError) -> Self {
        match error {
            IoError::NotFound { path } => Self::FileNotFound { path },
            IoError::Io { path, source } => Self::Io { path, source },
            other => Self::MalformedRuleData {
                path: path.to_string(),
                message: other.to_string(),
            },
        }
    }
}

/// Errors produced while building placeholder sets from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A placeholder configuration file could not be read or decoded.
    #[error("failed to load placeholder configuration: {0}")]
    Store(#[from] IoError),

    /// A `key=value` assignment was missing its `=` or its key.
    #[error("invalid placeholder assignment `{raw}`; expected `key=value`")]
    InvalidAssignment { raw: String },
}
