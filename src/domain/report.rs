use serde::Serialize;

/// Output of the `render` command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderReport {
    pub rendered: String,
}

/// Output of the `verify` command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VerifyReport {
    pub matched: bool,
    pub rule: String,
    /// Rule template after placeholder substitution.
    pub expected: String,
    pub actual: String,
}

/// Output of the `contains` and `matches` commands.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckReport {
    pub passed: bool,
    /// Rendered failure message; absent when the check passed.
    pub message: Option<String>,
}
