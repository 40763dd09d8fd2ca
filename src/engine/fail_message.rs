use crate::engine::placeholder::Placeholders;

const CONTAINS_TEMPLATE: &str = "<actual> <should> contain the text <expected>";
const PATTERN_TEMPLATE: &str = "<actual> <should> follow the template of <template>";

/// Builds the default failure sentences for the validator factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailMessage {
    goal: bool,
}

impl FailMessage {
    pub fn of(goal: bool) -> Self {
        Self { goal }
    }

    /// `"<actual> should contain the text <expected>"`, or `should not` when
    /// the goal is negative.
    pub fn build_contains(&self, expected: &str, actual: &str) -> String {
        self.fill(
            CONTAINS_TEMPLATE,
            Placeholders::of()
                .add("actual", actual)
                .add("expected", expected),
        )
    }

    /// `"<actual> should follow the template of <pattern>"`, or `should not`
    /// when the goal is negative.
    pub fn build_pattern_match(&self, pattern: &str, actual: &str) -> String {
        self.fill(
            PATTERN_TEMPLATE,
            Placeholders::of()
                .add("actual", actual)
                .add("template", pattern),
        )
    }

    fn should(&self) -> &'static str {
        if self.goal { "should" } else { "should not" }
    }

    fn fill(&self, template: &str, entries: Placeholders) -> String {
        entries
            .define_prefix("<")
            .define_suffix(">")
            .add("should", self.should())
            .apply(template)
            .expect("fail message templates use distinct, valid keys")
    }
}
