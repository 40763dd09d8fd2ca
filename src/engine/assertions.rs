use crate::domain::error::ValidatorError;
use crate::engine::validator::{
    LogSink, ReportSink, Validator, contains_validator, contains_validator_with_message,
    regex_validator, regex_validator_with_message,
};

/// One-call assertions over the validator factory, all reporting to one sink.
#[derive(Debug, Clone, Default)]
pub struct Assertions<S = LogSink> {
    sink: S,
}

impl<S> Assertions<S>
where
    S: ReportSink + Clone + 'static,
{
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn assert_contains(&self, expected: &str, actual: &str) -> Result<(), ValidatorError> {
        self.run(contains_validator(expected, actual))
    }

    pub fn assert_contains_with_message(
        &self,
        message: &str,
        expected: &str,
        actual: &str,
    ) -> Result<(), ValidatorError> {
        self.run(contains_validator_with_message(
            expected,
            actual,
            fixed(message),
        ))
    }

    pub fn assert_not_contains(
        &self,
        unexpected: &str,
        actual: &str,
    ) -> Result<(), ValidatorError> {
        self.run(contains_validator(unexpected, actual).not())
    }

    pub fn assert_not_contains_with_message(
        &self,
        message: &str,
        unexpected: &str,
        actual: &str,
    ) -> Result<(), ValidatorError> {
        self.run(contains_validator_with_message(unexpected, actual, fixed(message)).not())
    }

    pub fn assert_regex_matching(&self, pattern: &str, value: &str) -> Result<(), ValidatorError> {
        self.run(regex_validator(pattern, value)?)
    }

    pub fn assert_regex_matching_with_message(
        &self,
        message: &str,
        pattern: &str,
        value: &str,
    ) -> Result<(), ValidatorError> {
        self.run(regex_validator_with_message(pattern, value, fixed(message))?)
    }

    pub fn assert_regex_not_matching(
        &self,
        pattern: &str,
        value: &str,
    ) -> Result<(), ValidatorError> {
        self.run(regex_validator(pattern, value)?.not())
    }

    pub fn assert_regex_not_matching_with_message(
        &self,
        message: &str,
        pattern: &str,
        value: &str,
    ) -> Result<(), ValidatorError> {
        self.run(regex_validator_with_message(pattern, value, fixed(message))?.not())
    }

    fn run(&self, validator: Validator<String>) -> Result<(), ValidatorError> {
        validator.report_to(self.sink.clone()).check()
    }
}

fn fixed(message: &str) -> impl Fn(bool) -> String + 'static {
    let message = message.to_string();
    move |_| message.clone()
}
