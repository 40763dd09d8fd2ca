//! Goal-invertible comparison units.
//!
//! A [`Validator`] holds an actual value, an optional expected value, a
//! comparison action and a goal. `check` passes when the action's outcome
//! equals the goal; otherwise the rendered message goes to the configured
//! [`ReportSink`] and the check fails with [`ValidatorError::AssertionFailed`].

pub mod factory;
pub mod sink;

use log::debug;

use crate::domain::error::ValidatorError;

pub use factory::{
    contains_validator, contains_validator_with_message, regex_validator,
    regex_validator_with_message,
};
pub use sink::{CollectingSink, LogSink, PanicSink, ReportSink};

pub const DEFAULT_FAILURE_MESSAGE: &str = "data validation failed";

/// Comparison action, called as `action(expected, actual)`.
pub type Action<T> = Box<dyn Fn(Option<&T>, &T) -> bool>;

/// Renders the failure message for the goal that was not met.
pub type MessageGenerator = Box<dyn Fn(bool) -> String>;

pub struct Validator<T> {
    actual: T,
    expected: Option<T>,
    action: Option<Action<T>>,
    goal: bool,
    message: MessageGenerator,
    sink: Box<dyn ReportSink>,
}

impl<T> Validator<T> {
    pub fn of(actual: T) -> Self {
        Self {
            actual,
            expected: None,
            action: None,
            goal: true,
            message: Box::new(|_| DEFAULT_FAILURE_MESSAGE.to_string()),
            sink: Box::new(LogSink),
        }
    }

    pub fn compare_against(mut self, expected: T) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn with_message<F>(mut self, message: F) -> Self
    where
        F: Fn(bool) -> String + 'static,
    {
        self.message = Box::new(message);
        self
    }

    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(Option<&T>, &T) -> bool + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    /// Toggles the goal between "must hold" and "must not hold".
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.goal = !self.goal;
        self
    }

    /// Replaces the default [`LogSink`].
    pub fn report_to(mut self, sink: impl ReportSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn actual(&self) -> &T {
        &self.actual
    }

    pub fn expected(&self) -> Option<&T> {
        self.expected.as_ref()
    }

    pub fn goal(&self) -> bool {
        self.goal
    }

    /// Evaluates the action. Every call is independent.
    pub fn check(&self) -> Result<(), ValidatorError> {
        let action = self.action.as_ref().ok_or(ValidatorError::Unconfigured)?;
        let outcome = action(self.expected.as_ref(), &self.actual);
        if outcome == self.goal {
            debug!("validator check passed (goal: {})", self.goal);
            return Ok(());
        }

        let message = (self.message)(self.goal);
        debug!("validator check failed (goal: {}): {message}", self.goal);
        self.sink.report_failure(&message);
        Err(ValidatorError::AssertionFailed { message })
    }
}
