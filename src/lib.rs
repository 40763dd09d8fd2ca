//! Placeholder templating, goal-invertible validators and rule-based
//! verification for test-automation harnesses.

pub mod cmd;
pub mod domain;
pub mod engine;
pub mod io;
