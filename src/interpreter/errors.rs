//! Step failure types for the simulator
//!
//! This module defines [`StepError`], the failures that can occur while a single
//! line is simulated. Classification never fails and evaluation degrades to
//! symbolic values, so a step failure is the only condition that puts the
//! engine into the terminal error state.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// Assignment to a binding declared with `const`
    #[error("Assignment to constant variable '{name}'")]
    ConstReassignment { name: String, line: usize },

    /// The configured step ceiling was reached
    #[error("Step limit of {limit} exceeded")]
    StepLimitExceeded { limit: usize, line: usize },
}

impl StepError {
    /// Line the failure originated on
    pub fn line(&self) -> usize {
        match self {
            StepError::ConstReassignment { line, .. } => *line,
            StepError::StepLimitExceeded { line, .. } => *line,
        }
    }

    /// Message shown to the user, prefixed with the line number
    pub fn report(&self) -> String {
        format!("Error at line {}: {}", self.line(), self)
    }
}
