//! Submission violations.

use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single reason a submission was refused
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitViolation {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

/// Every violation found for one submission
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Submission rejected with {} violation(s)", .violations.len())]
pub struct SubmitRejected {
    violations: Vec<SubmitViolation>,
}

impl SubmitRejected {
    pub fn new(violations: NonEmptyVec<SubmitViolation>) -> Self {
        Self {
            violations: violations.iter().cloned().collect(),
        }
    }

    pub fn violations(&self) -> &[SubmitViolation] {
        &self.violations
    }
}
