//! Builder API for creating submission rules.

use crate::enforcement::context::Submission;
use crate::enforcement::rules::{SubmitCheck, SubmitRules};
use crate::enforcement::violations::SubmitViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating submission rules
#[derive(Default)]
pub struct SubmitRulesBuilder {
    non_empty: bool,
    required_checks: Vec<SubmitCheck>,
}

impl SubmitRulesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject drafts that are empty after trimming
    pub fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&Submission) -> Validation<(), NonEmptyVec<SubmitViolation>> + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&Submission) -> bool + Send + Sync + 'static,
    {
        let check = move |submission: &Submission| {
            if predicate(submission) {
                Validation::success(())
            } else {
                Validation::fail(SubmitViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Build the submission rules
    pub fn build(self) -> SubmitRules {
        SubmitRules {
            non_empty: self.non_empty,
            required_checks: self.required_checks,
        }
    }
}
