//! Submission rules using Validation.

use crate::enforcement::context::Submission;
use crate::enforcement::violations::SubmitViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type SubmitCheck =
    Box<dyn Fn(&Submission) -> Validation<(), NonEmptyVec<SubmitViolation>> + Send + Sync>;

/// Rules a draft must satisfy before the composer emits an action.
/// Uses Validation to accumulate ALL violations.
#[derive(Default)]
pub struct SubmitRules {
    pub(crate) non_empty: bool,
    pub(crate) required_checks: Vec<SubmitCheck>,
}

impl SubmitRules {
    /// Enforce all rules, accumulating ALL violations.
    /// Returns Validation::Success(()) if all checks pass.
    /// Returns Validation::Failure with ALL violations if any fail.
    pub fn enforce(&self, submission: &Submission) -> Validation<(), NonEmptyVec<SubmitViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<SubmitViolation>>> = Vec::new();

        if self.non_empty {
            let check = if submission.trimmed().is_empty() {
                Validation::fail(SubmitViolation::EmptyTitle)
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(submission));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// True when no rule is configured and every draft passes
    pub fn is_permissive(&self) -> bool {
        !self.non_empty && self.required_checks.is_empty()
    }
}
