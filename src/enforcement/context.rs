//! What submission checks get to look at.

use crate::core::Mode;

/// A pending submit: the composer's mode and draft at the time of the call.
#[derive(Clone, Debug)]
pub struct Submission {
    pub mode: Mode,
    pub draft: String,
}

impl Submission {
    /// Draft with surrounding whitespace removed (pure)
    pub fn trimmed(&self) -> &str {
        self.draft.trim()
    }
}
