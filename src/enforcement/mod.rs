//! Opt-in submission rules for the composer.
//!
//! Rules use Stillwater's `Validation` type so that every violation is
//! reported at once instead of stopping at the first.
//!
//! No rules apply by default: an empty `SubmitRules` accepts any draft,
//! including an empty one.
//!
//! # Example
//!
//! ```rust
//! use todo_state::core::{Composer, TodoState};
//! use todo_state::enforcement::SubmitRulesBuilder;
//!
//! let rules = SubmitRulesBuilder::new()
//!     .non_empty()
//!     .require_pred(|s| s.draft.len() <= 200, "Title is too long".to_string())
//!     .build();
//!
//! let mut composer = Composer::new();
//! assert!(composer.submit_checked(&TodoState::new(), &rules).is_err());
//!
//! composer.set_draft("Water the plants");
//! assert!(composer.submit_checked(&TodoState::new(), &rules).is_ok());
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::SubmitRulesBuilder;
pub use context::Submission;
pub use rules::SubmitRules;
pub use violations::{SubmitRejected, SubmitViolation};
