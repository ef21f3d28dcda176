//! Add/edit mode toggle and the draft being composed.
//!
//! The mode decides which action a submit produces: `Add` while composing a
//! new item, `Update` while editing an existing one.

use super::action::Action;
use super::ids::{IdSource, MonotonicIds};
use super::item::{TodoId, TodoItem};
use super::state::TodoState;
use crate::enforcement::{SubmitRejected, SubmitRules, Submission};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// Which kind of submit the surface is offering.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Composing a new item
    #[default]
    Composing,

    /// Editing an existing item, bound to its id and title at edit time
    Editing { id: TodoId, title: String },
}

impl Mode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Label for the single submit button.
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Composing => "Add Todo",
            Self::Editing { .. } => "Update Todo",
        }
    }
}

/// Holds the current [`Mode`] and draft text and turns submits into actions.
///
/// The composer never touches the todo collection; it only reads a snapshot
/// to pick a fresh id.
///
/// # Example
///
/// ```rust
/// use todo_state::core::{Action, Composer, Mode, TodoItem, TodoState};
///
/// let state = TodoState::new();
/// let mut composer = Composer::new();
///
/// composer.set_draft("Buy milk");
/// let add = composer.submit(&state);
/// assert!(matches!(add, Action::Add(_)));
///
/// composer.begin_edit(&TodoItem::new(1, "Buy milk"));
/// composer.set_draft("Buy oat milk");
/// assert_eq!(composer.submit(&state), Action::update(1, "Buy oat milk"));
/// assert_eq!(composer.mode(), &Mode::Composing);
/// ```
pub struct Composer<I: IdSource = MonotonicIds> {
    mode: Mode,
    draft: String,
    ids: I,
}

impl Composer<MonotonicIds> {
    pub fn new() -> Self {
        Self::with_ids(MonotonicIds::new())
    }
}

impl Default for Composer<MonotonicIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> Composer<I> {
    /// Create a composer drawing ids from `ids`.
    pub fn with_ids(ids: I) -> Self {
        Self {
            mode: Mode::Composing,
            draft: String::new(),
            ids,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Switch to editing `item`, seeding the draft with its title.
    pub fn begin_edit(&mut self, item: &TodoItem) {
        self.mode = Mode::Editing {
            id: item.id.clone(),
            title: item.title.clone(),
        };
        self.draft = item.title.clone();
    }

    /// Leave edit mode without emitting anything.
    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    /// Turn the draft into an action and return to composing.
    ///
    /// Editing emits `Update` for the bound id; composing emits `Add` with a
    /// fresh id. If the bound item was deleted meanwhile the `Update` simply
    /// matches nothing.
    pub fn submit(&mut self, current: &TodoState) -> Action {
        let title = std::mem::take(&mut self.draft);
        let action = match std::mem::take(&mut self.mode) {
            Mode::Editing { id, .. } => Action::update(id, title),
            Mode::Composing => Action::Add(TodoItem {
                id: self.ids.next_id(current),
                title,
            }),
        };
        self.reset();
        action
    }

    /// Like [`submit`](Self::submit), but only if `rules` accept the draft.
    ///
    /// On rejection mode and draft are left as they were.
    pub fn submit_checked(
        &mut self,
        current: &TodoState,
        rules: &SubmitRules,
    ) -> Result<Action, SubmitRejected> {
        let submission = Submission {
            mode: self.mode.clone(),
            draft: self.draft.clone(),
        };
        match rules.enforce(&submission) {
            Validation::Success(()) => Ok(self.submit(current)),
            Validation::Failure(violations) => Err(SubmitRejected::new(violations)),
        }
    }

    fn reset(&mut self) {
        self.mode = Mode::Composing;
        self.draft.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UuidIds;
    use crate::enforcement::{SubmitRulesBuilder, SubmitViolation};
    use crate::todos;

    #[test]
    fn starts_in_composing_mode() {
        let composer = Composer::new();
        assert_eq!(composer.mode(), &Mode::Composing);
        assert_eq!(composer.draft(), "");
        assert_eq!(composer.mode().submit_label(), "Add Todo");
    }

    #[test]
    fn begin_edit_binds_id_and_title() {
        let mut composer = Composer::new();
        composer.begin_edit(&TodoItem::new(2, "B"));

        assert_eq!(
            composer.mode(),
            &Mode::Editing {
                id: TodoId::Int(2),
                title: "B".to_string()
            }
        );
        assert_eq!(composer.draft(), "B");
        assert_eq!(composer.mode().submit_label(), "Update Todo");
    }

    #[test]
    fn submit_in_edit_mode_emits_update_and_returns_to_composing() {
        let state = TodoState::from_items(todos![2 => "B"]);
        let mut composer = Composer::new();
        composer.begin_edit(&TodoItem::new(2, "B"));
        composer.set_draft("B2");

        let action = composer.submit(&state);

        assert_eq!(action, Action::update(2, "B2"));
        assert_eq!(composer.mode(), &Mode::Composing);
        assert_eq!(composer.draft(), "");
    }

    #[test]
    fn submit_in_compose_mode_emits_add_with_fresh_id() {
        let state = TodoState::from_items(todos![1 => "A", 2 => "B"]);
        let mut composer = Composer::new();
        composer.set_draft("C");

        let action = composer.submit(&state);

        assert_eq!(action, Action::Add(TodoItem::new(3, "C")));
        assert_eq!(composer.mode(), &Mode::Composing);
        assert_eq!(composer.draft(), "");
    }

    #[test]
    fn consecutive_adds_get_distinct_ids() {
        let state = TodoState::new();
        let mut composer = Composer::new();

        let first = composer.submit(&state);
        let second = composer.submit(&state);

        match (first, second) {
            (Action::Add(a), Action::Add(b)) => assert_ne!(a.id, b.id),
            other => panic!("Expected two adds, got {other:?}"),
        }
    }

    #[test]
    fn cancel_edit_discards_draft() {
        let mut composer = Composer::new();
        composer.begin_edit(&TodoItem::new(1, "A"));
        composer.set_draft("half typed");

        composer.cancel_edit();

        assert!(!composer.mode().is_editing());
        assert_eq!(composer.draft(), "");
    }

    #[test]
    fn composer_accepts_custom_id_source() {
        let mut composer = Composer::with_ids(UuidIds);
        composer.set_draft("x");

        match composer.submit(&TodoState::new()) {
            Action::Add(item) => assert!(matches!(item.id, TodoId::Text(_))),
            other => panic!("Expected Add, got {other:?}"),
        }
    }

    #[test]
    fn submit_checked_rejects_blank_draft_and_keeps_mode() {
        let rules = SubmitRulesBuilder::new().non_empty().build();
        let mut composer = Composer::new();
        composer.begin_edit(&TodoItem::new(1, "A"));
        composer.set_draft("   ");

        let result = composer.submit_checked(&TodoState::new(), &rules);

        let rejected = result.unwrap_err();
        assert!(rejected
            .violations()
            .iter()
            .any(|v| matches!(v, SubmitViolation::EmptyTitle)));
        assert!(composer.mode().is_editing());
        assert_eq!(composer.draft(), "   ");
    }

    #[test]
    fn submit_checked_passes_through_with_default_rules() {
        let rules = SubmitRules::default();
        let mut composer = Composer::new();

        let action = composer.submit_checked(&TodoState::new(), &rules).unwrap();
        assert_eq!(action, Action::Add(TodoItem::new(1, "")));
    }
}
