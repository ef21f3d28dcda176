//! Exclusive owner of the todo state.

use crate::core::{apply, Action, ActionLog, ActionRecord, TodoState};
use chrono::Utc;
use tracing::debug;

/// Owns the [`TodoState`] and the log of actions applied to it.
///
/// The state can only change through [`dispatch`](Self::dispatch); readers
/// get a shared reference.
#[derive(Debug, Default)]
pub struct TodoStore {
    state: TodoState,
    log: ActionLog,
}

impl TodoStore {
    /// Create a store with an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action and return the resulting state.
    pub fn dispatch(&mut self, action: Action) -> &TodoState {
        let name = action.name();
        let before_len = self.state.len();

        let state = std::mem::take(&mut self.state);
        self.state = apply(state, action);

        let after_len = self.state.len();
        debug!(action = name, before_len, after_len, "Applied action");

        self.log.push(ActionRecord {
            action: name.to_string(),
            before_len,
            after_len,
            timestamp: Utc::now(),
        });
        &self.state
    }

    /// Current state (pure)
    pub fn snapshot(&self) -> &TodoState {
        &self.state
    }

    /// Actions applied so far (pure)
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    pub fn into_state(self) -> TodoState {
        self.state
    }
}
