//! Log of applied actions.
//!
//! Diagnostic only: the log records what happened to the collection and
//! is never replayed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied action.
///
/// # Example
///
/// ```rust
/// use todo_state::core::ActionRecord;
/// use chrono::Utc;
///
/// let record = ActionRecord {
///     action: "ADD_TODO".to_string(),
///     before_len: 2,
///     after_len: 3,
///     timestamp: Utc::now(),
/// };
/// assert!(record.changed_len());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Wire name of the applied action
    pub action: String,
    /// Collection length before the action
    pub before_len: usize,
    /// Collection length after the action
    pub after_len: usize,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
}

impl ActionRecord {
    pub fn changed_len(&self) -> bool {
        self.before_len != self.after_len
    }
}

/// Ordered, immutable log of applied actions.
///
/// `record` returns a new log with the entry added; the owner of a log
/// appends in place with `push`.
///
/// # Example
///
/// ```rust
/// use todo_state::core::{ActionLog, ActionRecord};
/// use chrono::Utc;
///
/// let log = ActionLog::new();
/// let log = log.record(ActionRecord {
///     action: "SET_TODOS".to_string(),
///     before_len: 0,
///     after_len: 5,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.names(), vec!["SET_TODOS"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActionLog {
    records: Vec<ActionRecord>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record an action, returning a new log.
    ///
    /// This does not mutate the existing log.
    pub fn record(&self, record: ActionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Append an action to this log.
    pub fn push(&mut self, record: ActionRecord) {
        self.records.push(record);
    }

    /// Names of the applied actions, oldest first.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.action.as_str()).collect()
    }

    /// Time between the first and last record.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
