//! Id generation for newly composed items.

use super::item::TodoId;
use super::state::TodoState;
use uuid::Uuid;

/// Source of fresh item ids.
///
/// Implementations receive the current collection so they can avoid ids
/// that are already taken.
pub trait IdSource: Send {
    fn next_id(&mut self, current: &TodoState) -> TodoId;
}

/// Monotonic integer ids.
///
/// Each id is strictly greater than the previous one and than every integer
/// id in the current collection, so it never collides with fetched items.
///
/// # Example
///
/// ```rust
/// use todo_state::core::{IdSource, MonotonicIds, TodoId, TodoState};
/// use todo_state::todos;
///
/// let fetched = TodoState::from_items(todos![1 => "A", 5 => "B"]);
/// let mut ids = MonotonicIds::new();
///
/// assert_eq!(ids.next_id(&fetched), TodoId::Int(6));
/// assert_eq!(ids.next_id(&fetched), TodoId::Int(7));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonotonicIds {
    last: i64,
}

impl MonotonicIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting after `last`.
    pub fn starting_after(last: i64) -> Self {
        Self { last }
    }
}

impl IdSource for MonotonicIds {
    fn next_id(&mut self, current: &TodoState) -> TodoId {
        let floor = current
            .todos()
            .iter()
            .filter_map(|t| t.id.as_int())
            .max()
            .unwrap_or(0);
        self.last = self.last.max(floor).saturating_add(1);
        TodoId::Int(self.last)
    }
}

/// Random v4 UUID text ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self, _current: &TodoState) -> TodoId {
        TodoId::Text(Uuid::new_v4().to_string())
    }
}
