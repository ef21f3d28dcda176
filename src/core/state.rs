//! The todo collection and its pure transition function.
//!
//! Everything here is pure: `apply` consumes a state and an action and
//! returns the next state without side effects.

use super::action::{Action, TitleUpdate};
use super::item::{TodoId, TodoItem};
use serde::{Deserialize, Serialize};

/// State of the todo state machine: an ordered collection of items.
///
/// Insertion order is display order. Ids are expected to be unique; the
/// transitions trust their callers on that and never check.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct TodoState {
    todos: Vec<TodoItem>,
}

impl TodoState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state holding these items verbatim.
    pub fn from_items(todos: Vec<TodoItem>) -> Self {
        Self { todos }
    }

    /// Items in display order.
    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Look up an item by id (linear scan).
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| &t.id == id)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Apply an action, returning the next state.
    ///
    /// See [`apply`].
    pub fn apply(self, action: Action) -> Self {
        apply(self, action)
    }

    pub fn into_items(self) -> Vec<TodoItem> {
        self.todos
    }
}

/// The transition function of the todo state machine.
///
/// Total over its input: no action can fail. Deleting or updating an id
/// that is not present, or applying [`Action::Unrecognized`], returns the
/// state unchanged.
///
/// # Example
///
/// ```rust
/// use todo_state::core::{apply, Action, TodoId, TodoItem, TodoState};
/// use todo_state::todos;
///
/// let state = apply(TodoState::new(), Action::ReplaceAll(todos![1 => "A", 2 => "B"]));
/// let state = apply(state, Action::Delete(TodoId::Int(1)));
/// let state = apply(state, Action::Add(TodoItem::new(3, "C")));
/// let state = apply(state, Action::update(3, "C2"));
///
/// assert_eq!(state.todos(), todos![2 => "B", 3 => "C2"].as_slice());
/// ```
pub fn apply(state: TodoState, action: Action) -> TodoState {
    match action {
        Action::ReplaceAll(todos) => TodoState { todos },
        Action::Add(item) => add(state, item),
        Action::Delete(id) => delete(state, &id),
        Action::Update(update) => update_title(state, update),
        Action::Unrecognized => state,
    }
}

fn add(mut state: TodoState, item: TodoItem) -> TodoState {
    state.todos.push(item);
    state
}

fn delete(mut state: TodoState, id: &TodoId) -> TodoState {
    if let Some(index) = state.todos.iter().position(|t| &t.id == id) {
        state.todos.remove(index);
    }
    state
}

fn update_title(mut state: TodoState, update: TitleUpdate) -> TodoState {
    if let Some(item) = state.todos.iter_mut().find(|t| t.id == update.id) {
        item.title = update.title;
    }
    state
}
