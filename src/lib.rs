//! todo-state: a pure functional to-do list state machine
//!
//! The crate follows a "pure core, imperative shell" layout. The core is a
//! total transition function over an ordered todo collection; the shell is a
//! single-consumer action loop that owns the state and a one-shot fetch of
//! the starter list.
//!
//! # Core Concepts
//!
//! - **State**: `TodoState`, an ordered collection of `TodoItem`s
//! - **Actions**: `ReplaceAll`, `Add`, `Delete`, `Update`, applied by `apply`
//! - **Mode**: `Composing` or `Editing`, deciding what a submit produces
//! - **Runtime**: the message loop that owns the state and publishes snapshots
//!
//! # Example
//!
//! ```rust
//! use todo_state::core::{apply, Action, Composer, TodoId, TodoState};
//! use todo_state::todos;
//!
//! let state = apply(TodoState::new(), Action::ReplaceAll(todos![1 => "A", 2 => "B"]));
//!
//! let mut composer = Composer::new();
//! composer.set_draft("C");
//! let state = apply(state.clone(), composer.submit(&state));
//!
//! let state = apply(state, Action::Delete(TodoId::Int(1)));
//! assert_eq!(state.todos(), todos![2 => "B", 3 => "C"].as_slice());
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod enforcement;

// Re-export commonly used types
pub use crate::core::{apply, Action, Composer, Mode, TodoId, TodoItem, TodoState};
pub use crate::effects::{Dispatcher, Runtime, TodoSource};
