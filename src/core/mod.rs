//! Core todo state machine types and logic.
//!
//! This module contains the pure functional core:
//! - Items, ids and the todo collection
//! - Actions and the `apply` transition function
//! - The add/edit mode toggle and id generation
//! - An immutable log of applied actions
//!
//! Nothing in this module performs I/O.

mod action;
mod history;
mod ids;
mod item;
mod mode;
mod state;

pub use action::{Action, TitleUpdate};
pub use history::{ActionLog, ActionRecord};
pub use ids::{IdSource, MonotonicIds, UuidIds};
pub use item::{TodoId, TodoItem};
pub use mode::{Composer, Mode};
pub use state::{apply, TodoState};
