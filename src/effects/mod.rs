//! The imperative shell around the pure core.
//!
//! This module owns everything with side effects:
//!
//! - **Sources**: the `TodoSource` seam and its HTTP implementation
//! - **Store**: the single owner of the todo state
//! - **Runtime**: the single-consumer action loop and the startup fetch
//!
//! Fetch failures never reach the state. They are logged through `tracing`
//! and the runtime carries on with whatever it has.

mod runtime;
mod source;
mod store;

pub use runtime::{Dispatcher, Runtime, RuntimeError, Snapshots};
pub use source::{FetchError, HttpSource, StaticSource, TodoSource};
pub use store::TodoStore;
