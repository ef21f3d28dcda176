//! Single-consumer action loop.
//!
//! One task owns the [`TodoStore`] and applies queued actions in order.
//! Producers hold a cloneable [`Dispatcher`]; renderers watch immutable
//! snapshots published after every action.

use crate::builder::SourceConfig;
use crate::core::{Action, TodoState};
use crate::effects::source::{FetchError, HttpSource, TodoSource};
use crate::effects::store::TodoStore;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Errors surfaced by the runtime handles
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Action loop has shut down")]
    Closed,

    #[error("Action loop task failed: {0}")]
    Crashed(#[from] tokio::task::JoinError),
}

enum Message {
    Apply(Action),
    Shutdown,
}

/// Cloneable handle for queueing actions.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Message>,
}

impl Dispatcher {
    /// Queue an action for the loop.
    /// Fails only once the loop has shut down.
    pub fn dispatch(&self, action: Action) -> Result<(), RuntimeError> {
        let name = action.name();
        self.tx.send(Message::Apply(action)).map_err(|_| {
            warn!(action = name, "Dropped action: loop has shut down");
            RuntimeError::Closed
        })
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Apply(action) => write!(f, "Apply({})", action.name()),
            Self::Shutdown => f.write_str("Shutdown"),
        }
    }
}

/// Read side for renderers: the latest snapshot and change notifications.
#[derive(Clone, Debug)]
pub struct Snapshots {
    rx: watch::Receiver<Arc<TodoState>>,
}

impl Snapshots {
    /// Latest published state
    pub fn current(&self) -> Arc<TodoState> {
        Arc::clone(&*self.rx.borrow())
    }

    /// Wait for the next published state.
    pub async fn changed(&mut self) -> Result<Arc<TodoState>, RuntimeError> {
        self.rx.changed().await.map_err(|_| RuntimeError::Closed)?;
        Ok(Arc::clone(&*self.rx.borrow_and_update()))
    }

    /// Wait until a published state satisfies `predicate`.
    pub async fn wait_for<F>(&mut self, mut predicate: F) -> Result<Arc<TodoState>, RuntimeError>
    where
        F: FnMut(&TodoState) -> bool,
    {
        let state = self
            .rx
            .wait_for(|s| predicate(s))
            .await
            .map_err(|_| RuntimeError::Closed)?;
        Ok(Arc::clone(&*state))
    }
}

/// Running todo session: the action loop plus an optional startup fetch.
///
/// Must be created from within a Tokio runtime. Dropping the runtime
/// cancels a fetch that is still in flight and asks the loop to stop.
///
/// # Example
///
/// ```rust
/// use todo_state::core::{Action, TodoItem};
/// use todo_state::effects::{Runtime, StaticSource};
/// use todo_state::todos;
///
/// # tokio_test_main();
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn tokio_test_main() {
/// let runtime = Runtime::spawn_with_source(StaticSource::new(todos![1 => "A"]));
/// let mut snapshots = runtime.snapshots();
/// snapshots.wait_for(|s| s.len() == 1).await.unwrap();
///
/// runtime.dispatcher().dispatch(Action::Add(TodoItem::new(2, "B"))).unwrap();
///
/// let store = runtime.shutdown().await.unwrap();
/// assert_eq!(store.snapshot().todos(), todos![1 => "A", 2 => "B"].as_slice());
/// # }
/// ```
pub struct Runtime {
    dispatcher: Dispatcher,
    snapshots: Snapshots,
    worker: Option<JoinHandle<TodoStore>>,
    fetch: Option<JoinHandle<()>>,
}

impl Runtime {
    /// Start the loop with an empty collection and no startup fetch.
    pub fn spawn() -> Self {
        Self::start(TodoStore::new())
    }

    /// Start the loop and load the starter list from `source`.
    ///
    /// A successful fetch queues exactly one `ReplaceAll`. A failed fetch is
    /// logged and queues nothing.
    pub fn spawn_with_source<S>(source: S) -> Self
    where
        S: TodoSource + 'static,
    {
        let mut runtime = Self::start(TodoStore::new());
        let dispatcher = runtime.dispatcher();

        runtime.fetch = Some(tokio::spawn(async move {
            match source.fetch().await {
                Ok(items) => {
                    info!(count = items.len(), "Loaded starter todos");
                    // A closed loop is already logged by the dispatcher
                    let _ = dispatcher.dispatch(Action::ReplaceAll(items));
                }
                Err(e) => {
                    error!(error = %e, "There was a problem with the fetch operation");
                }
            }
        }));
        runtime
    }

    /// Start the loop and fetch the starter list over HTTP.
    ///
    /// Fails only if the HTTP client cannot be built; fetch failures are
    /// logged by the fetch task.
    pub fn from_config(config: SourceConfig) -> Result<Self, FetchError> {
        Ok(Self::spawn_with_source(HttpSource::new(config)?))
    }

    fn start(store: TodoStore) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(store.snapshot().clone()));

        let worker = tokio::spawn(run_loop(store, rx, snapshot_tx));

        Self {
            dispatcher: Dispatcher { tx },
            snapshots: Snapshots { rx: snapshot_rx },
            worker: Some(worker),
            fetch: None,
        }
    }

    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    pub fn snapshots(&self) -> Snapshots {
        self.snapshots.clone()
    }

    /// Latest published state
    pub fn snapshot(&self) -> Arc<TodoState> {
        self.snapshots.current()
    }

    /// True while the startup fetch has not finished
    pub fn is_loading(&self) -> bool {
        self.fetch.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the session and hand back the store.
    ///
    /// A pending fetch is cancelled. Actions queued before the call are
    /// still applied; later dispatches fail with [`RuntimeError::Closed`].
    pub async fn shutdown(mut self) -> Result<TodoStore, RuntimeError> {
        self.cancel_fetch();
        // The loop may already be gone; joining below reports how it ended
        let _ = self.dispatcher.tx.send(Message::Shutdown);

        match self.worker.take() {
            Some(worker) => Ok(worker.await?),
            None => Err(RuntimeError::Closed),
        }
    }

    fn cancel_fetch(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            if !fetch.is_finished() {
                debug!("Cancelling pending fetch");
            }
            fetch.abort();
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.cancel_fetch();
        if self.worker.is_some() {
            let _ = self.dispatcher.tx.send(Message::Shutdown);
        }
    }
}

async fn run_loop(
    mut store: TodoStore,
    mut rx: mpsc::UnboundedReceiver<Message>,
    snapshots: watch::Sender<Arc<TodoState>>,
) -> TodoStore {
    while let Some(message) = rx.recv().await {
        match message {
            Message::Apply(action) => {
                let state = store.dispatch(action);
                snapshots.send_replace(Arc::new(state.clone()));
            }
            Message::Shutdown => {
                // Stop accepting new actions but drain what is already queued
                rx.close();
            }
        }
    }
    debug!(applied = store.log().len(), "Action loop stopped");
    store
}
