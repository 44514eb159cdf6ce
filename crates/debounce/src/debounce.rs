//! Debounced value cell
//!
//! Keeps the last committed value of a changing input. Each input change
//! cancels the pending commit (if any) and schedules a new one `delay`
//! later. Only a value that stays unchanged for the whole delay is ever
//! committed.

use crate::config::DebounceConfig;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// A delayed copy of a changing value
///
/// Feed the current input with [`Debounced::track`] (or [`Debounced::set`])
/// on every update cycle and read the committed value back. The initial
/// value is committed immediately.
///
/// Dropping the cell cancels any pending commit.
pub struct Debounced<V> {
    shared: Arc<Shared<V>>,
    delay: Duration,
    runtime: Handle,
}

struct Shared<V> {
    state: Mutex<State<V>>,
    committed: watch::Sender<V>,
}

struct State<V> {
    /// Most recent input, committed or not
    latest: V,
    /// Bumped on every input change; identifies the live pending commit
    generation: u64,
    pending: Option<PendingCommit>,
}

struct PendingCommit {
    generation: u64,
    task: JoinHandle<()>,
}

impl<V> Debounced<V>
where
    V: Clone + PartialEq + Send + Sync + 'static,
{
    /// Create a debounced cell with the default 300ms delay
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, like `tokio::spawn`.
    /// Use [`Debounced::with_handle`] to bind to a runtime explicitly.
    pub fn new(initial: V) -> Self {
        Self::with_config(initial, DebounceConfig::default())
    }

    /// Create a debounced cell with an explicit delay
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn with_config(initial: V, config: DebounceConfig) -> Self {
        Self::with_handle(Handle::current(), initial, config)
    }

    /// Create a debounced cell whose timers run on `runtime`
    pub fn with_handle(runtime: Handle, initial: V, config: DebounceConfig) -> Self {
        let (committed, _) = watch::channel(initial.clone());

        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    latest: initial,
                    generation: 0,
                    pending: None,
                }),
                committed,
            }),
            delay: config.delay(),
            runtime,
        }
    }

    /// Feed a new input value
    ///
    /// Unchanged input is a no-op: the pending commit keeps its original
    /// deadline. A changed input replaces the pending commit.
    pub fn set(&self, value: V) {
        let mut state = self.shared.state.lock();
        if state.latest == value {
            return;
        }

        state.generation += 1;
        let generation = state.generation;
        state.latest = value.clone();

        if let Some(pending) = state.pending.take() {
            pending.task.abort();
            debug!(superseded = pending.generation, generation, "Superseded pending commit");
        }

        // Back to the committed value: nothing left to schedule
        if *self.shared.committed.borrow() == value {
            return;
        }

        let shared = Arc::downgrade(&self.shared);
        let delay = self.delay;
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(shared) = shared.upgrade() {
                shared.commit(generation, value);
            }
        });

        debug!(generation, delay_ms = delay.as_millis() as u64, "Scheduled commit");
        state.pending = Some(PendingCommit { generation, task });
    }

    /// Feed `value` and return the committed value
    ///
    /// This is the per-update-cycle entry point: the returned value lags
    /// behind `value` until it has been stable for the configured delay.
    pub fn track(&self, value: V) -> V {
        self.set(value);
        self.get()
    }

    /// Current committed value
    pub fn get(&self) -> V {
        self.shared.committed.borrow().clone()
    }

    /// Subscribe to commits
    ///
    /// The receiver starts at the current committed value and is marked
    /// changed on every later commit. It observes a closed channel once
    /// the cell is dropped.
    pub fn subscribe(&self) -> watch::Receiver<V> {
        self.shared.committed.subscribe()
    }

    /// Discard the pending commit, if any, without committing it
    pub fn cancel(&self) {
        let mut state = self.shared.state.lock();
        if let Some(pending) = state.pending.take() {
            pending.task.abort();
            debug!(generation = pending.generation, "Cancelled pending commit");
        }
        state.latest = self.shared.committed.borrow().clone();
    }

    /// Whether a commit is scheduled
    pub fn is_pending(&self) -> bool {
        self.shared.state.lock().pending.is_some()
    }

    /// Configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<V> Shared<V> {
    fn commit(&self, generation: u64, value: V) {
        let mut state = self.state.lock();

        // The timer may fire right before `set` aborts it; the generation
        // check keeps a superseded value from landing.
        match state.pending {
            Some(ref pending) if pending.generation == generation => {}
            _ => {
                debug!(generation, "Dropped stale commit");
                return;
            }
        }

        state.pending = None;
        self.committed.send_replace(value);
        debug!(generation, "Committed debounced value");
    }
}

impl<V> Drop for Debounced<V> {
    fn drop(&mut self) {
        if let Some(pending) = self.shared.state.lock().pending.take() {
            pending.task.abort();
            debug!(generation = pending.generation, "Cancelled pending commit on drop");
        }
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for Debounced<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Commits lock `state` and then write the watch; never hold the
        // watch guard while taking `state`.
        let pending = self.shared.state.lock().pending.is_some();
        let committed = self.shared.committed.borrow();
        f.debug_struct("Debounced")
            .field("committed", &*committed)
            .field("pending", &pending)
            .field("delay", &self.delay)
            .finish()
    }
}
