//! Cancellable background loads with an observable state.
//!
//! A `LoadHandle` owns a spawned task and the receiving end of a `watch`
//! channel. The task publishes `Loaded` exactly once and then exits.
//! Cancelling or dropping the handle aborts the task, so a late result can
//! never be applied after the caller has gone away.

use std::future::Future;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Observable state of a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

pub struct LoadHandle<T> {
    state: watch::Receiver<LoadState<T>>,
    task: Option<JoinHandle<()>>,
}

impl<T> LoadHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// A load that is already settled; no task is spawned.
    pub fn ready(value: T) -> Self {
        let (_tx, rx) = watch::channel(LoadState::Loaded(value));
        Self {
            state: rx,
            task: None,
        }
    }

    /// Spawn `load` on the runtime and publish its output once it completes.
    pub fn spawn<F>(load: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = watch::channel(LoadState::Loading);
        let task = tokio::spawn(async move {
            let value = load.await;
            // The handle may already be gone; nothing to notify then.
            let _ = tx.send(LoadState::Loaded(value));
        });

        Self {
            state: rx,
            task: Some(task),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> LoadState<T> {
        self.state.borrow().clone()
    }

    /// A receiver that observes every transition from now on.
    pub fn subscribe(&self) -> watch::Receiver<LoadState<T>> {
        self.state.clone()
    }

    /// Abort the load. A pending result is discarded and the state stays
    /// where it was.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Wait for the terminal value. Returns `None` if the load was cancelled
    /// before it settled.
    pub async fn settled(&mut self) -> Option<T> {
        loop {
            if let LoadState::Loaded(value) = &*self.state.borrow_and_update() {
                return Some(value.clone());
            }
            if self.state.changed().await.is_err() {
                return match &*self.state.borrow() {
                    LoadState::Loaded(value) => Some(value.clone()),
                    LoadState::Loading => None,
                };
            }
        }
    }
}

impl<T> Drop for LoadHandle<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
