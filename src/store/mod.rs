//! View-state stores: one async fetch lifecycle per dataset.
//!
//! A store never talks to the network itself. `begin()` flips the state to
//! `Loading` and hands out a channel sender; whoever runs the fetch sends
//! exactly one terminal outcome, and the UI drains arrivals through `poll()`
//! once per frame. Overlapping fetches are allowed and intentionally not
//! cancelled: outcomes apply in arrival order, so the last response to land
//! wins regardless of which request was issued first.

use std::sync::mpsc::{Receiver, Sender, channel};

use crate::data::FetchError;

/// Lifecycle of one remote resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resource {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Default)]
pub struct ViewState<T> {
    pub status: Resource,
    pub data: T,
    pub error: Option<String>,
}

pub struct RemoteStore<T> {
    state: ViewState<T>,
    tx: Sender<Result<T, FetchError>>,
    rx: Receiver<Result<T, FetchError>>,
}

impl<T: Default> Default for RemoteStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> RemoteStore<T> {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            state: ViewState::default(),
            tx,
            rx,
        }
    }

    /// Mark the store loading and return the sender for this fetch's outcome.
    pub fn begin(&mut self) -> Sender<Result<T, FetchError>> {
        self.state.status = Resource::Loading;
        self.state.error = None;
        self.tx.clone()
    }

    /// Apply every outcome that has arrived since the last frame.
    ///
    /// Returns `true` when at least one fresh successful dataset landed, so
    /// the caller can reset dependent state (the chart viewport).
    pub fn poll(&mut self) -> bool {
        let mut fresh_data = false;
        while let Ok(outcome) = self.rx.try_recv() {
            match outcome {
                Ok(data) => {
                    self.state.data = data;
                    self.state.status = Resource::Success;
                    self.state.error = None;
                    fresh_data = true;
                }
                Err(e) => {
                    // Prior data is kept for display context.
                    self.state.status = Resource::Error;
                    self.state.error = Some(e.to_string());
                }
            }
        }
        fresh_data
    }

    pub fn status(&self) -> Resource {
        self.state.status
    }

    pub fn data(&self) -> &T {
        &self.state.data
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_idle_loading_success() {
        let mut store: RemoteStore<Vec<i64>> = RemoteStore::new();
        assert_eq!(store.status(), Resource::Idle);

        let tx = store.begin();
        assert_eq!(store.status(), Resource::Loading);

        tx.send(Ok(vec![1, 2, 3])).unwrap();
        assert!(store.poll());
        assert_eq!(store.status(), Resource::Success);
        assert_eq!(store.data(), &vec![1, 2, 3]);
        assert!(store.error().is_none());
    }

    #[test]
    fn last_response_to_arrive_wins() {
        let mut store: RemoteStore<Vec<i64>> = RemoteStore::new();
        let first = store.begin();
        let second = store.begin();

        // The second request resolves before the first.
        second.send(Ok(vec![2])).unwrap();
        first.send(Ok(vec![1])).unwrap();

        store.poll();
        assert_eq!(store.data(), &vec![1]);
        assert_eq!(store.status(), Resource::Success);
    }

    #[test]
    fn error_keeps_previous_data() {
        let mut store: RemoteStore<Vec<i64>> = RemoteStore::new();
        store.begin().send(Ok(vec![7])).unwrap();
        store.poll();

        store.begin().send(Err(FetchError::Api("down".into()))).unwrap();
        assert!(!store.poll());
        assert_eq!(store.status(), Resource::Error);
        assert_eq!(store.data(), &vec![7]);
        assert_eq!(store.error(), Some("down"));
    }

    #[test]
    fn begin_clears_a_previous_error() {
        let mut store: RemoteStore<Vec<i64>> = RemoteStore::new();
        store.begin().send(Err(FetchError::Api("down".into()))).unwrap();
        store.poll();

        store.begin();
        assert_eq!(store.status(), Resource::Loading);
        assert!(store.error().is_none());
    }

    #[test]
    fn empty_dataset_is_success() {
        let mut store: RemoteStore<Vec<i64>> = RemoteStore::new();
        store.begin().send(Ok(Vec::new())).unwrap();
        assert!(store.poll());
        assert_eq!(store.status(), Resource::Success);
        assert!(store.data().is_empty());
    }
}
