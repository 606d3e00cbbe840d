//! Observable state container.
//!
//! One `StateStore` backs each screen controller. It exposes the current
//! state to any number of observers through a `tokio::sync::watch`
//! channel and supports exactly one mutation primitive: apply a pure
//! `old -> new` function. `watch::Sender::send_modify` serializes
//! concurrent callers, so completions arriving from worker tasks never
//! interleave mid-transition.

use tokio::sync::watch;

use crate::mvi::{Reducer, UiState};

pub struct StateStore<S: UiState> {
    tx: watch::Sender<S>,
}

impl<S: UiState> StateStore<S> {
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> S {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes. Receivers see every committed state
    /// that is current at the time they poll.
    pub fn watch(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }

    /// Replace the state with `f(current)`.
    pub fn update(&self, f: impl FnOnce(S) -> S) {
        self.tx.send_modify(|state| *state = f(std::mem::take(state)));
    }

    /// Run an intent through a reducer and commit the result.
    pub fn reduce<R>(&self, intent: R::Intent)
    where
        R: Reducer<State = S>,
    {
        self.update(|state| R::reduce(state, intent));
    }
}

impl<S: UiState> Default for StateStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter {
        value: i64,
    }

    impl UiState for Counter {}

    #[test]
    fn update_replaces_state() {
        let store = StateStore::new(Counter { value: 1 });
        store.update(|c| Counter { value: c.value + 2 });
        assert_eq!(store.get(), Counter { value: 3 });
    }

    #[tokio::test]
    async fn watchers_observe_commits() {
        let store = StateStore::<Counter>::default();
        let mut rx = store.watch();
        store.update(|c| Counter { value: c.value + 1 });
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().value, 1);
    }
}
