//! Quiescence-window scheduling for search-as-you-type.
//!
//! Raw input is funneled into [`Debouncer::schedule`]; the scheduled run
//! only fires once the window elapses with no further input. A newer
//! call aborts the pending (or already in-flight) run outright rather
//! than queueing behind it, and bumps the generation so a result that
//! slipped past the abort is discarded at merge time. The final state
//! therefore always corresponds to the last input, never to whichever
//! backend call happened to finish last.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::subscription::Generation;

/// Token identifying one scheduled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

pub struct Debouncer {
    window: Duration,
    task: Mutex<Option<JoinHandle<()>>>,
    generation: Generation,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            task: Mutex::new(None),
            generation: Generation::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule `run` after the quiescence window, abandoning any
    /// previously scheduled or in-flight run.
    pub fn schedule<F, Fut>(&self, run: F)
    where
        F: FnOnce(DebounceToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut task = self.task.lock();
        if let Some(previous) = task.take() {
            previous.abort();
        }
        let token = DebounceToken(self.generation.next());
        let window = self.window;
        *task = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            run(token).await;
        }));
    }

    /// True while `token` belongs to the most recently scheduled run.
    pub fn is_current(&self, token: DebounceToken) -> bool {
        self.generation.is_current(token.0)
    }

    /// Abandon any pending run (input cleared, screen teardown).
    pub fn cancel(&self) {
        let mut task = self.task.lock();
        if let Some(previous) = task.take() {
            previous.abort();
        }
        // Invalidate tokens held by a run already past its await point.
        let _ = self.generation.next();
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(task) = self.task.get_mut().take() {
            task.abort();
        }
    }
}
