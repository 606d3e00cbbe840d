//! Cancellable backend streams and supersede bookkeeping.
//!
//! A [`Subscription`] is the controller-facing half of a live backend
//! query ("observe all sellers with status X"): a push-based stream of
//! snapshots that ends when either side goes away. Dropping it closes
//! the channel, which is how the producer learns the watcher is gone.
//!
//! A [`StreamSlot`] enforces the invariant that at most one subscription
//! per logical stream is live at a time: starting a replacement first
//! aborts the previous pump task, then bumps a generation counter so a
//! completion that raced past the abort is still recognized as stale and
//! discarded at merge time.

use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll};

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A live, push-based stream of values from a backend collaborator.
pub struct Subscription<T> {
    rx: mpsc::Receiver<T>,
}

impl<T> Subscription<T> {
    /// Channel capacity for subscription delivery. The producer drops
    /// the watcher when the receiver is gone, not when it lags.
    pub const CAPACITY: usize = 16;

    pub fn new() -> (mpsc::Sender<T>, Self) {
        let (tx, rx) = mpsc::channel(Self::CAPACITY);
        (tx, Self { rx })
    }

    /// Receive the next emission. `None` means the producer is gone.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }
}

impl<T> futures_core::Stream for Subscription<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.rx.poll_recv(cx)
    }
}

/// Monotonic generation counter.
///
/// Each superseding operation takes the next generation; merges check
/// `is_current` before touching state, so a late completion from an
/// already-replaced operation cannot resurrect stale data.
pub struct Generation(AtomicU64);

impl Generation {
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::SeqCst) == generation
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::new()
    }
}

/// Token identifying one incarnation of a logical stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamToken(u64);

/// Holder for the single live pump task of one logical stream.
pub struct StreamSlot {
    task: Mutex<Option<JoinHandle<()>>>,
    generation: Generation,
}

impl StreamSlot {
    pub fn new() -> Self {
        Self {
            task: Mutex::new(None),
            generation: Generation::new(),
        }
    }

    /// Cancel the current pump task (if any) and claim the slot for a
    /// replacement. The returned token must accompany every merge the
    /// replacement performs.
    pub fn supersede(&self) -> StreamToken {
        let mut task = self.task.lock();
        if let Some(previous) = task.take() {
            previous.abort();
        }
        StreamToken(self.generation.next())
    }

    /// Attach the pump task spawned for the token from [`supersede`].
    ///
    /// [`supersede`]: StreamSlot::supersede
    pub fn install(&self, handle: JoinHandle<()>) {
        let mut task = self.task.lock();
        if let Some(previous) = task.replace(handle) {
            previous.abort();
        }
    }

    pub fn is_current(&self, token: StreamToken) -> bool {
        self.generation.is_current(token.0)
    }

    /// Cancel without replacement (screen teardown).
    pub fn cancel(&self) {
        let _ = self.supersede();
    }
}

impl Default for StreamSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StreamSlot {
    fn drop(&mut self) {
        if let Some(task) = self.task.get_mut().take() {
            task.abort();
        }
    }
}
