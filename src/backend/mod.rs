//! Backend collaborators: the boundary between controllers and the
//! hosted services (document database, object storage, auth).
//!
//! Controllers only ever see the narrow ports in [`ports`]; the
//! process-wide SDK singletons of a real deployment stay behind them.
//! [`memory`] provides the in-memory implementation used by the demo
//! binary and by tests.

mod error;
pub mod memory;
pub mod ports;
pub mod search;

pub use error::{BackendError, BackendResult, FALLBACK_MESSAGE};
pub use memory::InMemoryBackend;
