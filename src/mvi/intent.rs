//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (taps, text input, selection)
/// - System events (backend responses, debounce timers, stream emissions)
/// - Lifecycle triggers (screen opened, filter changed)
///
/// Intents are pure data: dispatching one mutates nothing by itself.
/// Only a reducer interprets them.
pub trait Intent: Send + 'static {}
