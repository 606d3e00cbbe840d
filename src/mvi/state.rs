//! Base trait for screen state in MVI architecture.

/// Marker trait for screen state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the screen)
/// - Comparable (PartialEq for detecting changes)
/// - Fully constructible with defaults (no partial state is observable)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
