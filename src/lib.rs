//! souk — headless client core for a marketplace app.
//!
//! Every screen in the app is driven by the same unidirectional pattern:
//! an immutable [`mvi::UiState`] snapshot, a closed [`mvi::Intent`] set,
//! a pure [`mvi::Reducer`], and a per-screen controller that owns the
//! state, interprets intents, and talks to injected backend collaborators.
//!
//! Modules:
//! - **mvi**: the State / Intent / Reducer traits
//! - **store**: observable state container (single mutation primitive)
//! - **subscription**: cancellable backend streams + supersede slots
//! - **debounce**: quiescence-window scheduling for search-as-you-type
//! - **backend**: collaborator ports, errors, in-memory implementation
//! - **domain**: product / seller / review value objects
//! - **screens**: concrete controller instances, one per screen

pub mod backend;
pub mod config;
pub mod debounce;
pub mod domain;
pub mod mvi;
pub mod screens;
pub mod store;
pub mod subscription;
pub mod telemetry;
