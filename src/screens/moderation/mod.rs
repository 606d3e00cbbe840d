//! Admin seller moderation: a live subscription to sellers in one
//! status, a detail modal for the selected application, and decision
//! writes (approve / reject / request-info / suspend).

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::ModerationController;
pub use intent::ModerationIntent;
pub use reducer::ModerationReducer;
pub use state::{ModerationDialog, ModerationState};
