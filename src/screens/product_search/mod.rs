//! Customer product search: debounced query plus a pure secondary
//! category filter over the cached result set.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::ProductSearchController;
pub use intent::ProductSearchIntent;
pub use reducer::ProductSearchReducer;
pub use state::ProductSearchState;
