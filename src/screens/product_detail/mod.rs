//! Product detail: the product document and its reviews load
//! independently into disjoint state fields, plus review submission
//! with local validation.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::ProductDetailController;
pub use intent::ProductDetailIntent;
pub use reducer::ProductDetailReducer;
pub use state::ProductDetailState;
