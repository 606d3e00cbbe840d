//! Seller listing management: a live, status-filtered subscription to
//! the seller's own products plus a create-listing form with image
//! upload.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::SellerProductsController;
pub use intent::SellerProductsIntent;
pub use reducer::SellerProductsReducer;
pub use state::{ProductForm, SellerProductsState};
