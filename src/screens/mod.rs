//! Concrete screen controllers.
//!
//! Each screen is one instance of the same template: `state.rs` (the
//! immutable snapshot), `intent.rs` (the closed action set),
//! `reducer.rs` (the pure transition function), and `controller.rs`
//! (the owner that holds the store, interprets intents, and drives
//! backend collaborators).

pub mod moderation;
pub mod product_detail;
pub mod product_search;
pub mod seller_products;
