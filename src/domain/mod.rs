//! Marketplace value objects.
//!
//! Entities are externally-owned snapshots fetched from or written to a
//! backend collaborator. Controllers treat them as opaque immutable
//! values to store in screen state, never as mutable shared objects.

mod ids;
mod product;
mod review;
mod seller;

pub use ids::{ProductId, ReviewId, UserId};
pub use product::{Category, NewProduct, Product, ProductStatus};
pub use review::{NewReview, Review};
pub use seller::{ModerationDecision, SellerProfile, SellerStatus};
