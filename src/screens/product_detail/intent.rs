use crate::domain::{Product, ProductId, Review};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProductDetailIntent {
    /// Screen opened (or navigated to another product). Kicks off the
    /// product and review loads as independent operations.
    Load(ProductId),
    ProductLoaded(Product),
    ProductLoadFailed(String),
    ReviewsLoaded(Vec<Review>),
    ReviewsLoadFailed(String),
    RatingChanged(u8),
    BodyChanged(String),
    /// User tapped submit. Validation happens in the reducer; the
    /// backend call only goes out if the form passed.
    SubmitReview,
    ReviewSubmitted(Review),
    ReviewSubmitFailed(String),
}

impl Intent for ProductDetailIntent {}
