use crate::domain::{Product, Review};
use crate::mvi::UiState;

/// Everything the detail screen needs to render.
///
/// Product and reviews are independent operation families: each has its
/// own busy flag and error field, and neither load orders against the
/// other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDetailState {
    pub product: Option<Product>,
    pub reviews: Vec<Review>,
    pub loading_product: bool,
    pub loading_reviews: bool,
    pub product_error: Option<String>,
    pub reviews_error: Option<String>,
    /// Review form. `rating` 0 means not chosen yet.
    pub review_rating: u8,
    pub review_body: String,
    pub submitting_review: bool,
    pub review_error: Option<String>,
}

/// Local validation, run before any backend call.
pub fn validate_review(rating: u8, body: &str) -> Result<(), String> {
    if !(1..=5).contains(&rating) {
        return Err("Please choose a rating between 1 and 5".to_string());
    }
    if body.trim().is_empty() {
        return Err("Please write a few words about the product".to_string());
    }
    Ok(())
}

impl UiState for ProductDetailState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(validate_review(0, "fine").is_err());
        assert!(validate_review(6, "fine").is_err());
        assert!(validate_review(1, "fine").is_ok());
        assert!(validate_review(5, "fine").is_ok());
    }

    #[test]
    fn body_must_not_be_blank() {
        assert!(validate_review(4, "   ").is_err());
    }
}
