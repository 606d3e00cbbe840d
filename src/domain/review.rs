use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::ids::{ProductId, ReviewId, UserId};

/// A customer review as stored in the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub author_id: UserId,
    /// 1..=5 stars; validated before submission.
    pub rating: u8,
    pub body: String,
    pub created_at: SystemTime,
}

/// Payload for submitting a review.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub product_id: ProductId,
    pub author_id: UserId,
    pub rating: u8,
    pub body: String,
}
