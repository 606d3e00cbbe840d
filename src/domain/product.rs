use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::ids::{ProductId, UserId};

/// Listing lifecycle on the marketplace.
///
/// New listings start in `PendingReview`; only `Active` listings are
/// visible to customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Draft,
    PendingReview,
    #[default]
    Active,
    Rejected,
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Beauty,
    Sports,
    #[default]
    Other,
}

/// A product document as stored in the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub seller_id: UserId,
    pub title: String,
    pub description: String,
    /// Price in minor units; avoids float arithmetic on money.
    pub price_cents: u64,
    pub category: Category,
    pub status: ProductStatus,
    pub image_url: Option<String>,
    pub created_at: SystemTime,
}

/// Payload for creating a listing. The id is minted client-side so the
/// image upload can be keyed by it before the document write.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: ProductId,
    pub seller_id: UserId,
    pub title: String,
    pub description: String,
    pub price_cents: u64,
    pub category: Category,
    pub image_url: Option<String>,
}

impl NewProduct {
    /// Materialize the document the backend will store.
    pub fn into_product(self, status: ProductStatus, created_at: SystemTime) -> Product {
        Product {
            id: self.id,
            seller_id: self.seller_id,
            title: self.title,
            description: self.description,
            price_cents: self.price_cents,
            category: self.category,
            status,
            image_url: self.image_url,
            created_at,
        }
    }
}
