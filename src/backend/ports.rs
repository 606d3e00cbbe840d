//! Collaborator ports: the only interface controllers have to the
//! outside world.
//!
//! Each port covers one document collection (or service) with the same
//! contract everywhere: fetch returns `Result<_, BackendError>`,
//! `observe_*` returns a cancellable [`Subscription`] that emits the
//! full matching set on every backend-side change, and writes return
//! `Result` with the failure surfaced to the user. Ports are stateless
//! from the controller's point of view; controllers share them via
//! `Arc<dyn ...>`.

use async_trait::async_trait;

use crate::backend::error::BackendResult;
use crate::domain::{
    ModerationDecision, NewProduct, NewReview, Product, ProductId, ProductStatus, Review,
    SellerProfile, SellerStatus, UserId,
};
use crate::subscription::Subscription;

/// Product collection access.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn fetch_one(&self, id: ProductId) -> BackendResult<Product>;

    /// Token-prefix search over active listings (customer surface).
    async fn search_active(&self, query: &str, limit: usize) -> BackendResult<Vec<Product>>;

    /// Token-prefix search over all listings regardless of status
    /// (seller and admin surfaces).
    async fn search_all(&self, query: &str, limit: usize) -> BackendResult<Vec<Product>>;

    /// Live stream of one seller's listings with the given status.
    /// Emits the current matching set immediately, then again on every
    /// change.
    fn observe_by_seller(&self, seller: UserId, status: ProductStatus)
        -> Subscription<Vec<Product>>;

    async fn create(&self, draft: NewProduct) -> BackendResult<Product>;

    /// Moderation/status write keyed by product id.
    async fn set_status(
        &self,
        id: ProductId,
        status: ProductStatus,
        notes: &str,
    ) -> BackendResult<()>;
}

/// Seller account collection access.
#[async_trait]
pub trait SellerRepository: Send + Sync {
    /// Live stream of all sellers with the given status.
    fn observe_by_status(&self, status: SellerStatus) -> Subscription<Vec<SellerProfile>>;

    /// Apply a moderation decision, keyed by seller id plus free-text
    /// notes. The caller's live subscription reflects the change once
    /// the write propagates; no value is returned to merge locally.
    async fn apply_decision(
        &self,
        id: UserId,
        decision: ModerationDecision,
        notes: &str,
    ) -> BackendResult<()>;
}

/// Review collection access.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn fetch_for_product(&self, product: ProductId) -> BackendResult<Vec<Review>>;

    async fn submit(&self, draft: NewReview) -> BackendResult<Review>;
}

/// Object storage access.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload a local file reference under `dest_key`; returns the
    /// public URL of the stored object.
    async fn upload(&self, local_ref: &str, dest_key: &str) -> BackendResult<String>;
}

/// Session lookup. Synchronous: the SDK caches the signed-in user.
pub trait AuthGateway: Send + Sync {
    fn current_user(&self) -> Option<UserId>;
}
