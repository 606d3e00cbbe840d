//! In-memory backend: a document mirror keyed by id, with live
//! filtered streams.
//!
//! This is the development and test stand-in for the hosted document
//! database, object storage, and auth service. Watchers are plain
//! channel senders stored next to the documents; every write re-runs
//! each watcher's filter and pushes the full matching set, which is the
//! same emit-on-every-change contract the hosted SDK provides.

use std::collections::HashMap;
use std::time::SystemTime;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::ports::{
    AuthGateway, BlobStore, ProductRepository, ReviewRepository, SellerRepository,
};
use crate::backend::search;
use crate::domain::{
    ModerationDecision, NewProduct, NewReview, Product, ProductId, ProductStatus, Review,
    ReviewId, SellerProfile, SellerStatus, UserId,
};
use crate::subscription::Subscription;

/// Audit entry for a product status write.
#[derive(Debug, Clone)]
pub struct StatusLogEntry {
    pub timestamp: SystemTime,
    pub product: ProductId,
    pub old_status: ProductStatus,
    pub new_status: ProductStatus,
    pub notes: String,
}

struct ProductWatcher {
    seller: UserId,
    status: ProductStatus,
    tx: mpsc::Sender<Vec<Product>>,
}

struct SellerWatcher {
    status: SellerStatus,
    tx: mpsc::Sender<Vec<SellerProfile>>,
}

#[derive(Default)]
struct Docs {
    products: HashMap<ProductId, Product>,
    sellers: HashMap<UserId, SellerProfile>,
    reviews: HashMap<ReviewId, Review>,
    blobs: HashMap<String, String>,
    status_log: Vec<StatusLogEntry>,
    product_watchers: Vec<ProductWatcher>,
    seller_watchers: Vec<SellerWatcher>,
}

pub struct InMemoryBackend {
    docs: RwLock<Docs>,
    session: Mutex<Option<UserId>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(Docs::default()),
            session: Mutex::new(None),
        }
    }

    pub fn sign_in(&self, user: UserId) {
        *self.session.lock() = Some(user);
    }

    pub fn sign_out(&self) {
        *self.session.lock() = None;
    }

    /// Insert a product document directly (seed data).
    pub fn seed_product(&self, product: Product) {
        let mut docs = self.docs.write();
        docs.products.insert(product.id, product);
        notify_product_watchers(&mut docs);
    }

    /// Insert a seller document directly (seed data).
    pub fn seed_seller(&self, seller: SellerProfile) {
        let mut docs = self.docs.write();
        docs.sellers.insert(seller.id, seller);
        notify_seller_watchers(&mut docs);
    }

    /// Insert a review document directly (seed data).
    pub fn seed_review(&self, review: Review) {
        self.docs.write().reviews.insert(review.id, review);
    }

    /// Audit log of product status writes, oldest first.
    pub fn status_log(&self) -> Vec<StatusLogEntry> {
        self.docs.read().status_log.clone()
    }

    fn sorted_products(&self, filter: impl Fn(&Product) -> bool) -> Vec<Product> {
        let docs = self.docs.read();
        let mut items: Vec<Product> = docs.products.values().filter(|p| filter(p)).cloned().collect();
        items.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        items
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn product_snapshot(
    products: &HashMap<ProductId, Product>,
    seller: UserId,
    status: ProductStatus,
) -> Vec<Product> {
    let mut items: Vec<Product> = products
        .values()
        .filter(|p| p.seller_id == seller && p.status == status)
        .cloned()
        .collect();
    items.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
    items
}

fn seller_snapshot(
    sellers: &HashMap<UserId, SellerProfile>,
    status: SellerStatus,
) -> Vec<SellerProfile> {
    let mut items: Vec<SellerProfile> = sellers
        .values()
        .filter(|s| s.status == status)
        .cloned()
        .collect();
    items.sort_by(|a, b| a.shop_name.cmp(&b.shop_name).then(a.id.cmp(&b.id)));
    items
}

fn notify_product_watchers(docs: &mut Docs) {
    let Docs {
        products,
        product_watchers,
        ..
    } = docs;
    product_watchers.retain(|w| {
        let snapshot = product_snapshot(products, w.seller, w.status);
        match w.tx.try_send(snapshot) {
            Err(mpsc::error::TrySendError::Closed(_)) => false,
            // A full buffer drops this emission but keeps the watcher;
            // the next write re-sends the full matching set anyway.
            _ => true,
        }
    });
}

fn notify_seller_watchers(docs: &mut Docs) {
    let Docs {
        sellers,
        seller_watchers,
        ..
    } = docs;
    seller_watchers.retain(|w| {
        let snapshot = seller_snapshot(sellers, w.status);
        match w.tx.try_send(snapshot) {
            Err(mpsc::error::TrySendError::Closed(_)) => false,
            _ => true,
        }
    });
}

#[async_trait]
impl ProductRepository for InMemoryBackend {
    async fn fetch_one(&self, id: ProductId) -> BackendResult<Product> {
        self.docs
            .read()
            .products
            .get(&id)
            .cloned()
            .ok_or(BackendError::NotFound { id: id.to_string() })
    }

    async fn search_active(&self, query: &str, limit: usize) -> BackendResult<Vec<Product>> {
        let candidates = self.sorted_products(|p| p.status == ProductStatus::Active);
        Ok(search::run(query, candidates.iter(), limit))
    }

    async fn search_all(&self, query: &str, limit: usize) -> BackendResult<Vec<Product>> {
        let candidates = self.sorted_products(|_| true);
        Ok(search::run(query, candidates.iter(), limit))
    }

    fn observe_by_seller(
        &self,
        seller: UserId,
        status: ProductStatus,
    ) -> Subscription<Vec<Product>> {
        let (tx, sub) = Subscription::new();
        let mut docs = self.docs.write();
        let _ = tx.try_send(product_snapshot(&docs.products, seller, status));
        docs.product_watchers.push(ProductWatcher { seller, status, tx });
        sub
    }

    async fn create(&self, draft: NewProduct) -> BackendResult<Product> {
        let mut docs = self.docs.write();
        if docs.products.contains_key(&draft.id) {
            return Err(BackendError::WriteRejected {
                reason: format!("product '{}' already exists", draft.id),
            });
        }
        let product = draft.into_product(ProductStatus::PendingReview, SystemTime::now());
        docs.products.insert(product.id, product.clone());
        notify_product_watchers(&mut docs);
        Ok(product)
    }

    async fn set_status(
        &self,
        id: ProductId,
        status: ProductStatus,
        notes: &str,
    ) -> BackendResult<()> {
        let mut docs = self.docs.write();
        let old_status = match docs.products.get_mut(&id) {
            Some(product) => {
                let old = product.status;
                product.status = status;
                old
            }
            None => return Err(BackendError::NotFound { id: id.to_string() }),
        };
        docs.status_log.push(StatusLogEntry {
            timestamp: SystemTime::now(),
            product: id,
            old_status,
            new_status: status,
            notes: notes.to_string(),
        });
        notify_product_watchers(&mut docs);
        Ok(())
    }
}

#[async_trait]
impl SellerRepository for InMemoryBackend {
    fn observe_by_status(&self, status: SellerStatus) -> Subscription<Vec<SellerProfile>> {
        let (tx, sub) = Subscription::new();
        let mut docs = self.docs.write();
        let _ = tx.try_send(seller_snapshot(&docs.sellers, status));
        docs.seller_watchers.push(SellerWatcher { status, tx });
        sub
    }

    async fn apply_decision(
        &self,
        id: UserId,
        decision: ModerationDecision,
        notes: &str,
    ) -> BackendResult<()> {
        let mut docs = self.docs.write();
        match docs.sellers.get_mut(&id) {
            Some(seller) => {
                seller.status = decision.resulting_status();
                seller.moderation_notes = notes.to_string();
            }
            None => return Err(BackendError::NotFound { id: id.to_string() }),
        }
        notify_seller_watchers(&mut docs);
        Ok(())
    }
}

#[async_trait]
impl ReviewRepository for InMemoryBackend {
    async fn fetch_for_product(&self, product: ProductId) -> BackendResult<Vec<Review>> {
        let docs = self.docs.read();
        let mut items: Vec<Review> = docs
            .reviews
            .values()
            .filter(|r| r.product_id == product)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn submit(&self, draft: NewReview) -> BackendResult<Review> {
        let review = Review {
            id: ReviewId::generate(),
            product_id: draft.product_id,
            author_id: draft.author_id,
            rating: draft.rating,
            body: draft.body,
            created_at: SystemTime::now(),
        };
        self.docs.write().reviews.insert(review.id, review.clone());
        Ok(review)
    }
}

#[async_trait]
impl BlobStore for InMemoryBackend {
    async fn upload(&self, local_ref: &str, dest_key: &str) -> BackendResult<String> {
        if local_ref.is_empty() {
            return Err(BackendError::UploadFailed {
                key: dest_key.to_string(),
                reason: "empty local reference".to_string(),
            });
        }
        self.docs
            .write()
            .blobs
            .insert(dest_key.to_string(), local_ref.to_string());
        Ok(format!("mem://{dest_key}"))
    }
}

impl AuthGateway for InMemoryBackend {
    fn current_user(&self) -> Option<UserId> {
        *self.session.lock()
    }
}
