//! Shared test utilities: scripted fake collaborators and entity builders.

#![allow(dead_code, unused_imports)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use parking_lot::Mutex;

use souk::backend::ports::{
    AuthGateway, BlobStore, ProductRepository, ReviewRepository, SellerRepository,
};
use souk::backend::{BackendError, BackendResult};
use souk::domain::{
    Category, ModerationDecision, NewProduct, NewReview, Product, ProductId, ProductStatus,
    Review, ReviewId, SellerProfile, SellerStatus, UserId,
};
use souk::subscription::Subscription;

// -- entity builders ----------------------------------------------------------

pub fn product(title: &str, category: Category) -> Product {
    Product {
        id: ProductId::generate(),
        seller_id: UserId::generate(),
        title: title.to_string(),
        description: String::new(),
        price_cents: 1000,
        category,
        status: ProductStatus::Active,
        image_url: None,
        created_at: SystemTime::UNIX_EPOCH,
    }
}

pub fn seller(shop_name: &str, status: SellerStatus) -> SellerProfile {
    SellerProfile {
        id: UserId::generate(),
        shop_name: shop_name.to_string(),
        email: format!("{shop_name}@example.com"),
        status,
        moderation_notes: String::new(),
        applied_at: SystemTime::UNIX_EPOCH,
    }
}

pub fn review(product_id: ProductId, rating: u8, body: &str) -> Review {
    Review {
        id: ReviewId::generate(),
        product_id,
        author_id: UserId::generate(),
        rating,
        body: body.to_string(),
        created_at: SystemTime::UNIX_EPOCH,
    }
}

/// Let spawned controller tasks make progress on the paused runtime.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

// -- fake product repository --------------------------------------------------

#[derive(Clone)]
pub struct ScriptedSearch {
    pub latency: Duration,
    pub outcome: BackendResult<Vec<Product>>,
}

/// Product collaborator with per-query scripted latency and outcomes,
/// recording every call.
pub struct FakeProductRepo {
    pub searches: Mutex<Vec<String>>,
    search_scripts: Mutex<HashMap<String, ScriptedSearch>>,
    fetch_script: Mutex<Option<(Duration, BackendResult<Product>)>>,
    observe_scripts: Mutex<HashMap<ProductStatus, Vec<(Duration, Vec<Product>)>>>,
    pub observed: Mutex<Vec<ProductStatus>>,
    pub created: Mutex<Vec<NewProduct>>,
    pub create_error: Mutex<Option<BackendError>>,
}

impl FakeProductRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            searches: Mutex::new(Vec::new()),
            search_scripts: Mutex::new(HashMap::new()),
            fetch_script: Mutex::new(None),
            observe_scripts: Mutex::new(HashMap::new()),
            observed: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            create_error: Mutex::new(None),
        })
    }

    pub fn script_search(
        &self,
        query: &str,
        latency: Duration,
        outcome: BackendResult<Vec<Product>>,
    ) {
        self.search_scripts
            .lock()
            .insert(query.to_string(), ScriptedSearch { latency, outcome });
    }

    pub fn script_fetch(&self, latency: Duration, outcome: BackendResult<Product>) {
        *self.fetch_script.lock() = Some((latency, outcome));
    }

    pub fn script_observe(&self, status: ProductStatus, emissions: Vec<(Duration, Vec<Product>)>) {
        self.observe_scripts.lock().insert(status, emissions);
    }
}

#[async_trait]
impl ProductRepository for FakeProductRepo {
    async fn fetch_one(&self, id: ProductId) -> BackendResult<Product> {
        let script = self.fetch_script.lock().clone();
        match script {
            Some((latency, outcome)) => {
                tokio::time::sleep(latency).await;
                outcome
            }
            None => Err(BackendError::NotFound { id: id.to_string() }),
        }
    }

    async fn search_active(&self, query: &str, _limit: usize) -> BackendResult<Vec<Product>> {
        self.searches.lock().push(query.to_string());
        let script = self.search_scripts.lock().get(query).cloned();
        match script {
            Some(script) => {
                tokio::time::sleep(script.latency).await;
                script.outcome
            }
            None => Ok(Vec::new()),
        }
    }

    async fn search_all(&self, query: &str, limit: usize) -> BackendResult<Vec<Product>> {
        self.search_active(query, limit).await
    }

    fn observe_by_seller(
        &self,
        _seller: UserId,
        status: ProductStatus,
    ) -> Subscription<Vec<Product>> {
        self.observed.lock().push(status);
        let emissions = self
            .observe_scripts
            .lock()
            .get(&status)
            .cloned()
            .unwrap_or_default();
        let (tx, sub) = Subscription::new();
        tokio::spawn(async move {
            for (delay, batch) in emissions {
                tokio::time::sleep(delay).await;
                if tx.send(batch).await.is_err() {
                    return;
                }
            }
        });
        sub
    }

    async fn create(&self, draft: NewProduct) -> BackendResult<Product> {
        if let Some(err) = self.create_error.lock().clone() {
            return Err(err);
        }
        let product = draft
            .clone()
            .into_product(ProductStatus::PendingReview, SystemTime::UNIX_EPOCH);
        self.created.lock().push(draft);
        Ok(product)
    }

    async fn set_status(
        &self,
        _id: ProductId,
        _status: ProductStatus,
        _notes: &str,
    ) -> BackendResult<()> {
        Ok(())
    }
}

// -- fake seller repository ---------------------------------------------------

pub struct FakeSellerRepo {
    observe_scripts: Mutex<HashMap<SellerStatus, Vec<(Duration, Vec<SellerProfile>)>>>,
    pub observed: Mutex<Vec<SellerStatus>>,
    pub decisions: Mutex<Vec<(UserId, ModerationDecision, String)>>,
    pub decision_latency: Mutex<Duration>,
    pub decision_error: Mutex<Option<BackendError>>,
}

impl FakeSellerRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            observe_scripts: Mutex::new(HashMap::new()),
            observed: Mutex::new(Vec::new()),
            decisions: Mutex::new(Vec::new()),
            decision_latency: Mutex::new(Duration::ZERO),
            decision_error: Mutex::new(None),
        })
    }

    pub fn script_observe(
        &self,
        status: SellerStatus,
        emissions: Vec<(Duration, Vec<SellerProfile>)>,
    ) {
        self.observe_scripts.lock().insert(status, emissions);
    }
}

#[async_trait]
impl SellerRepository for FakeSellerRepo {
    fn observe_by_status(&self, status: SellerStatus) -> Subscription<Vec<SellerProfile>> {
        self.observed.lock().push(status);
        let emissions = self
            .observe_scripts
            .lock()
            .get(&status)
            .cloned()
            .unwrap_or_default();
        let (tx, sub) = Subscription::new();
        tokio::spawn(async move {
            for (delay, batch) in emissions {
                tokio::time::sleep(delay).await;
                if tx.send(batch).await.is_err() {
                    return;
                }
            }
        });
        sub
    }

    async fn apply_decision(
        &self,
        id: UserId,
        decision: ModerationDecision,
        notes: &str,
    ) -> BackendResult<()> {
        let latency = *self.decision_latency.lock();
        tokio::time::sleep(latency).await;
        if let Some(err) = self.decision_error.lock().clone() {
            return Err(err);
        }
        self.decisions.lock().push((id, decision, notes.to_string()));
        Ok(())
    }
}

// -- fake review repository ---------------------------------------------------

pub struct FakeReviewRepo {
    pub fetch_latency: Mutex<Duration>,
    pub fetch_outcome: Mutex<BackendResult<Vec<Review>>>,
    pub submitted: Mutex<Vec<NewReview>>,
    pub submit_error: Mutex<Option<BackendError>>,
}

impl FakeReviewRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            fetch_latency: Mutex::new(Duration::ZERO),
            fetch_outcome: Mutex::new(Ok(Vec::new())),
            submitted: Mutex::new(Vec::new()),
            submit_error: Mutex::new(None),
        })
    }
}

#[async_trait]
impl ReviewRepository for FakeReviewRepo {
    async fn fetch_for_product(&self, _product: ProductId) -> BackendResult<Vec<Review>> {
        let latency = *self.fetch_latency.lock();
        tokio::time::sleep(latency).await;
        self.fetch_outcome.lock().clone()
    }

    async fn submit(&self, draft: NewReview) -> BackendResult<Review> {
        if let Some(err) = self.submit_error.lock().clone() {
            return Err(err);
        }
        let review = Review {
            id: ReviewId::generate(),
            product_id: draft.product_id,
            author_id: draft.author_id,
            rating: draft.rating,
            body: draft.body.clone(),
            created_at: SystemTime::UNIX_EPOCH,
        };
        self.submitted.lock().push(draft);
        Ok(review)
    }
}

// -- fake blob store and auth -------------------------------------------------

pub struct FakeBlobs {
    pub uploads: Mutex<Vec<(String, String)>>,
    pub fail: Mutex<bool>,
}

impl FakeBlobs {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            uploads: Mutex::new(Vec::new()),
            fail: Mutex::new(false),
        })
    }
}

#[async_trait]
impl BlobStore for FakeBlobs {
    async fn upload(&self, local_ref: &str, dest_key: &str) -> BackendResult<String> {
        if *self.fail.lock() {
            return Err(BackendError::UploadFailed {
                key: dest_key.to_string(),
                reason: "storage offline".to_string(),
            });
        }
        self.uploads
            .lock()
            .push((local_ref.to_string(), dest_key.to_string()));
        Ok(format!("blob://{dest_key}"))
    }
}

pub struct FakeAuth {
    user: Mutex<Option<UserId>>,
}

impl FakeAuth {
    pub fn signed_in(user: UserId) -> Arc<Self> {
        Arc::new(Self {
            user: Mutex::new(Some(user)),
        })
    }

    pub fn signed_out() -> Arc<Self> {
        Arc::new(Self {
            user: Mutex::new(None),
        })
    }
}

impl AuthGateway for FakeAuth {
    fn current_user(&self) -> Option<UserId> {
        *self.user.lock()
    }
}
