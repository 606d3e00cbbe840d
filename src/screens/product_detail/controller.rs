use std::sync::Arc;

use tokio::sync::watch;

use crate::backend::ports::{AuthGateway, ProductRepository, ReviewRepository};
use crate::domain::{NewReview, ProductId};
use crate::mvi::Reducer;
use crate::screens::product_detail::intent::ProductDetailIntent;
use crate::screens::product_detail::reducer::ProductDetailReducer;
use crate::screens::product_detail::state::ProductDetailState;
use crate::store::StateStore;
use crate::subscription::Generation;

/// Controller for the product detail screen.
///
/// The product fetch and the review fetch are separate operation
/// families merged into disjoint state fields; no ordering holds (or is
/// needed) between them. Navigating to another product bumps the load
/// generation so late completions for the previous product are
/// discarded.
pub struct ProductDetailController {
    store: StateStore<ProductDetailState>,
    products: Arc<dyn ProductRepository>,
    reviews: Arc<dyn ReviewRepository>,
    auth: Arc<dyn AuthGateway>,
    load_generation: Generation,
}

impl ProductDetailController {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        reviews: Arc<dyn ReviewRepository>,
        auth: Arc<dyn AuthGateway>,
    ) -> Arc<Self> {
        Arc::new(Self {
            store: StateStore::default(),
            products,
            reviews,
            auth,
            load_generation: Generation::new(),
        })
    }

    pub fn state(&self) -> ProductDetailState {
        self.store.get()
    }

    pub fn watch(&self) -> watch::Receiver<ProductDetailState> {
        self.store.watch()
    }

    pub fn dispatch(self: &Arc<Self>, intent: ProductDetailIntent) {
        match intent {
            ProductDetailIntent::Load(id) => {
                self.store
                    .reduce::<ProductDetailReducer>(ProductDetailIntent::Load(id));
                self.spawn_loads(id);
            }
            ProductDetailIntent::SubmitReview => self.submit_review(),
            other => self.store.reduce::<ProductDetailReducer>(other),
        }
    }

    fn spawn_loads(self: &Arc<Self>, id: ProductId) {
        let generation = self.load_generation.next();

        let weak = Arc::downgrade(self);
        tokio::spawn(async move {
            let Some(this) = weak.upgrade() else {
                return;
            };
            let intent = match this.products.fetch_one(id).await {
                Ok(product) => ProductDetailIntent::ProductLoaded(product),
                Err(err) => ProductDetailIntent::ProductLoadFailed(err.user_message()),
            };
            this.apply_guarded(generation, intent);
        });

        let weak = Arc::downgrade(self);
        tokio::spawn(async move {
            let Some(this) = weak.upgrade() else {
                return;
            };
            let intent = match this.reviews.fetch_for_product(id).await {
                Ok(reviews) => ProductDetailIntent::ReviewsLoaded(reviews),
                Err(err) => ProductDetailIntent::ReviewsLoadFailed(err.user_message()),
            };
            this.apply_guarded(generation, intent);
        });
    }

    fn submit_review(self: &Arc<Self>) {
        let state = self.store.get();
        if state.submitting_review {
            tracing::warn!("review submission already in flight, ignoring");
            return;
        }
        // Preconditions: a loaded product and a signed-in user. Neither
        // is reachable through the UI without both present, so these
        // no-op with a log instead of surfacing an error.
        let Some(product) = state.product.as_ref() else {
            tracing::warn!("submit review with no product loaded, ignoring");
            return;
        };
        let Some(author) = self.auth.current_user() else {
            tracing::warn!("submit review with no signed-in user, ignoring");
            return;
        };

        self.store
            .reduce::<ProductDetailReducer>(ProductDetailIntent::SubmitReview);
        let after = self.store.get();
        if !after.submitting_review {
            // Validation failed; the reducer already set review_error.
            return;
        }

        let draft = NewReview {
            product_id: product.id,
            author_id: author,
            rating: after.review_rating,
            body: after.review_body.clone(),
        };
        let weak = Arc::downgrade(self);
        tokio::spawn(async move {
            let Some(this) = weak.upgrade() else {
                return;
            };
            let intent = match this.reviews.submit(draft).await {
                Ok(review) => ProductDetailIntent::ReviewSubmitted(review),
                Err(err) => ProductDetailIntent::ReviewSubmitFailed(err.user_message()),
            };
            this.store.reduce::<ProductDetailReducer>(intent);
        });
    }

    /// Merge a load completion only if no newer `Load` superseded it.
    fn apply_guarded(self: &Arc<Self>, generation: u64, intent: ProductDetailIntent) {
        let this = Arc::clone(self);
        self.store.update(move |state| {
            if this.load_generation.is_current(generation) {
                ProductDetailReducer::reduce(state, intent)
            } else {
                tracing::warn!("discarding completion of superseded load");
                state
            }
        });
    }
}
