use std::sync::Arc;

use tokio::sync::watch;

use crate::backend::ports::{AuthGateway, BlobStore, ProductRepository};
use crate::domain::ProductStatus;
use crate::mvi::Reducer;
use crate::screens::seller_products::intent::SellerProductsIntent;
use crate::screens::seller_products::reducer::SellerProductsReducer;
use crate::screens::seller_products::state::SellerProductsState;
use crate::store::StateStore;
use crate::subscription::{StreamSlot, StreamToken};

/// Controller for the seller's own-listings screen.
///
/// One live subscription (seller id + status filter) feeds the list;
/// changing the filter cancels it and relaunches with the new
/// criterion, so an emission from the old filter can never overwrite
/// the new list. The create-listing flow validates locally, uploads the
/// picked image keyed by the minted product id, then writes the
/// document.
pub struct SellerProductsController {
    store: StateStore<SellerProductsState>,
    products: Arc<dyn ProductRepository>,
    blobs: Arc<dyn BlobStore>,
    auth: Arc<dyn AuthGateway>,
    stream: StreamSlot,
}

impl SellerProductsController {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        blobs: Arc<dyn BlobStore>,
        auth: Arc<dyn AuthGateway>,
    ) -> Arc<Self> {
        Arc::new(Self {
            store: StateStore::default(),
            products,
            blobs,
            auth,
            stream: StreamSlot::new(),
        })
    }

    /// Open the listings subscription with the current filter. Call
    /// once when the screen appears.
    pub fn start(self: &Arc<Self>) {
        self.resubscribe(self.store.get().status_filter);
    }

    pub fn state(&self) -> SellerProductsState {
        self.store.get()
    }

    pub fn watch(&self) -> watch::Receiver<SellerProductsState> {
        self.store.watch()
    }

    pub fn dispatch(self: &Arc<Self>, intent: SellerProductsIntent) {
        match intent {
            SellerProductsIntent::StatusFilterChanged(status) => {
                self.store.reduce::<SellerProductsReducer>(
                    SellerProductsIntent::StatusFilterChanged(status),
                );
                self.resubscribe(status);
            }
            SellerProductsIntent::Submit => self.save(),
            other => self.store.reduce::<SellerProductsReducer>(other),
        }
    }

    /// Cancel the live subscription; call on screen teardown.
    pub fn close(&self) {
        self.stream.cancel();
    }

    fn resubscribe(self: &Arc<Self>, status: ProductStatus) {
        let Some(seller) = self.auth.current_user() else {
            tracing::warn!("listings subscription with no signed-in user, ignoring");
            return;
        };
        // Cancel first, then observe: the previous pump must be gone
        // before the new logical stream exists.
        let token = self.stream.supersede();
        tracing::debug!(?status, "subscribing to own listings");
        let mut subscription = self.products.observe_by_seller(seller, status);
        let weak = Arc::downgrade(self);
        let handle = tokio::spawn(async move {
            while let Some(batch) = subscription.recv().await {
                let Some(this) = weak.upgrade() else {
                    return;
                };
                this.apply_guarded(token, SellerProductsIntent::ProductsUpdated(batch));
            }
        });
        self.stream.install(handle);
    }

    fn save(self: &Arc<Self>) {
        let state = self.store.get();
        if state.saving {
            tracing::warn!("save already in flight, ignoring");
            return;
        }
        let Some(seller) = self.auth.current_user() else {
            tracing::warn!("save with no signed-in user, ignoring");
            return;
        };
        let mut draft = match state.form.validate(seller) {
            Ok(draft) => draft,
            Err(message) => {
                self.store
                    .reduce::<SellerProductsReducer>(SellerProductsIntent::FormRejected(message));
                return;
            }
        };
        self.store
            .reduce::<SellerProductsReducer>(SellerProductsIntent::SaveStarted);

        let image_ref = state.form.image_ref.clone();
        let weak = Arc::downgrade(self);
        tokio::spawn(async move {
            let Some(this) = weak.upgrade() else {
                return;
            };
            if let Some(local_ref) = image_ref {
                let dest_key = format!("products/{}.jpg", draft.id);
                match this.blobs.upload(&local_ref, &dest_key).await {
                    Ok(url) => draft.image_url = Some(url),
                    Err(err) => {
                        this.store.reduce::<SellerProductsReducer>(
                            SellerProductsIntent::SaveFailed(err.user_message()),
                        );
                        return;
                    }
                }
            }
            let intent = match this.products.create(draft).await {
                Ok(_) => SellerProductsIntent::SaveSucceeded,
                Err(err) => SellerProductsIntent::SaveFailed(err.user_message()),
            };
            this.store.reduce::<SellerProductsReducer>(intent);
        });
    }

    /// Merge a stream emission only if its subscription is still the
    /// live one.
    fn apply_guarded(self: &Arc<Self>, token: StreamToken, intent: SellerProductsIntent) {
        let this = Arc::clone(self);
        self.store.update(move |state| {
            if this.stream.is_current(token) {
                SellerProductsReducer::reduce(state, intent)
            } else {
                tracing::warn!("discarding emission from superseded subscription");
                state
            }
        });
    }
}
