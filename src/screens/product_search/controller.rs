use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::backend::ports::ProductRepository;
use crate::config::AppConfig;
use crate::debounce::{DebounceToken, Debouncer};
use crate::mvi::Reducer;
use crate::screens::product_search::intent::ProductSearchIntent;
use crate::screens::product_search::reducer::ProductSearchReducer;
use crate::screens::product_search::state::ProductSearchState;
use crate::store::StateStore;

/// Controller for the customer search screen.
///
/// `QueryChanged` funnels into the debouncer; only once the quiescence
/// window elapses does a backend search go out, and a newer query
/// abandons a pending or in-flight one. Stale completions are discarded
/// under the store lock via the debounce token.
pub struct ProductSearchController {
    store: StateStore<ProductSearchState>,
    products: Arc<dyn ProductRepository>,
    debounce: Debouncer,
    result_limit: usize,
}

impl ProductSearchController {
    pub fn new(products: Arc<dyn ProductRepository>, config: &AppConfig) -> Arc<Self> {
        Arc::new(Self {
            store: StateStore::default(),
            products,
            debounce: Debouncer::new(Duration::from_millis(config.search.debounce_ms)),
            result_limit: config.search.result_limit,
        })
    }

    pub fn state(&self) -> ProductSearchState {
        self.store.get()
    }

    pub fn watch(&self) -> watch::Receiver<ProductSearchState> {
        self.store.watch()
    }

    pub fn dispatch(self: &Arc<Self>, intent: ProductSearchIntent) {
        match intent {
            ProductSearchIntent::QueryChanged(query) => {
                self.store
                    .reduce::<ProductSearchReducer>(ProductSearchIntent::QueryChanged(
                        query.clone(),
                    ));
                if query.trim().is_empty() {
                    self.debounce.cancel();
                    self.store
                        .reduce::<ProductSearchReducer>(ProductSearchIntent::Cleared);
                } else {
                    self.schedule_search(query);
                }
            }
            other => self.store.reduce::<ProductSearchReducer>(other),
        }
    }

    /// Cancel the pending search; call on screen teardown.
    pub fn close(&self) {
        self.debounce.cancel();
    }

    fn schedule_search(self: &Arc<Self>, query: String) {
        let weak = Arc::downgrade(self);
        self.debounce.schedule(move |token| async move {
            let Some(this) = weak.upgrade() else {
                return;
            };
            this.apply_guarded(token, ProductSearchIntent::SearchStarted);
            let outcome = this.products.search_active(&query, this.result_limit).await;
            tracing::debug!(query = %query, ok = outcome.is_ok(), "search completed");
            let intent = match outcome {
                Ok(results) => ProductSearchIntent::SearchSucceeded(results),
                Err(err) => ProductSearchIntent::SearchFailed(err.user_message()),
            };
            this.apply_guarded(token, intent);
        });
    }

    /// Commit `intent` only if `token` still belongs to the latest
    /// scheduled search. The check runs under the store lock, so a
    /// superseded run that raced past its abort cannot overwrite newer
    /// state.
    fn apply_guarded(self: &Arc<Self>, token: DebounceToken, intent: ProductSearchIntent) {
        let this = Arc::clone(self);
        self.store.update(move |state| {
            if this.debounce.is_current(token) {
                ProductSearchReducer::reduce(state, intent)
            } else {
                tracing::warn!("discarding completion of superseded search");
                state
            }
        });
    }
}
