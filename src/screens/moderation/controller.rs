use std::sync::Arc;

use tokio::sync::watch;

use crate::backend::ports::SellerRepository;
use crate::domain::SellerStatus;
use crate::mvi::Reducer;
use crate::screens::moderation::intent::ModerationIntent;
use crate::screens::moderation::reducer::ModerationReducer;
use crate::screens::moderation::state::{ModerationDialog, ModerationState};
use crate::store::StateStore;
use crate::subscription::{StreamSlot, StreamToken};

/// Controller for the admin seller-moderation screen.
///
/// The list is fed exclusively by the live subscription; a confirmed
/// decision issues one write and waits for the subscription to reflect
/// it, so the screen never shows a state the backend might still
/// reject.
pub struct ModerationController {
    store: StateStore<ModerationState>,
    sellers: Arc<dyn SellerRepository>,
    stream: StreamSlot,
}

impl ModerationController {
    pub fn new(sellers: Arc<dyn SellerRepository>) -> Arc<Self> {
        Arc::new(Self {
            store: StateStore::default(),
            sellers,
            stream: StreamSlot::new(),
        })
    }

    /// Open the seller subscription with the current filter. Call once
    /// when the screen appears.
    pub fn start(self: &Arc<Self>) {
        self.resubscribe(self.store.get().status_filter);
    }

    pub fn state(&self) -> ModerationState {
        self.store.get()
    }

    pub fn watch(&self) -> watch::Receiver<ModerationState> {
        self.store.watch()
    }

    pub fn dispatch(self: &Arc<Self>, intent: ModerationIntent) {
        match intent {
            ModerationIntent::FilterChanged(status) => {
                self.store
                    .reduce::<ModerationReducer>(ModerationIntent::FilterChanged(status));
                self.resubscribe(status);
            }
            ModerationIntent::ConfirmDecision => self.confirm_decision(),
            other => self.store.reduce::<ModerationReducer>(other),
        }
    }

    /// Cancel the live subscription; call on screen teardown.
    pub fn close(&self) {
        self.stream.cancel();
    }

    fn resubscribe(self: &Arc<Self>, status: SellerStatus) {
        // Cancel first, then observe: the previous pump must be gone
        // before the new logical stream exists.
        let token = self.stream.supersede();
        tracing::debug!(?status, "subscribing to sellers");
        let mut subscription = self.sellers.observe_by_status(status);
        let weak = Arc::downgrade(self);
        let handle = tokio::spawn(async move {
            while let Some(batch) = subscription.recv().await {
                let Some(this) = weak.upgrade() else {
                    return;
                };
                this.apply_guarded(token, ModerationIntent::SellersUpdated(batch));
            }
        });
        self.stream.install(handle);
    }

    fn confirm_decision(self: &Arc<Self>) {
        let state = self.store.get();
        if state.submitting {
            tracing::warn!("decision already in flight, ignoring");
            return;
        }
        // Preconditions: a confirm dialog and a selected seller. The UI
        // cannot confirm without both, so these no-op with a log.
        let ModerationDialog::Confirm(decision) = state.dialog else {
            tracing::warn!("confirm with no decision dialog open, ignoring");
            return;
        };
        let Some(seller) = state.selected.as_ref() else {
            tracing::warn!("confirm with no seller selected, ignoring");
            return;
        };

        self.store
            .reduce::<ModerationReducer>(ModerationIntent::DecisionStarted);
        let seller_id = seller.id;
        let notes = state.notes.clone();
        let weak = Arc::downgrade(self);
        tokio::spawn(async move {
            let Some(this) = weak.upgrade() else {
                return;
            };
            let outcome = this.sellers.apply_decision(seller_id, decision, &notes).await;
            tracing::debug!(
                seller = %seller_id,
                decision = decision.label(),
                ok = outcome.is_ok(),
                "decision write completed"
            );
            let intent = match outcome {
                Ok(()) => ModerationIntent::DecisionSucceeded,
                Err(err) => ModerationIntent::DecisionFailed(err.user_message()),
            };
            this.store.reduce::<ModerationReducer>(intent);
        });
    }

    /// Merge a stream emission only if its subscription is still the
    /// live one.
    fn apply_guarded(self: &Arc<Self>, token: StreamToken, intent: ModerationIntent) {
        let this = Arc::clone(self);
        self.store.update(move |state| {
            if this.stream.is_current(token) {
                ModerationReducer::reduce(state, intent)
            } else {
                tracing::warn!("discarding emission from superseded subscription");
                state
            }
        });
    }
}
