mod common;

use common::seller;
use souk::domain::{ModerationDecision, SellerStatus};
use souk::mvi::Reducer;
use souk::screens::moderation::{
    ModerationDialog, ModerationIntent, ModerationReducer, ModerationState,
};

fn reduce(state: ModerationState, intent: ModerationIntent) -> ModerationState {
    ModerationReducer::reduce(state, intent)
}

fn with_selection() -> ModerationState {
    reduce(
        ModerationState::default(),
        ModerationIntent::Select(seller("lamp-shop", SellerStatus::Pending)),
    )
}

#[test]
fn select_opens_the_detail_dialog() {
    let state = with_selection();
    assert_eq!(state.dialog, ModerationDialog::Detail);
    assert_eq!(
        state.selected.as_ref().map(|s| s.shop_name.as_str()),
        Some("lamp-shop")
    );
    assert!(state.notes.is_empty());
}

#[test]
fn at_most_one_dialog_is_ever_visible() {
    let state = with_selection();
    let state = reduce(state, ModerationIntent::ShowSuspendDialog);
    assert_eq!(
        state.dialog,
        ModerationDialog::Confirm(ModerationDecision::Suspend)
    );

    // Requesting another confirmation replaces the open dialog rather
    // than stacking a second one.
    let state = reduce(state, ModerationIntent::ShowApproveDialog);
    assert_eq!(
        state.dialog,
        ModerationDialog::Confirm(ModerationDecision::Approve)
    );
}

#[test]
fn confirm_dialogs_require_a_selection() {
    let state = reduce(ModerationState::default(), ModerationIntent::ShowApproveDialog);
    assert_eq!(state.dialog, ModerationDialog::Hidden);
    let state = reduce(state, ModerationIntent::ShowRejectDialog);
    assert_eq!(state.dialog, ModerationDialog::Hidden);
}

#[test]
fn dismiss_clears_dialog_selection_and_notes() {
    let state = with_selection();
    let state = reduce(state, ModerationIntent::NotesChanged("hmm".to_string()));
    let state = reduce(state, ModerationIntent::DismissDialog);
    assert_eq!(state.dialog, ModerationDialog::Hidden);
    assert!(state.selected.is_none());
    assert!(state.notes.is_empty());
}

#[test]
fn filter_change_drops_the_stale_list() {
    let state = reduce(
        ModerationState::default(),
        ModerationIntent::SellersUpdated(vec![seller("a", SellerStatus::Pending)]),
    );
    let state = reduce(
        state,
        ModerationIntent::FilterChanged(SellerStatus::Approved),
    );
    assert_eq!(state.status_filter, SellerStatus::Approved);
    assert!(state.sellers.is_empty());
}

#[test]
fn success_resets_the_whole_decision_flow() {
    let state = with_selection();
    let state = reduce(state, ModerationIntent::ShowApproveDialog);
    let state = reduce(state, ModerationIntent::NotesChanged("ok".to_string()));
    let state = reduce(state, ModerationIntent::DecisionStarted);
    assert!(state.submitting);

    let state = reduce(state, ModerationIntent::DecisionSucceeded);
    assert!(!state.submitting);
    assert_eq!(state.dialog, ModerationDialog::Hidden);
    assert!(state.selected.is_none());
    assert!(state.notes.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn failure_keeps_the_selection_and_dialog_for_retry() {
    let state = with_selection();
    let state = reduce(state, ModerationIntent::ShowRejectDialog);
    let state = reduce(state, ModerationIntent::DecisionStarted);
    let state = reduce(
        state,
        ModerationIntent::DecisionFailed("network down".to_string()),
    );
    assert!(!state.submitting);
    assert_eq!(state.error.as_deref(), Some("network down"));
    assert!(state.selected.is_some());
    assert_eq!(
        state.dialog,
        ModerationDialog::Confirm(ModerationDecision::Reject)
    );
}
