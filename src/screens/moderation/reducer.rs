use crate::domain::ModerationDecision;
use crate::mvi::Reducer;
use crate::screens::moderation::intent::ModerationIntent;
use crate::screens::moderation::state::{ModerationDialog, ModerationState};

pub struct ModerationReducer;

/// Dialog requests only make sense with a seller selected; without one
/// they leave the state untouched.
fn show_confirm(state: ModerationState, decision: ModerationDecision) -> ModerationState {
    if state.selected.is_none() {
        return state;
    }
    ModerationState {
        dialog: ModerationDialog::Confirm(decision),
        ..state
    }
}

impl Reducer for ModerationReducer {
    type State = ModerationState;
    type Intent = ModerationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ModerationIntent::FilterChanged(status_filter) => ModerationState {
                status_filter,
                sellers: Vec::new(),
                ..state
            },
            // The subscription is the single source for the list; a
            // decision write never patches it locally.
            ModerationIntent::SellersUpdated(sellers) => ModerationState { sellers, ..state },
            ModerationIntent::Select(seller) => ModerationState {
                selected: Some(seller),
                dialog: ModerationDialog::Detail,
                notes: String::new(),
                error: None,
                ..state
            },
            ModerationIntent::ShowApproveDialog => {
                show_confirm(state, ModerationDecision::Approve)
            }
            ModerationIntent::ShowRejectDialog => show_confirm(state, ModerationDecision::Reject),
            ModerationIntent::ShowRequestInfoDialog => {
                show_confirm(state, ModerationDecision::RequestInfo)
            }
            ModerationIntent::ShowSuspendDialog => {
                show_confirm(state, ModerationDecision::Suspend)
            }
            ModerationIntent::NotesChanged(notes) => ModerationState { notes, ..state },
            ModerationIntent::DismissDialog => ModerationState {
                dialog: ModerationDialog::Hidden,
                selected: None,
                notes: String::new(),
                ..state
            },
            // Interpreted by the controller; no state change by itself.
            ModerationIntent::ConfirmDecision => state,
            ModerationIntent::DecisionStarted => ModerationState {
                submitting: true,
                error: None,
                ..state
            },
            ModerationIntent::DecisionSucceeded => ModerationState {
                submitting: false,
                dialog: ModerationDialog::Hidden,
                selected: None,
                notes: String::new(),
                error: None,
                ..state
            },
            // Failure keeps the selection and the open dialog so the
            // admin can retry; only the busy flag and message change.
            ModerationIntent::DecisionFailed(message) => ModerationState {
                submitting: false,
                error: Some(message),
                ..state
            },
        }
    }
}
