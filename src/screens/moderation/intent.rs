use crate::domain::{SellerProfile, SellerStatus};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ModerationIntent {
    /// Status tab changed. The controller cancels the current
    /// subscription and relaunches it with the new filter.
    FilterChanged(SellerStatus),
    /// Emission from the live subscription.
    SellersUpdated(Vec<SellerProfile>),
    /// Admin tapped a row; opens the detail modal.
    Select(SellerProfile),
    /// Switch the open modal to the approve confirmation.
    ShowApproveDialog,
    ShowRejectDialog,
    ShowRequestInfoDialog,
    ShowSuspendDialog,
    NotesChanged(String),
    DismissDialog,
    /// Confirm whichever decision the dialog is showing. The write is
    /// keyed by the selected seller's id plus the notes text.
    ConfirmDecision,
    DecisionStarted,
    DecisionSucceeded,
    DecisionFailed(String),
}

impl Intent for ModerationIntent {}
