use crate::domain::{ModerationDecision, SellerProfile, SellerStatus};
use crate::mvi::UiState;

/// Which modal is on screen, if any.
///
/// A single tagged value instead of per-dialog booleans: two dialogs
/// being visible at once is unrepresentable, not merely forbidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModerationDialog {
    #[default]
    Hidden,
    /// Read-only detail of the selected seller.
    Detail,
    /// Confirmation prompt for a decision, with a notes field.
    Confirm(ModerationDecision),
}

/// Everything the moderation screen needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationState {
    /// Status the live subscription is filtered by.
    pub status_filter: SellerStatus,
    pub sellers: Vec<SellerProfile>,
    /// Denormalized snapshot of the selected seller, shown in the modal.
    pub selected: Option<SellerProfile>,
    /// Free-text notes attached to the decision write.
    pub notes: String,
    pub dialog: ModerationDialog,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for ModerationState {
    fn default() -> Self {
        Self {
            status_filter: SellerStatus::Pending,
            sellers: Vec::new(),
            selected: None,
            notes: String::new(),
            dialog: ModerationDialog::Hidden,
            submitting: false,
            error: None,
        }
    }
}

impl UiState for ModerationState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_pending_with_no_dialog() {
        let state = ModerationState::default();
        assert_eq!(state.status_filter, SellerStatus::Pending);
        assert_eq!(state.dialog, ModerationDialog::Hidden);
        assert!(state.selected.is_none());
        assert!(!state.submitting);
    }
}
