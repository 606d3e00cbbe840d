use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// Review status of a seller account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellerStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    InfoRequested,
    Suspended,
}

/// Decision an admin can take on a seller application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModerationDecision {
    Approve,
    Reject,
    RequestInfo,
    Suspend,
}

impl ModerationDecision {
    /// The status a seller ends up in when this decision is applied.
    pub fn resulting_status(self) -> SellerStatus {
        match self {
            ModerationDecision::Approve => SellerStatus::Approved,
            ModerationDecision::Reject => SellerStatus::Rejected,
            ModerationDecision::RequestInfo => SellerStatus::InfoRequested,
            ModerationDecision::Suspend => SellerStatus::Suspended,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModerationDecision::Approve => "approve",
            ModerationDecision::Reject => "reject",
            ModerationDecision::RequestInfo => "request-info",
            ModerationDecision::Suspend => "suspend",
        }
    }
}

/// A seller account document, denormalized for display in moderation
/// and shop screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerProfile {
    pub id: UserId,
    pub shop_name: String,
    pub email: String,
    pub status: SellerStatus,
    /// Free-text notes from the most recent moderation decision.
    pub moderation_notes: String,
    pub applied_at: SystemTime,
}
