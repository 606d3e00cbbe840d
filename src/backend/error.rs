//! Failure type shared by all backend collaborators.

use thiserror::Error;

/// Fixed fallback for failures that arrive without a usable description.
pub const FALLBACK_MESSAGE: &str = "Something went wrong, please try again";

/// Errors returned by backend collaborators.
///
/// These are always recoverable from the controller's point of view:
/// the failure is converted into a user-readable message in screen
/// state and the user may re-trigger the action. No variant is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The requested document does not exist.
    #[error("Document '{id}' not found")]
    NotFound { id: String },

    /// The signed-in user may not perform this operation.
    #[error("Permission denied: {reason}")]
    PermissionDenied { reason: String },

    /// The backend could not be reached.
    #[error("Service unavailable: {reason}")]
    Unavailable { reason: String },

    /// The backend rejected a write (e.g. a server-side rule).
    #[error("Write rejected: {reason}")]
    WriteRejected { reason: String },

    /// An object storage upload failed.
    #[error("Upload of '{key}' failed: {reason}")]
    UploadFailed { key: String, reason: String },
}

impl BackendError {
    /// The dismissible message surfaced in screen state.
    ///
    /// Taken from the failure's description, or [`FALLBACK_MESSAGE`]
    /// when the underlying reason is empty.
    pub fn user_message(&self) -> String {
        let reason = match self {
            BackendError::NotFound { .. } => return self.to_string(),
            BackendError::PermissionDenied { reason } => reason,
            BackendError::Unavailable { reason } => reason,
            BackendError::WriteRejected { reason } => reason,
            BackendError::UploadFailed { reason, .. } => reason,
        };
        if reason.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    /// Shorthand used by tests and fakes.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        BackendError::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Result alias for collaborator calls.
pub type BackendResult<T> = Result<T, BackendError>;
