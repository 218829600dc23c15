//! Error Taxonomy
//!
//! Every failure a user can see maps onto one of these variants. None of them
//! carry raw transport text in their `Display` output.

use std::fmt;

/// Common result type for session and board operations
pub type SyncResult<T> = Result<T, SyncError>;

/// User-initiated operation on the todo collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Create,
    Update,
    Toggle,
    Delete,
    ClearCompleted,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Load => "load",
            Action::Create => "create",
            Action::Update => "update",
            Action::Toggle => "toggle",
            Action::Delete => "delete",
            Action::ClearCompleted => "clear_completed",
        }
    }

    /// Fixed notice shown when the request behind this action fails
    pub fn failure_notice(&self) -> &'static str {
        match self {
            Action::Load => "Failed to load todos.",
            Action::Create => "Failed to add todo. Please try again.",
            Action::Update => "Failed to update todo. Please try again.",
            Action::Toggle => "Failed to update todo status.",
            Action::Delete => "Failed to delete todo. Please try again.",
            Action::ClearCompleted => "Failed to clear completed todos.",
        }
    }
}

/// Session and synchronization errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// Rejected locally before any request was made
    Validation(String),
    /// Login or registration refused by the server
    Auth(String),
    /// The server answered 401: the stored token is no longer usable
    SessionInvalid,
    /// Any other failure of a todo request
    Request { action: Action, detail: String },
    /// Browser storage refused to persist the session
    Storage(String),
}

impl SyncError {
    pub fn request(action: Action, detail: impl Into<String>) -> Self {
        SyncError::Request { action, detail: detail.into() }
    }

    pub fn is_session_invalid(&self) -> bool {
        matches!(self, SyncError::SessionInvalid)
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Validation(msg) => write!(f, "{}", msg),
            SyncError::Auth(msg) => write!(f, "{}", msg),
            SyncError::SessionInvalid => write!(f, "Your session has expired. Please log in again."),
            SyncError::Request { action, .. } => write!(f, "{}", action.failure_notice()),
            SyncError::Storage(_) => write!(f, "Could not save your session in this browser."),
        }
    }
}

impl std::error::Error for SyncError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_hides_detail() {
        let err = SyncError::request(Action::Create, "error sending request: connection refused");
        assert_eq!(err.to_string(), "Failed to add todo. Please try again.");
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = SyncError::Validation("Title is required".to_string());
        assert_eq!(err.to_string(), "Title is required");
        assert!(!err.is_session_invalid());
    }

    #[test]
    fn test_session_invalid() {
        assert!(SyncError::SessionInvalid.is_session_invalid());
    }
}
