//! Domain Errors
//!
//! Every failure in the app is a validation failure shown to the user,
//! so the `Display` text of each variant is the message the UI alerts.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required form field was left empty
    #[error("{0}")]
    MissingInput(&'static str),
    /// Signup email does not belong to the domain the role requires
    #[error("{0}")]
    AccessDenied(&'static str),
    #[error("You already have an active check-in. Please check out first.")]
    AlreadyCheckedIn,
    #[error("No active check-in found.")]
    NotCheckedIn,
    /// Index no longer exists, usually because another tab changed the collection
    #[error("No {what} at position {index}")]
    NotFound { what: &'static str, index: usize },
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Whether the UI should interrupt the user with this error.
    ///
    /// Stale indexes are silently ignored, matching a click on a row
    /// that has already been removed.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, DomainError::NotFound { .. })
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_user_message() {
        let err = DomainError::MissingInput("Please choose a pickup slot.");
        assert_eq!(err.to_string(), "Please choose a pickup slot.");
        assert_eq!(
            DomainError::NotCheckedIn.to_string(),
            "No active check-in found."
        );
    }

    #[test]
    fn test_not_found_is_silent() {
        let err = DomainError::NotFound { what: "cart entry", index: 3 };
        assert!(!err.is_user_facing());
        assert!(DomainError::AlreadyCheckedIn.is_user_facing());
    }
}
