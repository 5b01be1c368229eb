/// Domain error taxonomy for the Ticklist services
///
/// Every service operation returns `Result<T, ServiceError>` so callers can
/// distinguish a 404-worthy lookup miss from a uniqueness conflict or a
/// validation failure instead of collapsing them into one message string.
///
/// # Example
///
/// ```
/// use ticklist_shared::error::ServiceError;
///
/// let err = ServiceError::NotFound("Task not found".to_string());
/// assert_eq!(err.to_string(), "Task not found");
/// ```

use crate::auth::password::PasswordError;

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Unified error type for the task and user services
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A single-entity lookup found no matching record
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness invariant (task title, username, email) would be violated
    #[error("{0}")]
    Conflict(String),

    /// Input was null, blank, or malformed before reaching the store
    #[error("{0}")]
    Validation(String),

    /// The underlying store failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failed
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),
}

impl ServiceError {
    /// True when this error represents a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
    }

    /// True when this error represents a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, ServiceError::Conflict(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_message() {
        let err = ServiceError::NotFound("User not found".to_string());
        assert_eq!(err.to_string(), "User not found");

        let err = ServiceError::Conflict("Username already exists".to_string());
        assert_eq!(err.to_string(), "Username already exists");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(ServiceError::NotFound(String::new()).is_not_found());
        assert!(!ServiceError::NotFound(String::new()).is_conflict());
        assert!(ServiceError::Conflict(String::new()).is_conflict());
    }
}
