//! # Store Errors
//!
//! Error types for the product store.
//!
//! Both variants are expected outcomes of normal operation, never fatal:
//! the HTTP adapter maps them to status codes and the process keeps serving.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Product store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Referenced id does not exist in the collection
    #[error("Product not found")]
    NotFound,

    /// Rejected mutation (missing required field or negative numeric field)
    #[error("{0}")]
    Validation(String),
}

impl StoreError {
    /// Create a validation error with the given reason
    pub fn validation(reason: impl Into<String>) -> Self {
        StoreError::Validation(reason.into())
    }

    /// Returns whether this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err = StoreError::validation("Price must be non-negative");
        assert_eq!(err.to_string(), "Price must be non-negative");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_display() {
        assert_eq!(StoreError::NotFound.to_string(), "Product not found");
        assert!(StoreError::NotFound.is_not_found());
    }
}
