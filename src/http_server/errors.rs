//! # API Errors
//!
//! Error types for the HTTP layer. Store failures are converted into
//! `ApiError` so each variant picks its own status code; the body is the
//! standard envelope with `success: false`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

use super::response::ApiResponse;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP-facing errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Referenced product does not exist (or the id did not parse)
    #[error("Product not found")]
    NotFound,

    /// Rejected mutation
    #[error("{0}")]
    Validation(String),

    /// Internal error (the only 500 this service produces)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Lock-poisoning error for shared-store access
    pub fn lock_poisoned() -> Self {
        ApiError::Internal("store lock poisoned".to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Validation(reason) => ApiError::Validation(reason),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Internal(detail) => {
                ApiResponse::failure_with_error("Unexpected server error", detail.clone())
            }
            _ => ApiResponse::failure(self.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Validation("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::lock_poisoned().status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_conversion() {
        assert!(matches!(
            ApiError::from(StoreError::NotFound),
            ApiError::NotFound
        ));

        let converted = ApiError::from(StoreError::validation("Price must be non-negative"));
        assert_eq!(converted.to_string(), "Price must be non-negative");
    }
}
