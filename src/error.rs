//! Error types for Trimly server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stable numeric error codes carried on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    DbFailure = 2,
    BadValue = 3,
    NotFound = 4,
    SlotUnavailable = 5,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Slot unavailable: {0}")]
    SlotUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    /// Status and code mapping, shared by the response path and tests.
    ///
    /// `SlotUnavailable` is an expected outcome under contention, not a
    /// fault, so it maps to a client-side conflict status. Storage failures
    /// are the only server-side kind.
    fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
            AppError::SlotUnavailable(_) => (StatusCode::CONFLICT, ErrorCode::SlotUnavailable),
            AppError::Database(_) | AppError::Storage(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DbFailure)
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Failure),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                "Storage error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let (status, code) = AppError::Validation("bad id".into()).status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, ErrorCode::BadValue);
    }

    #[test]
    fn not_found_maps_to_client_error() {
        let (status, _) = AppError::NotFound("barber".into()).status_and_code();
        assert!(status.is_client_error());
    }

    #[test]
    fn slot_unavailable_is_conflict_not_server_error() {
        let (status, code) = AppError::SlotUnavailable("taken".into()).status_and_code();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(code, ErrorCode::SlotUnavailable);
    }

    #[test]
    fn storage_faults_map_to_server_error() {
        let (status, code) = AppError::Storage("deadline expired".into()).status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, ErrorCode::DbFailure);

        let (status, _) = AppError::Database(sqlx::Error::PoolClosed).status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
