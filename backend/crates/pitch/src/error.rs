//! Pitch Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Pitch-specific result type alias
pub type PitchResult<T> = Result<T, PitchError>;

/// Pitch-specific error variants
///
/// These surface only from the owner-gated management endpoints; the
/// public validation path converts every failure into `{valid: false}`.
#[derive(Debug, Error)]
pub enum PitchError {
    /// No pitch access record with that ID
    #[error("Pitch access not found")]
    NotFound,

    /// Malformed request input
    #[error("{0}")]
    BadRequest(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PitchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PitchError::NotFound => StatusCode::NOT_FOUND,
            PitchError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PitchError::Database(_) | PitchError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PitchError::NotFound => ErrorKind::NotFound,
            PitchError::BadRequest(_) => ErrorKind::BadRequest,
            PitchError::Database(_) | PitchError::Internal(_) => ErrorKind::InternalServerError,
        }
    }
}

impl IntoResponse for PitchError {
    fn into_response(self) -> Response {
        match &self {
            PitchError::Database(e) => {
                tracing::error!(error = %e, "Pitch database error");
            }
            PitchError::Internal(msg) => {
                tracing::error!(message = %msg, "Pitch internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Pitch error");
            }
        }
        AppError::new(self.kind(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(PitchError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            PitchError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PitchError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
