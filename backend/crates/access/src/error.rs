//! Access Error Types
//!
//! This module provides access-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Access-specific result type alias
pub type AccessResult<T> = Result<T, AccessError>;

/// Access-specific error variants
#[derive(Debug, Error)]
pub enum AccessError {
    /// No session token on the request
    #[error("Missing session")]
    SessionMissing,

    /// Session token failed signature or lookup
    #[error("Invalid session")]
    SessionInvalid,

    /// Session exists but has passed its expiry
    #[error("Session expired")]
    SessionExpired,

    /// Identity assertion failed verification
    #[error("Invalid identity assertion")]
    InvalidAssertion,

    /// No profile exists for the verified identity
    #[error("No profile for this account")]
    ProfileNotFound,

    /// Profile exists but carries no role
    #[error("No role assigned to this account")]
    RoleMissing,

    /// Authenticated but the role does not grant this route
    #[error("Insufficient role")]
    InsufficientRole,

    /// Client-portal credential failure (unknown user or wrong password)
    #[error("Invalid credentials")]
    InvalidCredentials,

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

impl AccessError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccessError::SessionMissing
            | AccessError::SessionInvalid
            | AccessError::SessionExpired
            | AccessError::InvalidAssertion
            | AccessError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AccessError::ProfileNotFound
            | AccessError::RoleMissing
            | AccessError::InsufficientRole => StatusCode::FORBIDDEN,
            AccessError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AccessError::Database(_) | AccessError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccessError::SessionMissing
            | AccessError::SessionInvalid
            | AccessError::SessionExpired
            | AccessError::InvalidAssertion
            | AccessError::InvalidCredentials => ErrorKind::Unauthorized,
            AccessError::ProfileNotFound
            | AccessError::RoleMissing
            | AccessError::InsufficientRole => ErrorKind::Forbidden,
            AccessError::BadRequest(_) => ErrorKind::BadRequest,
            AccessError::Database(_) | AccessError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// 401 variants carry a machine-readable reason in `details` so the
    /// caller can tell a missing cookie from an expired one.
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AccessError::SessionMissing => err.with_details("missing"),
            AccessError::SessionExpired => err.with_details("expired"),
            AccessError::SessionInvalid => err.with_details("invalid"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccessError::Database(e) => {
                tracing::error!(error = %e, "Access database error");
            }
            AccessError::Internal(msg) => {
                tracing::error!(message = %msg, "Access internal error");
            }
            AccessError::InvalidCredentials => {
                tracing::warn!("Invalid client-portal login attempt");
            }
            AccessError::InvalidAssertion => {
                tracing::warn!("Rejected identity assertion");
            }
            _ => {
                tracing::debug!(error = %self, "Access error");
            }
        }
    }
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccessError {
    fn from(err: AppError) -> Self {
        AccessError::Internal(err.to_string())
    }
}
