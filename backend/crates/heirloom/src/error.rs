//! Heirloom Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Heirloom-specific result type alias
pub type HeirloomResult<T> = Result<T, HeirloomError>;

/// Heirloom-specific error variants
#[derive(Debug, Error)]
pub enum HeirloomError {
    /// Invalid recipe input; raised before anything is written
    #[error("{0}")]
    Validation(String),

    /// Recipe does not exist
    #[error("Recipe not found")]
    RecipeNotFound,

    /// Share link does not exist
    #[error("Share link not found")]
    ShareNotFound,

    /// Share link exists but is deactivated or expired
    #[error("This share link is no longer available")]
    ShareGone,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HeirloomError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HeirloomError::Validation(_) => StatusCode::BAD_REQUEST,
            HeirloomError::RecipeNotFound | HeirloomError::ShareNotFound => StatusCode::NOT_FOUND,
            HeirloomError::ShareGone => StatusCode::GONE,
            HeirloomError::Database(_) | HeirloomError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            HeirloomError::Validation(_) => ErrorKind::BadRequest,
            HeirloomError::RecipeNotFound | HeirloomError::ShareNotFound => ErrorKind::NotFound,
            HeirloomError::ShareGone => ErrorKind::Gone,
            HeirloomError::Database(_) | HeirloomError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }
}

impl IntoResponse for HeirloomError {
    fn into_response(self) -> Response {
        match &self {
            HeirloomError::Database(e) => {
                tracing::error!(error = %e, "Heirloom database error");
            }
            HeirloomError::Internal(msg) => {
                tracing::error!(message = %msg, "Heirloom internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Heirloom error");
            }
        }
        AppError::new(self.kind(), self.to_string()).into_response()
    }
}
