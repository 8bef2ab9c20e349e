//! Unified error handling
//!
//! [`AppError`] is the application error enum; its `IntoResponse` impl
//! produces the `{status, message}` envelope every failure is surfaced
//! with.
//!
//! # Taxonomy
//!
//! | Variant | HTTP | Meaning |
//! |---------|------|---------|
//! | Validation | 400 | malformed, missing, or out-of-policy field |
//! | Conflict | 400 | illegal status transition |
//! | NotFound | 404 | missing identifier |
//! | Database / Internal | 500 | unexpected store or runtime failure |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ErrorResponse;
use tracing::error;

use crate::db::repository::RepoError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Illegal status transition: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),

            // Illegal transitions surface as 400 like any other
            // validation failure
            AppError::Validation(msg) | AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            status: status.as_u16(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for handlers
pub type AppResult<T> = Result<T, AppError>;
