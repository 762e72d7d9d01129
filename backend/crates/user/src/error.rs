//! User Error Types
//!
//! User-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use thiserror::Error;

pub type UserResult<T> = Result<T, UserError>;

#[derive(Debug, Error)]
pub enum UserError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Email is already registered
    #[error("User with this email already exists")]
    DuplicateEmail,

    #[error("User not found")]
    NotFound,

    /// Hashing or verifying a password failed
    #[error("Password processing failed: {0}")]
    Password(#[from] PasswordHashError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    pub fn validation(message: impl Into<String>) -> Self {
        UserError::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::Validation(_) | UserError::DuplicateEmail => ErrorKind::BadRequest,
            UserError::NotFound => ErrorKind::NotFound,
            UserError::Password(_) | UserError::Database(_) | UserError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Server-side details stay in the log; clients get a generic message.
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            ErrorKind::InternalServerError => AppError::internal("Internal server error"),
            kind => AppError::new(kind, self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            UserError::Database(e) => {
                tracing::error!(error = %e, "User database error");
            }
            UserError::Password(e) => {
                tracing::error!(error = %e, "User password processing error");
            }
            UserError::Internal(msg) => {
                tracing::error!(message = %msg, "User internal error");
            }
            _ => {
                tracing::debug!(error = %self, "User error");
            }
        }
    }
}

/// Unreadable request bodies are client errors like any other bad input
impl From<JsonRejection> for UserError {
    fn from(rejection: JsonRejection) -> Self {
        UserError::Validation(rejection.body_text())
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
