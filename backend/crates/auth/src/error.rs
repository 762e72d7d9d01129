//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use std::fmt;
use thiserror::Error;
use user::UserError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Which of the two tokens a request was missing or failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    fn label(&self) -> &'static str {
        match self {
            TokenKind::Access => "Access",
            TokenKind::Refresh => "Refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => f.write_str("access"),
            TokenKind::Refresh => f.write_str("refresh"),
        }
    }
}

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    #[error("User with this email already exists")]
    DuplicateEmail,

    /// Unknown email and wrong password are deliberately the same error
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{} token is missing", .0.label())]
    MissingToken(TokenKind),

    #[error("Invalid {0} token")]
    InvalidToken(TokenKind),

    #[error("User not found")]
    UserNotFound,

    /// Signing secret absent or unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Token encoding failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Password processing failed: {0}")]
    Password(#[from] PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_)
            | AuthError::DuplicateEmail
            | AuthError::InvalidCredentials => ErrorKind::BadRequest,
            AuthError::MissingToken(_) | AuthError::InvalidToken(_) => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Configuration(_)
            | AuthError::Jwt(_)
            | AuthError::Password(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError. Server-side details stay in the log.
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            ErrorKind::InternalServerError => AppError::internal("Internal server error"),
            kind => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Configuration(msg) => {
                tracing::error!(message = %msg, "Auth configuration error");
            }
            AuthError::Jwt(e) => {
                tracing::error!(error = %e, "Token encoding error");
            }
            AuthError::Password(e) => {
                tracing::error!(error = %e, "Password processing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken(kind) => {
                tracing::warn!(token = %kind, "Rejected invalid token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::Validation(rejection.body_text())
    }
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(msg) => AuthError::Validation(msg),
            UserError::DuplicateEmail => AuthError::DuplicateEmail,
            UserError::NotFound => AuthError::UserNotFound,
            UserError::Password(e) => AuthError::Password(e),
            UserError::Database(e) => AuthError::Database(e),
            UserError::Internal(msg) => AuthError::Internal(msg),
        }
    }
}
