//! Error conversions
//!
//! Postgres error classification and the HTTP rendering of [`AppError`].

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// SQLx helpers (feature-gated)
// ============================================================================

/// PostgreSQL `unique_violation`
#[cfg(feature = "sqlx")]
pub const PG_UNIQUE_VIOLATION: &str = "23505";

/// True when the error is a unique constraint violation, optionally on a
/// specific constraint.
///
/// Services use this to turn a lost insert race into the same domain
/// error an up-front existence check would have produced.
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error, constraint: Option<&str>) -> bool {
    let sqlx::Error::Database(db_err) = err else {
        return false;
    };
    let code_matches = db_err
        .code()
        .is_some_and(|code| code.as_ref() == PG_UNIQUE_VIOLATION);
    match constraint {
        Some(name) => code_matches && db_err.constraint() == Some(name),
        None => code_matches,
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "sqlx")]
    #[test]
    fn test_row_not_found_is_not_unique_violation() {
        use super::is_unique_violation;

        assert!(!is_unique_violation(&sqlx::Error::RowNotFound, None));
        assert!(!is_unique_violation(
            &sqlx::Error::RowNotFound,
            Some("users_email_key")
        ));
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_problem_details_status() {
        use crate::error::{app_error::AppError, kind::ErrorKind};
        use axum::response::IntoResponse;

        let response = AppError::new(ErrorKind::Unauthorized, "Invalid access token").into_response();
        assert_eq!(response.status().as_u16(), 401);
        assert_eq!(
            response.headers()["content-type"].to_str().ok(),
            Some("application/json")
        );
    }
}
