//! HTTP Handlers

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{AppendHeaders, IntoResponse};
use axum::{Extension, Json};
use platform::cookie::{CookieConfig, delete_cookie_header, extract_cookie, set_cookie_header};
use std::sync::Arc;
use user::UserRepository;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, LogoutUseCase, ProfileUseCase, RefreshUseCase, RegisterInput,
    RegisterUseCase,
};
use crate::domain::repository::RefreshTokenRepository;
use crate::domain::value_object::identity::AccessIdentity;
use crate::error::{AuthError, AuthResult, TokenKind};
use crate::presentation::dto::{
    LoginRequest, MessageResponse, RefreshResponse, RegisterRequest, UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<U, T>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub tokens: Arc<T>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<U, T>(
    State(state): State<AuthAppState<U, T>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;
    let use_case =
        RegisterUseCase::new(state.users.clone(), state.tokens.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookies = AppendHeaders([
        (
            header::SET_COOKIE,
            set_cookie(&state.config.access_cookie(), &output.access_token)?,
        ),
        (
            header::SET_COOKIE,
            set_cookie(&state.config.refresh_cookie(), &output.refresh_token)?,
        ),
    ]);

    Ok((
        StatusCode::CREATED,
        cookies,
        Json(UserResponse { user: output.user }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<U, T>(
    State(state): State<AuthAppState<U, T>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;
    let use_case =
        LoginUseCase::new(state.users.clone(), state.tokens.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookies = AppendHeaders([
        (
            header::SET_COOKIE,
            set_cookie(&state.config.access_cookie(), &output.access_token)?,
        ),
        (
            header::SET_COOKIE,
            set_cookie(&state.config.refresh_cookie(), &output.refresh_token)?,
        ),
    ]);

    Ok((StatusCode::OK, cookies, Json(UserResponse { user: output.user })))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/auth/refresh
pub async fn refresh<U, T>(
    State(state): State<AuthAppState<U, T>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.config.refresh_cookie_name)
        .ok_or(AuthError::MissingToken(TokenKind::Refresh))?;

    let use_case =
        RefreshUseCase::new(state.users.clone(), state.tokens.clone(), state.config.clone());
    let output = use_case.execute(&token).await?;

    let cookie = set_cookie(&state.config.access_cookie(), &output.access_token)?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(RefreshResponse {
            access_token: output.access_token,
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<U, T>(
    State(state): State<AuthAppState<U, T>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_cookie(&headers, &state.config.refresh_cookie_name) {
        let use_case = LogoutUseCase::new(state.tokens.clone(), state.config.clone());
        use_case.execute(&token).await?;
    }

    let cookies = AppendHeaders([
        (
            header::SET_COOKIE,
            clear_cookie(&state.config.access_cookie())?,
        ),
        (
            header::SET_COOKIE,
            clear_cookie(&state.config.refresh_cookie())?,
        ),
    ]);

    Ok((
        StatusCode::OK,
        cookies,
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

// ============================================================================
// Profile (requires access token)
// ============================================================================

/// GET /api/auth/profile
pub async fn profile<U, T>(
    State(state): State<AuthAppState<U, T>>,
    Extension(identity): Extension<AccessIdentity>,
) -> AuthResult<Json<UserResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let user = ProfileUseCase::new(state.users.clone())
        .execute(&identity.user_id)
        .await?;

    Ok(Json(UserResponse { user }))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn set_cookie(config: &CookieConfig, value: &str) -> AuthResult<HeaderValue> {
    set_cookie_header(config, value)
        .map_err(|e| AuthError::Internal(format!("Invalid cookie value: {e}")))
}

fn clear_cookie(config: &CookieConfig) -> AuthResult<HeaderValue> {
    delete_cookie_header(config)
        .map_err(|e| AuthError::Internal(format!("Invalid cookie value: {e}")))
}
