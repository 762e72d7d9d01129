//! Auth Middleware
//!
//! Middleware for requiring an access token on protected routes.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token_service::verify_access_token;
use crate::error::{AuthError, TokenKind};

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid access token cookie
///
/// On success the caller's `AccessIdentity` is inserted into request
/// extensions for handlers to take as `Extension<AccessIdentity>`.
/// Expired tokens are not refreshed here.
pub async fn require_access_token(
    state: AuthMiddlewareState,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let Some(token) =
        platform::cookie::extract_cookie(req.headers(), &state.config.access_cookie_name)
    else {
        return Err(AuthError::MissingToken(TokenKind::Access).into_response());
    };

    let Some(identity) = verify_access_token(&state.config, &token) else {
        return Err(AuthError::InvalidToken(TokenKind::Access).into_response());
    };

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::token_service::TokenService;
    use crate::domain::value_object::identity::AccessIdentity;
    use crate::infra::memory::MemoryRefreshTokenRepository;
    use axum::http::{StatusCode, header};
    use axum::routing::get;
    use axum::{Extension, Router, middleware};
    use tower::ServiceExt;
    use user::{UserId, UserRole};

    fn guarded(config: AuthConfig) -> Router {
        let state = AuthMiddlewareState {
            config: Arc::new(config),
        };
        Router::new()
            .route(
                "/me",
                get(|Extension(identity): Extension<AccessIdentity>| async move {
                    identity.email
                }),
            )
            .route_layer(middleware::from_fn(move |req: Request<Body>, next: Next| {
                require_access_token(state.clone(), req, next)
            }))
    }

    fn request(cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/me");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_guard_needs_only_config() {
        let config = AuthConfig::development();
        let token = TokenService::new(
            Arc::new(MemoryRefreshTokenRepository::new()),
            Arc::new(config.clone()),
        )
        .generate_access_token(UserId::new(), "a@x.com", UserRole::User)
        .unwrap();

        let res = guarded(config.clone())
            .oneshot(request(Some(&format!("accessToken={token}"))))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let res = guarded(config.clone()).oneshot(request(None)).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        // Signed with another secret
        let res = guarded(AuthConfig::development())
            .oneshot(request(Some(&format!("accessToken={token}"))))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
