//! Auth Router

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    routing::{get, post},
};
use std::sync::Arc;
use user::{PgUserRepository, UserRepository};

use crate::application::config::AuthConfig;
use crate::domain::repository::RefreshTokenRepository;
use crate::infra::postgres::PgRefreshTokenRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_access_token};

/// Create the Auth router with PostgreSQL repositories
pub fn auth_router(
    users: PgUserRepository,
    tokens: PgRefreshTokenRepository,
    config: AuthConfig,
) -> Router {
    auth_router_generic(users, tokens, config)
}

/// Create a generic Auth router for any repository implementations
pub fn auth_router_generic<U, T>(users: U, tokens: T, config: AuthConfig) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        users: Arc::new(users),
        tokens: Arc::new(tokens),
        config: Arc::new(config),
    };

    let guard = AuthMiddlewareState {
        config: state.config.clone(),
    };

    Router::new()
        .route("/register", post(handlers::register::<U, T>))
        .route("/login", post(handlers::login::<U, T>))
        .route("/refresh", post(handlers::refresh::<U, T>))
        .route("/logout", post(handlers::logout::<U, T>))
        .route(
            "/profile",
            get(handlers::profile::<U, T>).route_layer(middleware::from_fn(
                move |req: Request<Body>, next: Next| require_access_token(guard.clone(), req, next),
            )),
        )
        .with_state(state)
}
