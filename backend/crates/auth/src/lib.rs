//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Refresh token entity, JWT claims, repository traits
//! - `application/` - Token service and use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration and email/password login
//! - Short-lived access tokens (30 min) and server-tracked refresh
//!   tokens (7 days), both delivered as HttpOnly cookies
//! - Access-token middleware exposing the caller as `AccessIdentity`
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (cost 10) off the async runtime
//! - Access and refresh tokens signed with separate HS256 secrets
//! - Only SHA-256 digests of refresh tokens are stored
//! - Login failures never reveal whether the email exists

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token_service::TokenService;
pub use domain::repository::RefreshTokenRepository;
pub use domain::value_object::identity::{AccessIdentity, RefreshIdentity};
pub use error::{AuthError, AuthResult, TokenKind};
pub use infra::memory::MemoryRefreshTokenRepository;
pub use infra::postgres::PgRefreshTokenRepository;
pub use presentation::middleware::{AuthMiddlewareState, require_access_token};
pub use presentation::router::{auth_router, auth_router_generic};
