//! Refresh Use Case
//!
//! Exchanges a refresh token for a new access token. The refresh token
//! itself is left in place and stays valid until expiry or logout.

use std::sync::Arc;

use user::UserRepository;

use crate::application::config::AuthConfig;
use crate::application::token_service::TokenService;
use crate::domain::repository::RefreshTokenRepository;
use crate::error::{AuthError, AuthResult, TokenKind};

pub struct RefreshOutput {
    pub access_token: String,
}

pub struct RefreshUseCase<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<U, T> RefreshUseCase<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    pub fn new(user_repo: Arc<U>, token_repo: Arc<T>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            token_repo,
            config,
        }
    }

    /// The caller handles an absent cookie; `token` is always present here.
    pub async fn execute(&self, token: &str) -> AuthResult<RefreshOutput> {
        let tokens = TokenService::new(self.token_repo.clone(), self.config.clone());

        let identity = tokens
            .verify_refresh_token(token)
            .await
            .ok_or(AuthError::InvalidToken(TokenKind::Refresh))?;

        let user = self
            .user_repo
            .find_by_id(&identity.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let access_token = tokens.generate_access_token(user.id, user.email.as_str(), user.role)?;

        tracing::debug!(user_id = %user.id, "Access token refreshed");

        Ok(RefreshOutput { access_token })
    }
}
