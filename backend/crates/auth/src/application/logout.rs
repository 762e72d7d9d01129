//! Logout Use Case
//!
//! Revokes the presented refresh token. Idempotent.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token_service::TokenService;
use crate::domain::repository::RefreshTokenRepository;
use crate::error::AuthResult;

pub struct LogoutUseCase<T>
where
    T: RefreshTokenRepository,
{
    token_repo: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<T> LogoutUseCase<T>
where
    T: RefreshTokenRepository,
{
    pub fn new(token_repo: Arc<T>, config: Arc<AuthConfig>) -> Self {
        Self { token_repo, config }
    }

    /// An unverifiable token is a no-op, not an error.
    pub async fn execute(&self, token: &str) -> AuthResult<()> {
        let tokens = TokenService::new(self.token_repo.clone(), self.config.clone());

        let Some(identity) = tokens.verify_refresh_token(token).await else {
            tracing::debug!("Logout with unknown refresh token");
            return Ok(());
        };

        let hash = TokenService::<T>::hash_token(token);
        let deleted = self
            .token_repo
            .delete_by_user_and_hash(&identity.user_id, &hash)
            .await?;

        tracing::info!(
            user_id = %identity.user_id,
            tokens_deleted = deleted,
            "User logged out"
        );

        Ok(())
    }
}
