//! Login Use Case
//!
//! Authenticates a user by email and password.

use std::sync::Arc;

use platform::password::{ClearTextPassword, verify_password};
use user::{Email, SafeUser, UserRepository};

use crate::application::config::AuthConfig;
use crate::application::token_service::TokenService;
use crate::domain::repository::RefreshTokenRepository;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login output
pub struct LoginOutput {
    pub user: SafeUser,
    pub access_token: String,
    pub refresh_token: String,
}

/// Login use case
pub struct LoginUseCase<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<U, T> LoginUseCase<U, T>
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

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let (Some(email), Some(password)) = (
            input.email.filter(|e| !e.trim().is_empty()),
            input.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AuthError::Validation(
                "Email and password are required".to_string(),
            ));
        };

        // Malformed email, unknown email and wrong password are indistinguishable
        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password =
            ClearTextPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;
        if !verify_password(password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials);
        }

        let tokens = TokenService::new(self.token_repo.clone(), self.config.clone());
        let pair = tokens.issue_token_pair(&user).await?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutput {
            user: user.to_safe(),
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }
}
