//! Register Use Case
//!
//! Creates a new user account and signs it in.

use std::sync::Arc;

use user::application::{CreateUserInput, CreateUserUseCase};
use user::{SafeUser, UserRepository};

use crate::application::config::AuthConfig;
use crate::application::token_service::TokenService;
use crate::domain::repository::RefreshTokenRepository;
use crate::error::AuthResult;

/// Register input
pub struct RegisterInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Register output
pub struct RegisterOutput {
    pub user: SafeUser,
    pub access_token: String,
    pub refresh_token: String,
}

/// Register use case
pub struct RegisterUseCase<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<U, T> RegisterUseCase<U, T>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validation, duplicate check, hashing and insert
        let create_user =
            CreateUserUseCase::new(self.user_repo.clone(), Arc::new(self.config.user_config()));
        let user = create_user
            .execute(CreateUserInput {
                name: input.name,
                email: input.email,
                password: input.password,
                role: None,
            })
            .await?;

        let tokens = TokenService::new(self.token_repo.clone(), self.config.clone());
        let pair = tokens.issue_token_pair(&user).await?;

        tracing::info!(
            user_id = %user.id,
            email = %user.email,
            "User registered"
        );

        Ok(RegisterOutput {
            user: user.to_safe(),
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }
}
