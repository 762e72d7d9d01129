//! Profile Use Case

use std::sync::Arc;

use kernel::id::UserId;
use user::application::GetUserUseCase;
use user::{SafeUser, UserRepository};

use crate::error::AuthResult;

pub struct ProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// `UserNotFound` when the account was deleted after the token was issued
    pub async fn execute(&self, user_id: &UserId) -> AuthResult<SafeUser> {
        let user = GetUserUseCase::new(self.user_repo.clone())
            .execute(user_id)
            .await?;
        Ok(user)
    }
}
