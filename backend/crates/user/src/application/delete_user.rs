//! Delete User Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::SafeUser;
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};

pub struct DeleteUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> DeleteUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Removes the user (and, in storage, its refresh tokens) and returns
    /// what was deleted.
    pub async fn execute(&self, id: &UserId) -> UserResult<SafeUser> {
        let deleted = self
            .user_repo
            .delete(id)
            .await?
            .ok_or(UserError::NotFound)?;

        tracing::info!(user_id = %deleted.id, "User deleted");

        Ok(deleted.into())
    }
}
