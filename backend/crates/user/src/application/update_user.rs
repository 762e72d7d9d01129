//! Update User Use Case
//!
//! Partial update of name, email and role. Passwords are not changed here.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::SafeUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::{UserError, UserResult};

/// Update user input. `None` leaves the field untouched.
#[derive(Debug, Default)]
pub struct UpdateUserInput {
    /// A blank name clears it
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

pub struct UpdateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UpdateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, id: &UserId, input: UpdateUserInput) -> UserResult<SafeUser> {
        // Validate before touching storage
        let email = input.email.map(Email::new).transpose()?;
        let role = input
            .role
            .map(|r| r.parse::<UserRole>())
            .transpose()?;

        let mut user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)?;

        if let Some(email) = email.filter(|e| e != &user.email) {
            if self.user_repo.exists_by_email(&email).await? {
                return Err(UserError::DuplicateEmail);
            }
            user.set_email(email);
        }
        if let Some(name) = input.name {
            user.set_name(Some(name));
        }
        if let Some(role) = role {
            user.set_role(role);
        }

        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.id, "User updated");

        Ok(user.to_safe())
    }
}
