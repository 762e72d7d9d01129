//! Read Use Cases
//!
//! Listing and single lookup. Both return the password-free projection.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::SafeUser;
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};

pub struct ListUsersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ListUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self) -> UserResult<Vec<SafeUser>> {
        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(SafeUser::from).collect())
    }
}

pub struct GetUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> GetUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, id: &UserId) -> UserResult<SafeUser> {
        self.user_repo
            .find_by_id(id)
            .await?
            .map(SafeUser::from)
            .ok_or(UserError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::UserConfig;
    use crate::application::create_user::{CreateUserInput, CreateUserUseCase};
    use crate::infra::memory::MemoryUserRepository;

    async fn seed(repo: &MemoryUserRepository, email: &str) -> UserId {
        CreateUserUseCase::new(Arc::new(repo.clone()), Arc::new(UserConfig::fast_hashing()))
            .execute(CreateUserInput {
                email: Some(email.into()),
                password: Some("secret".into()),
                ..Default::default()
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_list_returns_all_users() {
        let repo = MemoryUserRepository::new();
        seed(&repo, "a@x.com").await;
        seed(&repo, "b@x.com").await;

        let users = ListUsersUseCase::new(Arc::new(repo)).execute().await.unwrap();
        let mut emails: Vec<_> = users.iter().map(|u| u.email.as_str()).collect();
        emails.sort();
        assert_eq!(emails, ["a@x.com", "b@x.com"]);
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let repo = MemoryUserRepository::new();
        let id = seed(&repo, "a@x.com").await;
        let uc = GetUserUseCase::new(Arc::new(repo));

        assert_eq!(uc.execute(&id).await.unwrap().id, id);
        assert!(matches!(
            uc.execute(&UserId::new()).await,
            Err(UserError::NotFound)
        ));
    }
}
