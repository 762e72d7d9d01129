//! Create User Use Case
//!
//! Shared by CRUD create and account registration.

use std::sync::Arc;

use platform::password::{ClearTextPassword, hash_password};

use crate::application::config::UserConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::{UserError, UserResult};

/// Create user input
#[derive(Debug, Default)]
pub struct CreateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Defaults to `user`
    pub role: Option<String>,
}

/// Create user use case
pub struct CreateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<UserConfig>,
}

impl<U> CreateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<UserConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Returns the stored entity; callers project it with
    /// [`User::to_safe`] before responding.
    pub async fn execute(&self, input: CreateUserInput) -> UserResult<User> {
        let (Some(email), Some(password)) = (
            input.email.filter(|e| !e.trim().is_empty()),
            input.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(UserError::validation("Email and password are required"));
        };

        let email = Email::new(email)?;
        let role = match input.role {
            Some(role) => role.parse::<UserRole>()?,
            None => UserRole::default(),
        };

        if self.user_repo.exists_by_email(&email).await? {
            return Err(UserError::DuplicateEmail);
        }

        let password =
            ClearTextPassword::new(password).map_err(|e| UserError::validation(e.to_string()))?;
        let password_hash = hash_password(password, self.config.password_cost).await?;

        let user = User::new(email, password_hash, input.name, role);

        // A concurrent insert with the same email surfaces here as DuplicateEmail
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.id,
            email = %user.email,
            role = %user.role,
            "User created"
        );

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryUserRepository;
    use kernel::id::UserId;

    /// Existence check always misses, as when a concurrent registration
    /// commits between the check and the insert.
    #[derive(Clone, Default)]
    struct StaleCheckRepository {
        inner: MemoryUserRepository,
    }

    impl UserRepository for StaleCheckRepository {
        async fn create(&self, user: &User) -> UserResult<()> {
            self.inner.create(user).await
        }

        async fn find_by_id(&self, id: &UserId) -> UserResult<Option<User>> {
            self.inner.find_by_id(id).await
        }

        async fn find_by_email(&self, email: &Email) -> UserResult<Option<User>> {
            self.inner.find_by_email(email).await
        }

        async fn exists_by_email(&self, _email: &Email) -> UserResult<bool> {
            Ok(false)
        }

        async fn list(&self) -> UserResult<Vec<User>> {
            self.inner.list().await
        }

        async fn update(&self, user: &User) -> UserResult<()> {
            self.inner.update(user).await
        }

        async fn delete(&self, id: &UserId) -> UserResult<Option<User>> {
            self.inner.delete(id).await
        }
    }

    fn use_case(repo: &MemoryUserRepository) -> CreateUserUseCase<MemoryUserRepository> {
        CreateUserUseCase::new(Arc::new(repo.clone()), Arc::new(UserConfig::fast_hashing()))
    }

    fn input(email: &str, password: &str) -> CreateUserInput {
        CreateUserInput {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_hashes_password_and_normalizes_email() {
        let repo = MemoryUserRepository::new();
        let user = use_case(&repo)
            .execute(input(" A@X.com ", "secret"))
            .await
            .unwrap();

        assert_eq!(user.email.as_str(), "a@x.com");
        assert_eq!(user.role, UserRole::User);
        assert_ne!(user.password_hash.as_str(), "secret");
        assert!(user.password_hash.as_str().starts_with("$2"));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let repo = MemoryUserRepository::new();
        let uc = use_case(&repo);
        uc.execute(input("a@x.com", "secret")).await.unwrap();

        let err = uc.execute(input("A@x.com", "other")).await.unwrap_err();
        assert!(matches!(err, UserError::DuplicateEmail));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_insert_conflict_after_passed_check_is_duplicate_email() {
        let repo = StaleCheckRepository::default();
        let uc = CreateUserUseCase::new(Arc::new(repo.clone()), Arc::new(UserConfig::fast_hashing()));

        let (first, second) = tokio::join!(
            uc.execute(input("race@x.com", "secret")),
            uc.execute(input("RACE@x.com", "other")),
        );

        let outcomes = [first, second];
        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(
            outcomes
                .iter()
                .any(|r| matches!(r, Err(UserError::DuplicateEmail)))
        );
        assert_eq!(repo.inner.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_requires_email_and_password() {
        let repo = MemoryUserRepository::new();
        let uc = use_case(&repo);

        let err = uc
            .execute(CreateUserInput {
                email: Some("a@x.com".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Email and password are required");

        let err = uc.execute(input("   ", "secret")).await.unwrap_err();
        assert!(matches!(err, UserError::Validation(_)));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_with_role() {
        let repo = MemoryUserRepository::new();
        let uc = use_case(&repo);

        let admin = uc
            .execute(CreateUserInput {
                role: Some("admin".into()),
                ..input("root@x.com", "secret")
            })
            .await
            .unwrap();
        assert!(admin.role.is_admin());

        let err = uc
            .execute(CreateUserInput {
                role: Some("owner".into()),
                ..input("b@x.com", "secret")
            })
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::Validation(_)));
    }
}
