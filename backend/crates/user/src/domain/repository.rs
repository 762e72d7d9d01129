//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::UserResult;

/// User repository trait
///
/// Implementations must enforce email uniqueness themselves and report a
/// violation as [`crate::UserError::DuplicateEmail`]; services rely on
/// this to settle concurrent registrations.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    async fn create(&self, user: &User) -> UserResult<()>;

    async fn find_by_id(&self, id: &UserId) -> UserResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> UserResult<Option<User>>;

    async fn exists_by_email(&self, email: &Email) -> UserResult<bool>;

    /// All users, oldest first
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Persist changes. `NotFound` if the row is gone.
    async fn update(&self, user: &User) -> UserResult<()>;

    /// Delete and return the removed user, if it existed
    async fn delete(&self, id: &UserId) -> UserResult<Option<User>>;
}
