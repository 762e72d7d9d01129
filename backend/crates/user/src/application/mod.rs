//! Application Layer
//!
//! User CRUD use cases.

pub mod config;
pub mod create_user;
pub mod delete_user;
pub mod read_users;
pub mod update_user;

// Re-exports
pub use config::UserConfig;
pub use create_user::{CreateUserInput, CreateUserUseCase};
pub use delete_user::DeleteUserUseCase;
pub use read_users::{GetUserUseCase, ListUsersUseCase};
pub use update_user::{UpdateUserInput, UpdateUserUseCase};
