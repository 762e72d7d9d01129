//! User Backend Module
//!
//! Owns the user store shared by every context:
//! - `domain/` - User entity, safe projection, value objects, repository trait
//! - `application/` - CRUD use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Passwords are stored as bcrypt hashes and never leave this crate in
//! any serialized form: every read path goes through [`SafeUser`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::UserConfig;
pub use domain::entity::user::{SafeUser, User};
pub use domain::repository::UserRepository;
pub use domain::value_object::{email::Email, user_role::UserRole};
pub use error::{UserError, UserResult};
pub use infra::memory::MemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use kernel::id::UserId;
pub use presentation::router::{user_router, user_router_generic};
