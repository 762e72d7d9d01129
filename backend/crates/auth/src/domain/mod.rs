//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::refresh_token::RefreshToken;
pub use repository::RefreshTokenRepository;
pub use value_object::claims::{AccessClaims, RefreshClaims};
pub use value_object::identity::{AccessIdentity, RefreshIdentity};
