//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod logout;
pub mod profile;
pub mod refresh;
pub mod register;
pub mod token_service;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use profile::ProfileUseCase;
pub use refresh::{RefreshOutput, RefreshUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use token_service::{TokenPair, TokenService};
