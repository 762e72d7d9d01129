//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::MemoryRefreshTokenRepository;
pub use postgres::PgRefreshTokenRepository;
