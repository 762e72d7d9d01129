//! Password Hashing and Verification
//!
//! bcrypt-based password handling with:
//! - Zeroization of clear-text passwords
//! - Redacted `Debug` output for both clear and hashed forms
//! - Hashing/verification off the async runtime (`spawn_blocking`)
//!
//! bcrypt is deliberately slow. Calling it on a runtime worker would stall
//! every other request scheduled on that worker, so the async entry points
//! are the ones services should use.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// bcrypt work factor used for stored credentials
pub const DEFAULT_BCRYPT_COST: u32 = 10;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password is required")]
    Empty,
}

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(#[from] bcrypt::BcryptError),

    #[error("Invalid password hash format")]
    InvalidHashFormat,

    /// The blocking task panicked or was cancelled
    #[error("Password hashing task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone` so the secret is not copied around by
/// accident.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a raw password. Only emptiness is rejected; strength rules
    /// are left to the caller.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        Ok(Self(raw))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash on the current thread. Prefer [`hash_password`] from async code.
    pub fn hash_blocking(&self, cost: u32) -> Result<HashedPassword, PasswordHashError> {
        let hash = bcrypt::hash(self.as_bytes(), cost)?;
        Ok(HashedPassword { hash })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// bcrypt hash in modular crypt format (`$2b$10$...`)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a stored hash (e.g. from the database)
    pub fn from_stored(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        if !hash.starts_with("$2") || hash.len() != 60 {
            return Err(PasswordHashError::InvalidHashFormat);
        }
        Ok(Self { hash })
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify on the current thread. Prefer [`verify_password`] from async code.
    pub fn verify_blocking(&self, password: &ClearTextPassword) -> Result<bool, PasswordHashError> {
        Ok(bcrypt::verify(password.as_bytes(), &self.hash)?)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Async entry points
// ============================================================================

pub async fn hash_password(
    password: ClearTextPassword,
    cost: u32,
) -> Result<HashedPassword, PasswordHashError> {
    tokio::task::spawn_blocking(move || password.hash_blocking(cost)).await?
}

pub async fn verify_password(
    password: ClearTextPassword,
    hashed: HashedPassword,
) -> Result<bool, PasswordHashError> {
    tokio::task::spawn_blocking(move || hashed.verify_blocking(&password)).await?
}
