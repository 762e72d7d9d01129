//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{RefreshTokenId, UserId};

use crate::domain::entity::refresh_token::RefreshToken;
use crate::error::AuthResult;

/// Refresh token repository trait
///
/// Tokens are addressed by their hash; the raw token never reaches
/// storage.
#[trait_variant::make(RefreshTokenRepository: Send)]
pub trait LocalRefreshTokenRepository {
    /// Store a new record. Hashes are unique.
    async fn create(&self, token: &RefreshToken) -> AuthResult<()>;

    async fn find_by_hash(&self, token_hash: &str) -> AuthResult<Option<RefreshToken>>;

    /// Returns the number of rows removed
    async fn delete_by_id(&self, id: &RefreshTokenId) -> AuthResult<u64>;

    async fn delete_by_hash(&self, token_hash: &str) -> AuthResult<u64>;

    /// Delete every record matching both owner and hash
    async fn delete_by_user_and_hash(&self, user_id: &UserId, token_hash: &str)
    -> AuthResult<u64>;

    /// Remove records whose expiry has passed
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
