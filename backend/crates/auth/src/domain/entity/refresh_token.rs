//! Refresh Token Entity
//!
//! Server-side record of an issued refresh token. Only the SHA-256 hex
//! digest of the raw token is kept.

use chrono::{DateTime, Utc};
use kernel::id::{RefreshTokenId, UserId};

#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub id: RefreshTokenId,
    /// Owner; the record goes away with the user
    pub user_id: UserId,
    /// Lowercase hex SHA-256 of the raw token, unique
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Expiry is computed by the caller from the configured TTL.
    pub fn new(user_id: UserId, token_hash: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: RefreshTokenId::new(),
            user_id,
            token_hash,
            expires_at,
            created_at: Utc::now(),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry() {
        let now = Utc::now();
        let token = RefreshToken::new(UserId::new(), "ab".repeat(32), now + Duration::days(7));
        assert!(!token.is_expired_at(now));
        assert!(token.is_expired_at(now + Duration::days(8)));

        let stale = RefreshToken::new(UserId::new(), "cd".repeat(32), now - Duration::seconds(1));
        assert!(stale.is_expired());
    }
}
