//! In-memory Repository Implementation
//!
//! Used by tests. Keyed by token hash, mirroring the unique index.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::{RefreshTokenId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::refresh_token::RefreshToken;
use crate::domain::repository::RefreshTokenRepository;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct MemoryRefreshTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl MemoryRefreshTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl RefreshTokenRepository for MemoryRefreshTokenRepository {
    async fn create(&self, token: &RefreshToken) -> AuthResult<()> {
        let mut tokens = self.tokens.write().await;
        if tokens.contains_key(&token.token_hash) {
            return Err(AuthError::Internal("Duplicate refresh token hash".into()));
        }
        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(())
    }

    async fn find_by_hash(&self, token_hash: &str) -> AuthResult<Option<RefreshToken>> {
        Ok(self.tokens.read().await.get(token_hash).cloned())
    }

    async fn delete_by_id(&self, id: &RefreshTokenId) -> AuthResult<u64> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| &t.id != id);
        Ok((before - tokens.len()) as u64)
    }

    async fn delete_by_hash(&self, token_hash: &str) -> AuthResult<u64> {
        Ok(self.tokens.write().await.remove(token_hash).map_or(0, |_| 1))
    }

    async fn delete_by_user_and_hash(
        &self,
        user_id: &UserId,
        token_hash: &str,
    ) -> AuthResult<u64> {
        let mut tokens = self.tokens.write().await;
        match tokens.get(token_hash) {
            Some(t) if &t.user_id == user_id => {
                tokens.remove(token_hash);
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now = Utc::now();
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| !t.is_expired_at(now));
        Ok((before - tokens.len()) as u64)
    }
}
