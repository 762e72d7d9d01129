//! Token Service
//!
//! Signs and verifies access/refresh JWTs and tracks issued refresh
//! tokens by hash.
//!
//! Verification never fails loudly: every problem (bad signature, expiry,
//! unknown or stale record, storage error) collapses to `None` and the
//! caller picks the HTTP status.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::UserId;
use serde::Serialize;
use serde::de::DeserializeOwned;
use user::{User, UserRole};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::entity::refresh_token::RefreshToken;
use crate::domain::repository::RefreshTokenRepository;
use crate::domain::value_object::claims::{AccessClaims, RefreshClaims};
use crate::domain::value_object::identity::{AccessIdentity, RefreshIdentity};
use crate::error::{AuthError, AuthResult};

/// Freshly issued credentials for a successful register/login
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct TokenService<T>
where
    T: RefreshTokenRepository,
{
    tokens: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<T> TokenService<T>
where
    T: RefreshTokenRepository,
{
    pub fn new(tokens: Arc<T>, config: Arc<AuthConfig>) -> Self {
        Self { tokens, config }
    }

    // ========================================================================
    // Issuing
    // ========================================================================

    pub fn generate_access_token(
        &self,
        user_id: UserId,
        email: &str,
        role: UserRole,
    ) -> AuthResult<String> {
        let secret = signing_secret(&self.config.access_token_secret, "ACCESS_TOKEN_SECRET")?;
        let iat = Utc::now().timestamp();
        let claims = AccessClaims {
            user_id,
            email: email.to_string(),
            role,
            iat,
            exp: iat + self.config.access_ttl_secs(),
        };
        sign(&claims, secret)
    }

    pub fn generate_refresh_token(&self, user_id: UserId) -> AuthResult<String> {
        let secret = signing_secret(&self.config.refresh_token_secret, "REFRESH_TOKEN_SECRET")?;
        let iat = Utc::now().timestamp();
        let claims = RefreshClaims {
            user_id,
            jti: Uuid::new_v4(),
            iat,
            exp: iat + self.config.refresh_ttl_secs(),
        };
        sign(&claims, secret)
    }

    /// Storage key for a raw refresh token
    pub fn hash_token(token: &str) -> String {
        platform::crypto::sha256_hex(token.as_bytes())
    }

    pub async fn save_refresh_token(
        &self,
        user_id: UserId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> AuthResult<RefreshToken> {
        let record = RefreshToken::new(user_id, Self::hash_token(token), expires_at);
        self.tokens.create(&record).await?;
        Ok(record)
    }

    /// Mint both tokens for `user` and persist the refresh token
    pub async fn issue_token_pair(&self, user: &User) -> AuthResult<TokenPair> {
        let access_token = self.generate_access_token(user.id, user.email.as_str(), user.role)?;
        let refresh_token = self.generate_refresh_token(user.id)?;

        let expires_at = Utc::now() + Duration::seconds(self.config.refresh_ttl_secs());
        self.save_refresh_token(user.id, &refresh_token, expires_at)
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    // ========================================================================
    // Verification
    // ========================================================================

    pub fn verify_access_token(&self, token: &str) -> Option<AccessIdentity> {
        verify_access_token(&self.config, token)
    }

    /// Signature and expiry, then the stored record. A record past its
    /// expiry is deleted on sight.
    pub async fn verify_refresh_token(&self, token: &str) -> Option<RefreshIdentity> {
        let claims: RefreshClaims = verify(token, &self.config.refresh_token_secret)?;

        let stored = match self.tokens.find_by_hash(&Self::hash_token(token)).await {
            Ok(Some(stored)) => stored,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Refresh token lookup failed");
                return None;
            }
        };

        if stored.is_expired() {
            if let Err(e) = self.tokens.delete_by_id(&stored.id).await {
                tracing::warn!(error = %e, "Failed to delete expired refresh token");
            }
            return None;
        }

        Some(claims.into())
    }

    /// Best effort; failures are logged and swallowed.
    pub async fn delete_refresh_token(&self, token: &str) {
        if let Err(e) = self.tokens.delete_by_hash(&Self::hash_token(token)).await {
            tracing::warn!(error = %e, "Failed to delete refresh token");
        }
    }
}

/// Signature and expiry only; access tokens are not tracked, so no
/// storage is involved.
pub fn verify_access_token(config: &AuthConfig, token: &str) -> Option<AccessIdentity> {
    let claims: AccessClaims = verify(token, &config.access_token_secret)?;
    Some(claims.into())
}

// ============================================================================
// JWT helpers
// ============================================================================

fn signing_secret<'a>(secret: &'a str, name: &str) -> AuthResult<&'a [u8]> {
    if secret.is_empty() {
        return Err(AuthError::Configuration(format!("{name} is not configured")));
    }
    Ok(secret.as_bytes())
}

fn sign<C: Serialize>(claims: &C, secret: &[u8]) -> AuthResult<String> {
    let token = encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )?;
    Ok(token)
}

fn verify<C: DeserializeOwned>(token: &str, secret: &str) -> Option<C> {
    if secret.is_empty() {
        return None;
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    match decode::<C>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            tracing::debug!(error = %e, "Token verification failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryRefreshTokenRepository;
    use platform::password::ClearTextPassword;
    use user::Email;

    fn service(repo: &MemoryRefreshTokenRepository) -> TokenService<MemoryRefreshTokenRepository> {
        TokenService::new(Arc::new(repo.clone()), Arc::new(AuthConfig::development()))
    }

    fn user() -> User {
        let hash = ClearTextPassword::new("secret".into())
            .unwrap()
            .hash_blocking(4)
            .unwrap();
        User::new(Email::new("a@x.com").unwrap(), hash, None, UserRole::Admin)
    }

    #[test]
    fn test_access_token_roundtrip() {
        let svc = service(&MemoryRefreshTokenRepository::new());
        let user_id = UserId::new();
        let token = svc
            .generate_access_token(user_id, "a@x.com", UserRole::Admin)
            .unwrap();

        let identity = svc.verify_access_token(&token).unwrap();
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.email, "a@x.com");
        assert_eq!(identity.role, UserRole::Admin);
    }

    #[test]
    fn test_tampered_access_token_is_rejected() {
        let svc = service(&MemoryRefreshTokenRepository::new());
        let token = svc
            .generate_access_token(UserId::new(), "a@x.com", UserRole::User)
            .unwrap();

        // Flip one character of the signature
        let mut tampered = token.clone().into_bytes();
        let last = tampered.len() - 2;
        tampered[last] = if tampered[last] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        assert!(svc.verify_access_token(&tampered).is_none());
        assert!(svc.verify_access_token("not-a-jwt").is_none());
    }

    #[test]
    fn test_tokens_are_not_interchangeable() {
        let svc = service(&MemoryRefreshTokenRepository::new());
        let refresh = svc.generate_refresh_token(UserId::new()).unwrap();
        assert!(svc.verify_access_token(&refresh).is_none());

        let other = service(&MemoryRefreshTokenRepository::new());
        let access = svc
            .generate_access_token(UserId::new(), "a@x.com", UserRole::User)
            .unwrap();
        assert!(other.verify_access_token(&access).is_none());
    }

    #[test]
    fn test_expired_access_token_is_rejected() {
        let config = AuthConfig::development();
        let iat = Utc::now().timestamp() - 3600;
        let claims = AccessClaims {
            user_id: UserId::new(),
            email: "a@x.com".into(),
            role: UserRole::User,
            iat,
            exp: iat + 1800,
        };
        let token = sign(&claims, config.access_token_secret.as_bytes()).unwrap();

        let svc = TokenService::new(Arc::new(MemoryRefreshTokenRepository::new()), Arc::new(config));
        assert!(svc.verify_access_token(&token).is_none());
    }

    #[test]
    fn test_missing_secret_is_configuration_error() {
        let svc = TokenService::new(
            Arc::new(MemoryRefreshTokenRepository::new()),
            Arc::new(AuthConfig::default()),
        );
        let err = svc
            .generate_access_token(UserId::new(), "a@x.com", UserRole::User)
            .unwrap_err();
        assert!(matches!(err, AuthError::Configuration(_)));
        assert!(matches!(
            svc.generate_refresh_token(UserId::new()),
            Err(AuthError::Configuration(_))
        ));
    }

    #[test]
    fn test_refresh_tokens_are_unique_per_issue() {
        let svc = service(&MemoryRefreshTokenRepository::new());
        let user_id = UserId::new();
        let a = svc.generate_refresh_token(user_id).unwrap();
        let b = svc.generate_refresh_token(user_id).unwrap();
        assert_ne!(a, b);
        assert_ne!(
            TokenService::<MemoryRefreshTokenRepository>::hash_token(&a),
            TokenService::<MemoryRefreshTokenRepository>::hash_token(&b)
        );
    }

    #[test]
    fn test_hash_token_is_hex_sha256() {
        let hash = TokenService::<MemoryRefreshTokenRepository>::hash_token("token");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[tokio::test]
    async fn test_issue_pair_stores_only_the_hash() {
        let repo = MemoryRefreshTokenRepository::new();
        let svc = service(&repo);
        let user = user();

        let pair = svc.issue_token_pair(&user).await.unwrap();

        let hash = TokenService::<MemoryRefreshTokenRepository>::hash_token(&pair.refresh_token);
        let stored = repo.find_by_hash(&hash).await.unwrap().unwrap();
        assert_eq!(stored.user_id, user.id);
        assert_ne!(stored.token_hash, pair.refresh_token);
        assert!(stored.expires_at > Utc::now() + Duration::days(6));

        let identity = svc.verify_refresh_token(&pair.refresh_token).await.unwrap();
        assert_eq!(identity.user_id, user.id);
    }

    #[tokio::test]
    async fn test_unstored_refresh_token_is_rejected() {
        let svc = service(&MemoryRefreshTokenRepository::new());
        let token = svc.generate_refresh_token(UserId::new()).unwrap();
        assert!(svc.verify_refresh_token(&token).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_stored_refresh_token_is_removed() {
        let repo = MemoryRefreshTokenRepository::new();
        let svc = service(&repo);
        let user_id = UserId::new();

        // JWT still valid, stored record already expired
        let token = svc.generate_refresh_token(user_id).unwrap();
        svc.save_refresh_token(user_id, &token, Utc::now() - Duration::seconds(1))
            .await
            .unwrap();
        assert_eq!(repo.len().await, 1);

        assert!(svc.verify_refresh_token(&token).await.is_none());
        assert!(repo.is_empty().await);

        // Second attempt finds nothing and still yields None
        assert!(svc.verify_refresh_token(&token).await.is_none());
    }

    #[tokio::test]
    async fn test_delete_refresh_token_is_idempotent() {
        let repo = MemoryRefreshTokenRepository::new();
        let svc = service(&repo);
        let pair = svc.issue_token_pair(&user()).await.unwrap();

        svc.delete_refresh_token(&pair.refresh_token).await;
        assert!(repo.is_empty().await);
        svc.delete_refresh_token(&pair.refresh_token).await;
        assert!(svc.verify_refresh_token(&pair.refresh_token).await.is_none());
    }
}
