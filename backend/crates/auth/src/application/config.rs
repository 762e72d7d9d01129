//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;
use user::UserConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 secret for access tokens
    pub access_token_secret: String,
    /// HS256 secret for refresh tokens
    pub refresh_token_secret: String,
    /// Access token lifetime (30 minutes)
    pub access_token_ttl: Duration,
    /// Refresh token lifetime (7 days)
    pub refresh_token_ttl: Duration,
    pub access_cookie_name: String,
    pub refresh_cookie_name: String,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// bcrypt work factor for registration
    pub password_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_secret: String::new(),
            refresh_token_secret: String::new(),
            access_token_ttl: Duration::from_secs(30 * 60), // 30 minutes
            refresh_token_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            access_cookie_name: "accessToken".to_string(),
            refresh_cookie_name: "refreshToken".to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
            password_cost: UserConfig::default().password_cost,
        }
    }
}

impl AuthConfig {
    pub fn new(
        access_token_secret: impl Into<String>,
        refresh_token_secret: impl Into<String>,
        cookie_secure: bool,
    ) -> Self {
        Self {
            access_token_secret: access_token_secret.into(),
            refresh_token_secret: refresh_token_secret.into(),
            cookie_secure,
            ..Default::default()
        }
    }

    /// Create config with random signing secrets
    pub fn with_random_secrets() -> Self {
        Self {
            access_token_secret: platform::crypto::random_secret(32),
            refresh_token_secret: platform::crypto::random_secret(32),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secrets()
        }
    }

    pub fn access_ttl_secs(&self) -> i64 {
        self.access_token_ttl.as_secs() as i64
    }

    pub fn refresh_ttl_secs(&self) -> i64 {
        self.refresh_token_ttl.as_secs() as i64
    }

    pub fn access_cookie(&self) -> CookieConfig {
        self.cookie(&self.access_cookie_name, self.access_ttl_secs())
    }

    pub fn refresh_cookie(&self) -> CookieConfig {
        self.cookie(&self.refresh_cookie_name, self.refresh_ttl_secs())
    }

    fn cookie(&self, name: &str, max_age_secs: i64) -> CookieConfig {
        CookieConfig {
            same_site: self.cookie_same_site,
            ..CookieConfig::new(name, max_age_secs, self.cookie_secure)
        }
    }

    /// Settings handed to the shared user-creation path
    pub fn user_config(&self) -> UserConfig {
        UserConfig {
            password_cost: self.password_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_lifetimes() {
        let config = AuthConfig::default();
        assert_eq!(config.access_cookie().max_age_secs, Some(1800));
        assert_eq!(config.refresh_cookie().max_age_secs, Some(604_800));
        assert_eq!(config.access_cookie().name, "accessToken");
        assert_eq!(config.refresh_cookie().name, "refreshToken");
    }

    #[test]
    fn test_development_config() {
        let config = AuthConfig::development();
        assert!(!config.cookie_secure);
        assert!(!config.access_token_secret.is_empty());
        assert_ne!(config.access_token_secret, config.refresh_token_secret);
        assert!(!config.access_cookie().build_set_cookie("t").contains("Secure"));
    }
}
