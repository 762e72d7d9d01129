//! Server Configuration
//!
//! Everything the binary reads from the environment, validated once at
//! startup.

use std::net::SocketAddr;

use anyhow::{Context, bail};
use auth::AuthConfig;
use user::UserConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    /// `APP_ENV=production`; turns on Secure cookies
    pub production: bool,
    pub frontend_origins: Vec<String>,
    pub access_token_secret: String,
    pub refresh_token_secret: String,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let access_token_secret = required_secret(&lookup, "ACCESS_TOKEN_SECRET")?;
        let refresh_token_secret = required_secret(&lookup, "REFRESH_TOKEN_SECRET")?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let production = lookup("APP_ENV").is_some_and(|env| env.trim() == "production");

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url,
            database_max_connections,
            port,
            production,
            frontend_origins,
            access_token_secret,
            refresh_token_secret,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig::new(
            self.access_token_secret.clone(),
            self.refresh_token_secret.clone(),
            self.production,
        )
    }

    pub fn user_config(&self) -> UserConfig {
        UserConfig::default()
    }
}

fn required_secret(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<String> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => bail!("{key} must not be empty"),
        None => bail!("{key} must be set"),
    }
}
