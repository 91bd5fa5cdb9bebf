// src/config.rs
use crate::infrastructure::security::token::ExpiryPolicy;
use std::{env, time::Duration};
use thiserror::Error;

/// HS256 keys shorter than the digest size weaken the signature.
const MIN_SECRET_BYTES: usize = 32;

#[derive(Clone)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    token_secret: String,
    token_ttl: Duration,
    token_expiry_policy: ExpiryPolicy,
    database_max_connections: u32,
    database_acquire_timeout: Duration,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://events.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

const fn default_token_ttl() -> u64 {
    3600
}

const fn default_max_connections() -> u32 {
    10
}

const fn default_acquire_timeout() -> u64 {
    30
}

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    raw.map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got '{value}'")))
    })
}

impl AppConfig {
    /// Build configuration from environment variables, after loading a `.env` file if present.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// # Errors
    ///
    /// `ConfigError::Missing` without a `TOKEN_SECRET`, `ConfigError::Invalid` for a
    /// short secret, a zero TTL, an unknown expiry policy or a non-numeric setting.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let token_secret = lookup("TOKEN_SECRET").ok_or(ConfigError::Missing("TOKEN_SECRET"))?;
        if token_secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::Invalid(format!(
                "TOKEN_SECRET must be at least {MIN_SECRET_BYTES} bytes"
            )));
        }

        let token_ttl_secs = parse_number(
            "TOKEN_TTL_SECONDS",
            lookup("TOKEN_TTL_SECONDS"),
            default_token_ttl(),
        )?;
        if token_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "TOKEN_TTL_SECONDS must be positive".into(),
            ));
        }

        let token_expiry_policy = lookup("TOKEN_EXPIRY_POLICY")
            .map_or(Ok(ExpiryPolicy::default()), |raw| {
                raw.parse::<ExpiryPolicy>().map_err(ConfigError::Invalid)
            })?;

        let database_max_connections = parse_number(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            default_max_connections(),
        )?
        .max(1);

        let acquire_timeout_secs = parse_number(
            "DATABASE_ACQUIRE_TIMEOUT_SECONDS",
            lookup("DATABASE_ACQUIRE_TIMEOUT_SECONDS"),
            default_acquire_timeout(),
        )?;

        Ok(Self {
            database_url,
            listen_addr,
            token_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
            token_expiry_policy,
            database_max_connections,
            database_acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    #[must_use]
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    #[must_use]
    pub fn token_secret(&self) -> &[u8] {
        self.token_secret.as_bytes()
    }

    #[must_use]
    pub const fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    #[must_use]
    pub const fn token_expiry_policy(&self) -> ExpiryPolicy {
        self.token_expiry_policy
    }

    #[must_use]
    pub const fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    #[must_use]
    pub const fn database_acquire_timeout(&self) -> Duration {
        self.database_acquire_timeout
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url)
            .field("listen_addr", &self.listen_addr)
            .field("token_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("token_expiry_policy", &self.token_expiry_policy)
            .field("database_max_connections", &self.database_max_connections)
            .field("database_acquire_timeout", &self.database_acquire_timeout)
            .finish()
    }
}
