//! Application configuration module
//!
//! Provides the credential configuration shared by the token issuer, the
//! token verifier and the secret hasher. It is loaded once at startup and
//! passed down explicitly; nothing reads the environment after that.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Environment variable holding the token signing secret
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";
/// Environment variable overriding the token validity window (seconds)
pub const TOKEN_TTL_ENV: &str = "TOKEN_TTL_SECS";
/// Environment variable overriding the bcrypt cost factor
pub const BCRYPT_COST_ENV: &str = "BCRYPT_COST";

/// Tokens are valid for 7 days after issuance
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);
/// bcrypt cost used when none is configured
pub const DEFAULT_HASH_COST: u32 = 10;
/// Lowest cost bcrypt accepts
pub const MIN_HASH_COST: u32 = 4;
/// Highest cost bcrypt accepts
pub const MAX_HASH_COST: u32 = 31;

/// Credential configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared HMAC key for signing and verifying tokens
    pub jwt_secret: String,
    /// How long an issued token stays valid
    pub token_ttl: Duration,
    /// bcrypt cost factor for new verifiers
    pub hash_cost: u32,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}

impl AuthConfig {
    /// Create a new AuthConfigBuilder
    pub fn builder() -> AuthConfigBuilder {
        AuthConfigBuilder::default()
    }

    /// Load the configuration from process environment variables
    ///
    /// `JWT_SECRET` is required; the other values fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(secret) = lookup(JWT_SECRET_ENV) {
            builder = builder.jwt_secret(secret);
        }

        if let Some(raw) = lookup(TOKEN_TTL_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                key: TOKEN_TTL_ENV,
                message: e.to_string(),
            })?;
            builder = builder.token_ttl(Duration::from_secs(secs));
        }

        if let Some(raw) = lookup(BCRYPT_COST_ENV) {
            let cost = raw.trim().parse::<u32>().map_err(|e| ConfigError::InvalidValue {
                key: BCRYPT_COST_ENV,
                message: e.to_string(),
            })?;
            builder = builder.hash_cost(cost);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue(JWT_SECRET_ENV));
        }
        if self.token_ttl.as_secs() == 0 {
            return Err(ConfigError::InvalidValue {
                key: TOKEN_TTL_ENV,
                message: "token validity window must be at least one second".to_string(),
            });
        }
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&self.hash_cost) {
            return Err(ConfigError::InvalidValue {
                key: BCRYPT_COST_ENV,
                message: format!(
                    "cost {} outside {}..={}",
                    self.hash_cost, MIN_HASH_COST, MAX_HASH_COST
                ),
            });
        }
        Ok(())
    }
}

/// Builder for AuthConfig
#[derive(Debug, Default)]
pub struct AuthConfigBuilder {
    jwt_secret: Option<String>,
    token_ttl: Option<Duration>,
    hash_cost: Option<u32>,
}

impl AuthConfigBuilder {
    /// Set the signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token validity window
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Set the bcrypt cost factor
    pub fn hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = Some(cost);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AuthConfig, ConfigError> {
        let config = AuthConfig {
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue(JWT_SECRET_ENV))?,
            token_ttl: self.token_ttl.unwrap_or(DEFAULT_TOKEN_TTL),
            hash_cost: self.hash_cost.unwrap_or(DEFAULT_HASH_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}
