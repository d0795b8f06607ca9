/**
 * Credential Service
 *
 * Orchestrates the three credential operations over a user store:
 *
 * 1. **Register**: lookup by email → hash secret → insert → issue token
 * 2. **Authenticate**: lookup by email → verify secret → issue token
 * 3. **Validate**: extract bearer token → verify signature and expiry
 *
 * Each operation stops at its first failure. Register touches the store
 * with one lookup and at most one insert, Authenticate with one lookup, and
 * Validate not at all.
 *
 * bcrypt runs on the blocking thread pool so it does not stall the runtime.
 */

use std::sync::Arc;

use crate::backend::auth::hasher::SecretHasher;
use crate::backend::auth::sessions::{Clock, SystemClock, TokenIssuer, TokenVerifier};
use crate::backend::auth::users::{StoreError, UserId, UserStore};
use crate::backend::error::AuthError;
use crate::shared::AuthConfig;

/// Scheme prefix expected in the `Authorization` header
pub const BEARER_PREFIX: &str = "Bearer ";

/// Token handed back on successful Register or Authenticate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub subject_id: UserId,
}

/// Result of a successful token validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStatus {
    pub valid: bool,
    pub subject_id: UserId,
}

/// Extract the token from a raw `Authorization` header value
///
/// Returns `None` when the header is absent or not a `Bearer` credential.
pub fn extract_bearer(header: Option<&str>) -> Option<&str> {
    header?.strip_prefix(BEARER_PREFIX)
}

/// Register / Authenticate / Validate over a user store
pub struct CredentialService<S> {
    store: S,
    hasher: SecretHasher,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
}

impl<S: UserStore> CredentialService<S> {
    /// Create a service using the wall clock
    pub fn new(store: S, config: &AuthConfig) -> Self {
        Self::with_clock(store, config, Arc::new(SystemClock))
    }

    /// Create a service with an explicit clock
    pub fn with_clock(store: S, config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        let secret = config.jwt_secret.as_bytes();
        Self {
            store,
            hasher: SecretHasher::new(config.hash_cost),
            issuer: TokenIssuer::new(secret, config.token_ttl, clock.clone()),
            verifier: TokenVerifier::new(secret, clock),
        }
    }

    /// Underlying user store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a new identity and issue its first token
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        secret: &str,
    ) -> Result<IssuedToken, AuthError> {
        let existing = self
            .store
            .find_by_email(email)
            .await
            .map_err(|e| AuthError::internal("Failed to look up email", e))?;
        if existing.is_some() {
            tracing::warn!("Email already exists: {}", email);
            return Err(AuthError::DuplicateEmail);
        }

        let verifier = self.hash_secret(secret).await?;

        let subject_id = match self.store.insert(name, email, &verifier).await {
            Ok(id) => id,
            Err(StoreError::Conflict) => {
                tracing::warn!("Email claimed concurrently: {}", email);
                return Err(AuthError::DuplicateEmail);
            }
            Err(e) => return Err(AuthError::internal("Failed to create user", e)),
        };

        let token = self.issue(subject_id)?;
        tracing::info!("User registered successfully: {} ({})", subject_id, email);

        Ok(IssuedToken { token, subject_id })
    }

    /// Check an email/secret pair and issue a token
    pub async fn authenticate(&self, email: &str, secret: &str) -> Result<IssuedToken, AuthError> {
        let identity = self
            .store
            .find_by_email(email)
            .await
            .map_err(|e| AuthError::internal("Database error", e))?
            .ok_or_else(|| {
                tracing::warn!("User not found: {}", email);
                AuthError::InvalidCredentials
            })?;

        if !self
            .verify_secret(secret, identity.secret_verifier.clone())
            .await?
        {
            tracing::warn!("Invalid password for user: {}", email);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issue(identity.id)?;
        tracing::info!("User logged in successfully: {} ({})", identity.id, email);

        Ok(IssuedToken {
            token,
            subject_id: identity.id,
        })
    }

    /// Validate the bearer token in a raw `Authorization` header value
    pub fn validate_token(&self, header: Option<&str>) -> Result<TokenStatus, AuthError> {
        let token = extract_bearer(header).ok_or_else(|| {
            tracing::warn!("Missing or malformed authorization header");
            AuthError::MissingToken
        })?;

        let subject_id = self.verifier.verify(token).map_err(|e| {
            tracing::warn!("Invalid token: {}", e);
            AuthError::InvalidToken
        })?;

        Ok(TokenStatus {
            valid: true,
            subject_id,
        })
    }

    async fn hash_secret(&self, secret: &str) -> Result<String, AuthError> {
        let hasher = self.hasher;
        let secret = secret.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&secret))
            .await
            .map_err(|e| AuthError::internal("Hashing task failed", e))?
            .map_err(|e| AuthError::internal("Failed to hash password", e))
    }

    async fn verify_secret(&self, secret: &str, verifier: String) -> Result<bool, AuthError> {
        let hasher = self.hasher;
        let secret = secret.to_string();
        tokio::task::spawn_blocking(move || hasher.verify(&secret, &verifier))
            .await
            .map_err(|e| AuthError::internal("Password verification task failed", e))
    }

    fn issue(&self, subject_id: UserId) -> Result<String, AuthError> {
        self.issuer
            .issue(subject_id)
            .map_err(|e| AuthError::internal("Failed to create token", e))
    }
}
