/**
 * Session Tokens
 *
 * This module issues and verifies the signed bearer tokens handed out on
 * registration and login. Tokens are HS256 JWTs carrying the subject id,
 * the issue time and the expiry time.
 *
 * Expiry is checked here against the injected clock with zero leeway, and
 * only after the signature has verified: a token is valid while
 * `now < exp` and rejected from `exp` onwards.
 */

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::auth::users::UserId;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity id)
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Source of the current Unix time in seconds
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        chrono::Utc::now().timestamp().max(0) as u64
    }
}

impl<F> Clock for F
where
    F: Fn() -> u64 + Send + Sync,
{
    fn now(&self) -> u64 {
        self()
    }
}

/// Why a token was refused
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenRejection {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature does not match")]
    BadSignature,
    #[error("token has expired")]
    Expired,
    #[error("token subject is not an identity id")]
    InvalidSubject,
}

/// Signs new tokens
pub struct TokenIssuer {
    key: EncodingKey,
    ttl_secs: u64,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    /// Create an issuer for the given signing secret and validity window
    pub fn new(secret: &[u8], ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            key: EncodingKey::from_secret(secret),
            ttl_secs: ttl.as_secs(),
            clock,
        }
    }

    /// Validity window in seconds
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Create a token for an identity
    pub fn issue(&self, subject: UserId) -> Result<String, jsonwebtoken::errors::Error> {
        let now = self.clock.now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.key)
    }
}

/// Checks tokens produced by a [`TokenIssuer`] sharing the same secret
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenVerifier {
    /// Create a verifier for the given signing secret
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // exp is compared against our own clock below
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
            clock,
        }
    }

    /// Verify and decode a token
    pub fn decode_claims(&self, token: &str) -> Result<Claims, TokenRejection> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => TokenRejection::BadSignature,
                _ => TokenRejection::Malformed,
            }
        })?;
        let claims = data.claims;

        if self.clock.now() >= claims.exp {
            return Err(TokenRejection::Expired);
        }

        Ok(claims)
    }

    /// Verify a token and recover its subject id
    pub fn verify(&self, token: &str) -> Result<UserId, TokenRejection> {
        let claims = self.decode_claims(token)?;
        claims
            .sub
            .parse::<UserId>()
            .map_err(|_| TokenRejection::InvalidSubject)
    }
}
