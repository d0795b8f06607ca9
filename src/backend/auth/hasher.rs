/**
 * Secret Hashing
 *
 * One-way bcrypt transform of a plaintext secret into the verifier that is
 * stored with an identity, and the matching check. Every verifier embeds its
 * own random salt and cost, so hashing the same secret twice gives two
 * different verifiers that both verify.
 */

use thiserror::Error;

use crate::shared::config::DEFAULT_HASH_COST;

/// Longest secret hashed whole
///
/// bcrypt reads at most 72 bytes of key, and that includes the NUL
/// terminator appended to the secret.
pub const MAX_SECRET_BYTES: usize = 71;

/// Hashing failures
#[derive(Debug, Error)]
pub enum HashError {
    #[error("secret is {0} bytes, longer than {max}", max = MAX_SECRET_BYTES)]
    TooLong(usize),

    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// bcrypt-based secret hasher
///
/// Holds only the cost factor, so it is cheap to copy into a blocking task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretHasher {
    cost: u32,
}

impl Default for SecretHasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_COST)
    }
}

impl SecretHasher {
    /// Create a hasher with the given bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Cost factor applied to new verifiers
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext secret into a verifier
    ///
    /// CPU-bound; callers on an async runtime should run it on the blocking pool.
    /// Secrets longer than [`MAX_SECRET_BYTES`] are refused rather than cut short.
    pub fn hash(&self, secret: &str) -> Result<String, HashError> {
        if secret.len() > MAX_SECRET_BYTES {
            return Err(HashError::TooLong(secret.len()));
        }
        Ok(bcrypt::non_truncating_hash(secret, self.cost)?)
    }

    /// Check a plaintext secret against a stored verifier
    ///
    /// Comparison is constant-time (via bcrypt). A verifier that cannot be
    /// parsed, or a secret too long to hash whole, counts as a mismatch.
    pub fn verify(&self, secret: &str, verifier: &str) -> bool {
        if secret.len() > MAX_SECRET_BYTES {
            tracing::debug!("Secret of {} bytes is too long to verify", secret.len());
            return false;
        }
        match bcrypt::non_truncating_verify(secret, verifier) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::warn!("Stored verifier could not be checked: {}", e);
                false
            }
        }
    }
}
