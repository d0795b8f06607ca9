/**
 * Backend Error Types
 *
 * # Error Types
 *
 * - `AuthError` - outcome of a credential operation that did not succeed
 * - `BackendError` - everything a handler can return, including rejected input
 *
 * `AuthError::Internal` keeps the underlying cause for the logs. The message
 * sent to the caller is always the generic one from `public_message`.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Credential operation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Register: another identity already uses this email
    #[error("Email already in use")]
    DuplicateEmail,

    /// Authenticate: unknown email or wrong secret (deliberately the same)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// ValidateToken: no `Bearer` credential in the header
    #[error("No token provided")]
    MissingToken,

    /// ValidateToken: signature, encoding or expiry check failed
    #[error("Invalid token")]
    InvalidToken,

    /// Store, hashing or signing failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Build an internal error and log its cause
    pub fn internal(context: &str, cause: impl std::fmt::Display) -> Self {
        tracing::error!("{}: {}", context, cause);
        Self::Internal(format!("{}: {}", context, cause))
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::MissingToken | Self::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show the caller
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Credential operation failed
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Request fields were rejected before reaching the credential service
    #[error("Validation failed on {} field(s)", errors.len())]
    Validation {
        /// Every failing field, in request order
        errors: Vec<SharedError>,
    },

    /// Body missing, not JSON, or the wrong shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::InvalidBody(rejection.body_text())
    }
}

impl BackendError {
    /// Create a validation error from a list of field errors
    pub fn validation(errors: Vec<SharedError>) -> Self {
        Self::Validation { errors }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(err) => err.status_code(),
            Self::Validation { .. } | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error message shown to the caller
    pub fn message(&self) -> String {
        match self {
            Self::Auth(err) => err.public_message(),
            Self::Validation { .. } | Self::InvalidBody(_) => self.to_string(),
        }
    }
}
