/**
 * Authentication Handler Types
 *
 * Request and response bodies for the register, login and validate-token
 * endpoints. Request fields default to empty strings so that a missing field
 * is reported by request validation rather than by the JSON extractor.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::UserId;

/// Register request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email address, the unique login key
    #[serde(default)]
    pub email: String,
    /// Plaintext password (hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Auth response
///
/// Returned by register and login.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub message: String,
    /// Bearer token (7-day expiration by default)
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: UserId,
}

/// Validate-token response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenValidResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}
