/**
 * Request Validation
 *
 * Field checks that run before the credential service is called. Every
 * failing field is reported, not just the first one.
 *
 * - register: name required, valid email, password of at least 6 characters
 *   and at most `MAX_SECRET_BYTES` bytes
 * - login: valid email, password required
 */

use crate::backend::auth::handlers::types::{LoginRequest, RegisterRequest};
use crate::backend::auth::hasher::MAX_SECRET_BYTES;
use crate::shared::SharedError;

/// Shortest accepted password at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Basic email shape check
///
/// Exactly one `@`, a non-empty local part, and a domain containing a dot
/// that is neither its first nor last character. No whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// Validate a register request
pub fn validate_register(request: &RegisterRequest) -> Result<(), Vec<SharedError>> {
    let mut errors = Vec::new();

    if request.name.trim().is_empty() {
        errors.push(SharedError::validation("name", "Name is required"));
    }
    if !is_valid_email(&request.email) {
        errors.push(SharedError::validation("email", "Valid email is required"));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(SharedError::validation(
            "password",
            "Password must be at least 6 characters",
        ));
    } else if request.password.len() > MAX_SECRET_BYTES {
        errors.push(SharedError::validation(
            "password",
            format!("Password must be at most {} bytes", MAX_SECRET_BYTES),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a login request
pub fn validate_login(request: &LoginRequest) -> Result<(), Vec<SharedError>> {
    let mut errors = Vec::new();

    if !is_valid_email(&request.email) {
        errors.push(SharedError::validation("email", "Valid email is required"));
    }
    if request.password.is_empty() {
        errors.push(SharedError::validation("password", "Password is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
