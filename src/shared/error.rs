//! Shared Error Types
//!
//! This module defines the request-level error types that are independent
//! of the server runtime. They describe input that was rejected before any
//! credential logic ran.
//!
//! # Usage
//!
//! ```rust
//! use show_auth::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Valid email is required");
//! assert_eq!(error.field(), "email");
//! ```
use serde::Serialize;
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Request field validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }

    /// Message intended for the caller
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }

    /// Serializable view used in error response bodies
    pub fn to_field_error(&self) -> FieldError {
        FieldError {
            field: self.field().to_string(),
            message: self.message().to_string(),
        }
    }
}

/// One entry of an `{"errors": [...]}` response body
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
