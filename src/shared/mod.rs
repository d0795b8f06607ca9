//! Shared Module
//!
//! Types that do not depend on the server runtime: credential configuration
//! and request validation errors. They compile without the `ssr` feature.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::{FieldError, SharedError};
pub use config::{AuthConfig, AuthConfigBuilder, ConfigError};
