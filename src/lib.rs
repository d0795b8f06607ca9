//! Show Auth - Main Library
//!
//! Credential service for the Show API: account registration, password
//! authentication and stateless bearer-token validation.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the service and its callers
//!   - Configuration (`AuthConfig`)
//!   - Field-level validation errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Secret hasher, token issuer and token verifier
//!   - Credential service over a pluggable user store
//!   - Axum HTTP handlers and router
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (bcrypt, JWT, SQLite, Axum).
//!   On by default.
//!
//! # Usage
//!
//! ```rust,no_run
//! use show_auth::backend::create_app;
//! use show_auth::backend::server::load_database;
//! use show_auth::shared::AuthConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuthConfig::from_env()?;
//! let store = load_database("sqlite://show.db?mode=rwc").await?;
//! let app = create_app(&config, store);
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::ConfigError` for startup configuration
//! - `backend::AuthError` for credential operations
//! - `backend::BackendError` for everything a handler returns

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
