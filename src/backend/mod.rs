//! Backend Module
//!
//! All server-side code for the credential service. Only compiled when the
//! `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`auth`** - Hasher, token issuer/verifier, user stores, credential service, handlers
//! - **`error`** - Backend-specific error types and their HTTP mapping
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`server`** - Server configuration, application state, initialization
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── auth/           - Authentication
//! ├── error/          - Error types
//! ├── routes/         - Route configuration
//! └── server/         - Server initialization and state
//! ```
//!
//! # State Management
//!
//! `AppState` holds one `CredentialService` behind an `Arc`. The service is
//! immutable after startup; the user store is the only shared mutable state
//! and serializes writes itself.

/// Authentication and user management
pub mod auth;

/// Backend error types
pub mod error;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// Re-export commonly used types
pub use auth::CredentialService;
pub use error::{AuthError, BackendError};
pub use server::create_app;
