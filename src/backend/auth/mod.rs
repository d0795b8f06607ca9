//! Authentication Module
//!
//! This module handles the credential lifecycle: secret hashing, token
//! issuance and verification, and the Register / Authenticate / Validate
//! operations built on them.
//!
//! # Architecture
//!
//! - **`hasher`** - bcrypt secret hashing and verification
//! - **`sessions`** - JWT issuance and verification
//! - **`users`** - Identity model and the user store interface
//! - **`service`** - Credential service orchestrating the above
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── hasher.rs       - Secret hashing
//! ├── sessions.rs     - Token issuer and verifier
//! ├── users.rs        - Identity model and stores
//! ├── service.rs      - Credential service
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → identity stored → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Validate**: bearer token → signature and expiry checked → `{valid: true}`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless HS256 JWTs; nothing is stored per token
//! - Tokens expire after 7 days
//! - Invalid credentials return 401 (no information leakage)
//!
//! # Example
//!
//! ```rust,no_run
//! use show_auth::backend::auth::{CredentialService, MemoryUserStore};
//! use show_auth::shared::AuthConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuthConfig::builder().jwt_secret("change-me").build()?;
//! let service = CredentialService::new(MemoryUserStore::new(), &config);
//!
//! let issued = service.register("Alice", "a@x.com", "secret1").await?;
//! let header = format!("Bearer {}", issued.token);
//! assert!(service.validate_token(Some(&header))?.valid);
//! # Ok(())
//! # }
//! ```

/// Secret hashing
pub mod hasher;

/// JWT token generation and validation
pub mod sessions;

/// Identity model and store implementations
pub mod users;

/// Credential service
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, register, validate_token};
pub use hasher::{HashError, SecretHasher, MAX_SECRET_BYTES};
pub use service::{CredentialService, IssuedToken, TokenStatus};
pub use sessions::{Claims, Clock, SystemClock, TokenIssuer, TokenRejection, TokenVerifier};
pub use users::{Identity, MemoryUserStore, SqliteUserStore, StoreError, UserId, UserStore};
