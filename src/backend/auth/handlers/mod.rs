//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints. They validate request
//! fields and delegate everything else to the credential service.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Request and response types
//! ├── validation.rs - Request field checks
//! ├── register.rs   - User registration handler
//! ├── login.rs      - User authentication handler
//! └── validate.rs   - Token validation handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`validate_token`** - GET /api/auth/validate-token

/// Request and response types
pub mod types;

/// Request field validation
pub mod validation;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Validate-token handler
pub mod validate;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, RegisterRequest, TokenValidResponse};

// Re-export handlers
pub use login::login;
pub use register::register;
pub use validate::validate_token;
