//! Server Module
//!
//! Server initialization and configuration.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState
//! ├── config.rs       - Database and port configuration
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AuthConfig::from_env` and `ServerConfig::from_env`
//! 2. **Store**: connect SQLite and run migrations
//! 3. **Router Creation**: credential service wrapped in `AppState`, routes attached

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{load_database, ServerConfig};
pub use init::create_app;
pub use state::AppState;
