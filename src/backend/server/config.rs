/**
 * Server Configuration
 *
 * Loads the settings the server needs beyond the credential configuration:
 * where the user database lives and which port to listen on. Both come
 * from environment variables with defaults suitable for local development.
 */

use crate::backend::auth::{SqliteUserStore, StoreError};

/// Database used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://show.db?mode=rwc";
/// Port used when `SERVER_PORT` is not set or unparseable
pub const DEFAULT_PORT: u16 = 3000;

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `DATABASE_URL` and `SERVER_PORT`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|e| {
                tracing::warn!("Ignoring SERVER_PORT={:?}: {}", raw, e);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self { database_url, port }
    }
}

/// Connect the user store and run migrations
pub async fn load_database(database_url: &str) -> Result<SqliteUserStore, StoreError> {
    tracing::info!("Connecting to database...");
    let store = SqliteUserStore::connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to open user database: {}", e);
        e
    })?;
    tracing::info!("Database connection pool created successfully");
    Ok(store)
}
