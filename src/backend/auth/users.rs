/**
 * Identity Model and Store
 *
 * This module defines the stored identity and the narrow store interface the
 * credential service depends on: lookup by email and insert.
 *
 * # Uniqueness
 *
 * `insert` must be atomic insert-if-absent. A concurrent registration that
 * loses the race for an email gets `StoreError::Conflict`, never a second row.
 */

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use thiserror::Error;
use tokio::sync::RwLock;

/// Store-assigned identity id
pub type UserId = i64;

/// Identity struct representing a row in the users table
#[derive(Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Identity {
    /// Unique id assigned by the store
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Unique, case-sensitive lookup key
    pub email: String,
    /// bcrypt verifier of the secret
    pub secret_verifier: String,
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("secret_verifier", &"<redacted>")
            .finish()
    }
}

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// An identity with this email already exists
    #[error("email already registered")]
    Conflict,

    /// The backing database failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migrations could not be applied
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistent identity store keyed by email
pub trait UserStore: Send + Sync {
    /// Get identity by email, `None` if no such identity
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Identity>, StoreError>> + Send;

    /// Insert a new identity and return its id
    ///
    /// Fails with `StoreError::Conflict` if the email is already taken.
    fn insert(
        &self,
        name: &str,
        email: &str,
        secret_verifier: &str,
    ) -> impl Future<Output = Result<UserId, StoreError>> + Send;
}

/// SQLite-backed store
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    /// Wrap an existing pool (migrations must already be applied)
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and bring the schema up to date
    ///
    /// In-memory databases are limited to a single connection so every
    /// query sees the same database.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };
        let pool = options.connect(database_url).await?;

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self { pool })
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl UserStore for SqliteUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        let identity = sqlx::query_as::<_, Identity>(
            r#"
            SELECT id, name, email, password_hash AS secret_verifier
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(identity)
    }

    async fn insert(
        &self,
        name: &str,
        email: &str,
        secret_verifier: &str,
    ) -> Result<UserId, StoreError> {
        let row: Option<(i64,)> = sqlx::query_as(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES (?, ?, ?)
            ON CONFLICT(email) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(secret_verifier)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(id,)| id).ok_or(StoreError::Conflict)
    }
}

/// In-process store
///
/// Same contract as the SQLite store; the write lock makes insert-if-absent
/// atomic.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: RwLock<MemoryTable>,
}

#[derive(Debug, Default)]
struct MemoryTable {
    last_id: UserId,
    by_email: HashMap<String, Identity>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored identities
    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.inner.read().await.by_email.len()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        Ok(self.inner.read().await.by_email.get(email).cloned())
    }

    async fn insert(
        &self,
        name: &str,
        email: &str,
        secret_verifier: &str,
    ) -> Result<UserId, StoreError> {
        let mut table = self.inner.write().await;
        if table.by_email.contains_key(email) {
            return Err(StoreError::Conflict);
        }
        table.last_id += 1;
        let identity = Identity {
            id: table.last_id,
            name: name.to_string(),
            email: email.to_string(),
            secret_verifier: secret_verifier.to_string(),
        };
        table.by_email.insert(email.to_string(), identity);
        Ok(table.last_id)
    }
}
