/**
 * Application State Management
 *
 * `AppState` is cloned into every handler. The credential service inside is
 * immutable after startup and shared through an `Arc`; the only mutable
 * state lives in the database behind the store.
 */

use std::sync::Arc;

use crate::backend::auth::{CredentialService, SqliteUserStore};

/// Credential service as wired into the server
pub type Credentials = CredentialService<SqliteUserStore>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<Credentials>,
}

impl AppState {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials: Arc::new(credentials),
        }
    }
}
