/**
 * Server Initialization
 *
 * Builds the credential service from its configuration and a connected
 * store, then assembles the router around it.
 */

use axum::Router;

use crate::backend::auth::{CredentialService, SqliteUserStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::AuthConfig;

/// Create and configure the Axum application
///
/// `config` must already be validated; a missing signing secret is caught
/// when it is loaded, before any of this runs.
pub fn create_app(config: &AuthConfig, store: SqliteUserStore) -> Router<()> {
    tracing::info!(
        "Initializing credential service (token ttl {}s, bcrypt cost {})",
        config.token_ttl.as_secs(),
        config.hash_cost
    );

    let app_state = AppState::new(CredentialService::new(store, config));

    create_router(app_state)
}
