/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/auth/validate-token` - Bearer token check
 */

use axum::Router;

use crate::backend::auth::{login, register, validate_token};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// All three routes are public; validate-token reads the
/// `Authorization` header itself.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/register", axum::routing::post(register))
        .route("/api/auth/login", axum::routing::post(login))
        .route(
            "/api/auth/validate-token",
            axum::routing::get(validate_token),
        )
}
