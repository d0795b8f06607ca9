/**
 * Validate Token Handler
 *
 * GET /api/auth/validate-token
 *
 * Reads `Authorization: Bearer <token>` and answers `{"valid": true}`, or
 * 401 with `{"valid": false, "error": ...}`. No store access.
 */

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::Json,
};

use crate::backend::auth::handlers::types::TokenValidResponse;
use crate::backend::server::state::AppState;

/// Validate-token handler
pub async fn validate_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> (StatusCode, Json<TokenValidResponse>) {
    // A header that is not visible ASCII is treated as absent
    let header = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok());

    match state.credentials.validate_token(header) {
        Ok(status) => {
            tracing::debug!("Token valid for user {}", status.subject_id);
            (
                StatusCode::OK,
                Json(TokenValidResponse {
                    valid: status.valid,
                    error: None,
                }),
            )
        }
        Err(err) => (
            err.status_code(),
            Json(TokenValidResponse {
                valid: false,
                error: Some(err.public_message()),
            }),
        ),
    }
}
