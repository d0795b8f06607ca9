/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * Unknown emails and wrong passwords both answer 401 with the same body.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::handlers::validation::validate_login;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - the body is not a JSON object of the expected shape,
///   or a field failed validation
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - store or signing failed
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Login request for: {}", request.email);

    validate_login(&request).map_err(BackendError::validation)?;

    let issued = state
        .credentials
        .authenticate(&request.email, &request.password)
        .await?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token: issued.token,
        user_id: issued.subject_id,
    }))
}
