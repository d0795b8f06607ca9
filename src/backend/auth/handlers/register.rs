/**
 * Register Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Parse the body, then validate name, email and password
 * 2. Hand off to the credential service (duplicate check, hash, insert, token)
 * 3. Return the token and the new user id with 201 Created
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::handlers::validation::validate_register;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - the body is not a JSON object of the expected shape,
///   or a field failed validation
/// * `409 Conflict` - the email is already registered
/// * `500 Internal Server Error` - store, hashing or signing failed
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "Alice", "email": "a@x.com", "password": "secret1" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "message": "User registered successfully", "token": "eyJhbGciOi...", "userId": 1 }
/// ```
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let Json(request) = payload?;
    tracing::info!("Register request for email: {}", request.email);

    validate_register(&request).map_err(|errors| {
        tracing::warn!("Register request rejected: {} invalid field(s)", errors.len());
        BackendError::validation(errors)
    })?;

    let issued = state
        .credentials
        .register(&request.name, &request.email, &request.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            token: issued.token,
            user_id: issued.subject_id,
        }),
    ))
}
