/**
 * Error Conversion
 *
 * `IntoResponse` for backend errors.
 *
 * # Response Format
 *
 * Validation failures list every rejected field:
 * ```json
 * { "errors": [ { "field": "email", "message": "Valid email is required" } ] }
 * ```
 *
 * Everything else, including unreadable bodies:
 * ```json
 * { "error": "Email already in use", "status": 409 }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::backend::error::types::{AuthError, BackendError};
use crate::shared::FieldError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            BackendError::Validation { errors } => {
                let errors: Vec<FieldError> = errors.iter().map(|e| e.to_field_error()).collect();
                json!({ "errors": errors })
            }
            BackendError::Auth(_) | BackendError::InvalidBody(_) => json!({
                "error": self.message(),
                "status": status.as_u16(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        BackendError::from(self).into_response()
    }
}
