use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use domain::validation::ValidationError;

/// Maps domain errors onto HTTP responses. Validation failures carry
/// their full violation list so clients can highlight the offending
/// fields.
pub struct ApiError(pub domain::Error);

impl From<domain::Error> for ApiError {
    fn from(err: domain::Error) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(domain::Error::Validation(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            domain::Error::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation_failed",
                    "schema": err.schema,
                    "violations": err.violations,
                })),
            )
                .into_response(),

            domain::Error::NotFound { entity } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "not_found", "entity": entity })),
            )
                .into_response(),

            domain::Error::Uniqueness { field } => (
                StatusCode::CONFLICT,
                Json(json!({ "error": "conflict", "field": field })),
            )
                .into_response(),

            domain::Error::Forbidden => (
                StatusCode::FORBIDDEN,
                Json(json!({ "error": "forbidden" })),
            )
                .into_response(),

            domain::Error::Repository { message } => {
                tracing::error!("Repository failure: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal" })),
                )
                    .into_response()
            }
        }
    }
}
