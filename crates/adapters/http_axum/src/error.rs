//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use dinehub_domain::error::DineHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`DineHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(DineHubError);

impl From<DineHubError> for ApiError {
    fn from(err: DineHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DineHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            DineHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            DineHubError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            DineHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
