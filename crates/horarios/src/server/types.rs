//! Shared types for the HTTP API surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// A machine-readable API error. Converts into a JSON response of the form
/// `{"error": <message>, "detail": <detail>?}` with the given status code.
pub struct ApiErrorType {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl From<(StatusCode, &str, Option<String>)> for ApiErrorType {
    fn from((status, message, detail): (StatusCode, &str, Option<String>)) -> Self {
        Self {
            status,
            message: message.to_string(),
            detail,
        }
    }
}

impl From<(StatusCode, &str)> for ApiErrorType {
    fn from((status, message): (StatusCode, &str)) -> Self {
        Self::from((status, message, None))
    }
}

impl IntoResponse for ApiErrorType {
    fn into_response(self) -> Response {
        let body = match self.detail {
            Some(detail) => json!({ "error": self.message, "detail": detail }),
            None => json!({ "error": self.message }),
        };

        (self.status, Json(body)).into_response()
    }
}
