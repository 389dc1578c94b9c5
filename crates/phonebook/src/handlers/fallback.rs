//! Catch-all responder for requests no route or static file answered.

use axum::{http::StatusCode, Json};

use super::error::ErrorBody;

/// Body message for unmatched requests.
pub const UNKNOWN_ENDPOINT_MESSAGE: &str = "Unknown endpoint";

/// Unknown endpoint: always 404 `{"error": "Unknown endpoint"}`.
pub async fn unknown_endpoint() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(UNKNOWN_ENDPOINT_MESSAGE)),
    )
}
