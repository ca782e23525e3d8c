use axum::{
    body::Bytes,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
};
use tracing::{info, warn};

/// Returns the request body unchanged, keeping its content type.
pub async fn echo(headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    info!(bytes = body.len(), "Echo requested");

    if body.is_empty() {
        warn!("Echo request without body");
        return StatusCode::NO_CONTENT.into_response();
    }

    match headers.get(header::CONTENT_TYPE) {
        Some(content_type) => ([(header::CONTENT_TYPE, content_type.clone())], body).into_response(),
        None => body.into_response(),
    }
}
