use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::AppState;

#[derive(Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
    pub exchange_logging: ExchangeLoggingInfo,
}

#[derive(Serialize, Deserialize)]
pub struct ExchangeLoggingInfo {
    pub enabled: bool,
    pub sink: String,
    pub include_request_body: bool,
    pub include_response_body: bool,
}

/// Plain-text liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

pub async fn health_detailed(State(state): State<AppState>) -> Json<DetailedHealthResponse> {
    info!("Detailed health check requested");

    let logging = &state.config.logging;

    Json(DetailedHealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        exchange_logging: ExchangeLoggingInfo {
            enabled: logging.enabled,
            sink: logging.sink.as_str().to_string(),
            include_request_body: logging.include_request_body,
            include_response_body: logging.include_response_body,
        },
    })
}
