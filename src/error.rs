use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to write log entry to {}: {source}", path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read request body: {0}")]
    RequestBody(#[source] axum::Error),

    #[error("failed to read response body: {0}")]
    ResponseBody(#[source] axum::Error),
}

impl IntoResponse for LoggingError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request/response logging failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
