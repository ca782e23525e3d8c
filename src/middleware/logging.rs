use axum::{
    body::{Body, Bytes, HttpBody},
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
    BoxError,
};
use std::sync::Arc;
use tracing::debug;

use super::capture::CapturedBody;
use crate::{
    error::LoggingError,
    sink::{LogEntry, LogSink},
};

/// Records both sides of an HTTP exchange.
///
/// The request entry is written before the downstream handler runs. The
/// response body is then buffered, written as the response entry, and handed
/// back to the client byte-for-byte.
#[derive(Debug, Clone)]
pub struct ExchangeLogger {
    sink: Arc<LogSink>,
    include_request_body: bool,
    include_response_body: bool,
}

impl ExchangeLogger {
    pub fn new(sink: impl Into<LogSink>) -> Self {
        Self {
            sink: Arc::new(sink.into()),
            include_request_body: false,
            include_response_body: true,
        }
    }

    pub fn include_request_body(mut self, enabled: bool) -> Self {
        self.include_request_body = enabled;
        self
    }

    pub fn include_response_body(mut self, enabled: bool) -> Self {
        self.include_response_body = enabled;
        self
    }

    pub fn sink(&self) -> &LogSink {
        &self.sink
    }

    pub async fn log_request(&self, request: Request) -> Result<Request, LoggingError> {
        let host = request
            .headers()
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
            .or_else(|| request.uri().authority().map(|a| a.to_string()));
        let content_type = content_type(request.headers()).map(str::to_owned);
        let method = request.method().to_string();
        let path = request.uri().path().to_string();

        let (request, body) = if self.include_request_body {
            let (parts, body) = request.into_parts();
            let captured = CapturedBody::collect(body)
                .await
                .map_err(LoggingError::RequestBody)?;
            let text = captured.text().into_owned();
            (Request::from_parts(parts, captured.into_body()), Some(text))
        } else {
            (request, None)
        };

        let entry = LogEntry::request(&method, &path, host.as_deref(), content_type.as_deref(), body);
        self.sink.emit(&entry).await?;

        Ok(request)
    }

    pub async fn log_response<B>(&self, response: Response<B>) -> Result<Response, LoggingError>
    where
        B: HttpBody<Data = Bytes> + Send + 'static,
        B::Error: Into<BoxError>,
    {
        let (parts, body) = response.into_parts();
        let captured = CapturedBody::collect(body)
            .await
            .map_err(LoggingError::ResponseBody)?;

        let body_text = self
            .include_response_body
            .then(|| captured.text().into_owned());
        let entry = LogEntry::response(parts.status.as_u16(), content_type(&parts.headers), body_text);
        self.sink.emit(&entry).await?;

        debug!(bytes = captured.len(), "Restoring captured response body");
        Ok(Response::from_parts(parts, captured.into_body()))
    }
}

fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
}

/// `axum::middleware::from_fn_with_state` entry point.
pub async fn logging_middleware(
    State(logger): State<ExchangeLogger>,
    request: Request,
    next: Next,
) -> Result<Response<Body>, LoggingError> {
    let request = logger.log_request(request).await?;
    let response = next.run(request).await;
    logger.log_response(response).await
}
