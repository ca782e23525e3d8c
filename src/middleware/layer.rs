use axum::{
    body::{Body, Bytes, HttpBody},
    http::{Request, Response},
    BoxError,
};
use futures::future::BoxFuture;
use std::task::{Context, Poll};
use tower::{Layer, Service};

use super::logging::ExchangeLogger;

/// Applies [`ExchangeLogger`] to any tower service.
///
/// Unlike the axum `from_fn` middleware this keeps the inner service's
/// errors: they come back boxed but otherwise untouched, and no response
/// entry is written for them.
#[derive(Debug, Clone)]
pub struct ExchangeLoggingLayer {
    logger: ExchangeLogger,
}

impl ExchangeLoggingLayer {
    pub fn new(logger: ExchangeLogger) -> Self {
        Self { logger }
    }
}

impl<S> Layer<S> for ExchangeLoggingLayer {
    type Service = ExchangeLogging<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ExchangeLogging {
            inner,
            logger: self.logger.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExchangeLogging<S> {
    inner: S,
    logger: ExchangeLogger,
}

impl<S, B> Service<Request<Body>> for ExchangeLogging<S>
where
    S: Service<Request<Body>, Response = Response<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Into<BoxError>,
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    type Response = Response<Body>;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        // Take the service that was driven to readiness.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let logger = self.logger.clone();

        Box::pin(async move {
            let request = logger.log_request(request).await?;
            let response = inner.call(request).await.map_err(Into::<BoxError>::into)?;
            Ok::<_, BoxError>(logger.log_response(response).await?)
        })
    }
}
