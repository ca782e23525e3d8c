use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod sink;

pub use error::LoggingError;
pub use middleware::{logging_middleware, ExchangeLogger, ExchangeLoggingLayer};
pub use sink::{FileSink, LogEntry, LogSink, TracingSink};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::AppConfig>,
}

/// Builds the demo router with exchange logging wrapped around every route.
pub fn create_app(config: config::AppConfig) -> Router {
    let timeout = Duration::from_secs(config.server.timeout_seconds);
    let logger = config.logging.build_logger();
    let state = AppState {
        config: Arc::new(config),
    };

    let mut app = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/v1/health", get(routes::health::health_detailed))
        .route("/api/v1/echo", post(routes::echo::echo))
        .with_state(state);

    match logger {
        Some(logger) => {
            info!(sink = ?logger.sink(), "Request/response logging enabled");
            app = app.layer(from_fn_with_state(logger, logging_middleware));
        }
        None => info!("Request/response logging disabled"),
    }

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(timeout)),
    )
}
