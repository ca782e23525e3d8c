use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exchange_logger::{config::AppConfig, create_app};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing()?;

    let config = AppConfig::load()?;
    info!(
        sink = config.logging.sink.as_str(),
        file_path = %config.logging.file_path.display(),
        "Configuration loaded"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = create_app(config);

    let listener = TcpListener::bind(&addr).await?;
    info!("Exchange logger listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(filter);

    match log_format.as_str() {
        "json" => subscriber.with(tracing_subscriber::fmt::layer().json()).init(),
        _ => subscriber.with(tracing_subscriber::fmt::layer()).init(),
    }

    Ok(())
}
