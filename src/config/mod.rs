use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{
    middleware::ExchangeLogger,
    sink::{FileSink, LogSink, TracingSink},
};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.yaml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    Logger,
    File,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Logger => "logger",
            SinkKind::File => "file",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub sink: SinkKind,
    pub file_path: PathBuf,
    pub include_request_body: bool,
    pub include_response_body: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sink: SinkKind::Logger,
            file_path: FileSink::default().path().to_path_buf(),
            include_request_body: false,
            include_response_body: true,
        }
    }
}

impl LoggingConfig {
    /// Returns `None` when exchange logging is switched off.
    pub fn build_logger(&self) -> Option<ExchangeLogger> {
        if !self.enabled {
            return None;
        }

        let sink = match self.sink {
            SinkKind::Logger => LogSink::from(TracingSink::new()),
            SinkKind::File => LogSink::from(FileSink::new(&self.file_path)),
        };

        Some(
            ExchangeLogger::new(sink)
                .include_request_body(self.include_request_body)
                .include_response_body(self.include_response_body),
        )
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    /// Layers the optional YAML file, `EXCHANGE_LOG__*` variables, then
    /// `HOST`/`PORT`.
    pub fn load_from(config_path: &str) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("EXCHANGE_LOG")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Ok(host) = std::env::var("HOST") {
            builder = builder.set_override("server.host", host)?;
        }
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port.parse::<u16>()?)?;
        }

        let settings = builder.build()?;
        let config: AppConfig = settings.try_deserialize()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");

        let config = AppConfig::load_from(missing.to_str().unwrap()).unwrap();

        assert!(config.logging.enabled);
        assert_eq!(config.logging.sink, SinkKind::Logger);
        assert_eq!(config.logging.file_path, PathBuf::from("Logs/RequestResponseLog.txt"));
        assert!(!config.logging.include_request_body);
        assert!(config.logging.include_response_body);
    }

    #[test]
    fn yaml_selects_file_sink_and_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exchange.yaml");
        std::fs::write(
            &path,
            "server:\n  timeout_seconds: 5\nlogging:\n  sink: file\n  file_path: /var/log/exchange.txt\n  include_request_body: true\n",
        )
        .unwrap();

        let config = AppConfig::load_from(path.to_str().unwrap()).unwrap();

        assert_eq!(config.server.timeout_seconds, 5);
        assert_eq!(config.logging.sink, SinkKind::File);
        assert_eq!(config.logging.file_path, PathBuf::from("/var/log/exchange.txt"));
        assert!(config.logging.include_request_body);
        assert!(config.logging.include_response_body);
    }

    #[test]
    fn build_logger_honours_enabled_and_sink() {
        let mut logging = LoggingConfig {
            sink: SinkKind::File,
            file_path: PathBuf::from("out/exchange.txt"),
            ..LoggingConfig::default()
        };

        match logging.build_logger().unwrap().sink() {
            LogSink::File(sink) => assert_eq!(sink.path(), std::path::Path::new("out/exchange.txt")),
            other => panic!("unexpected sink: {other:?}"),
        }

        logging.enabled = false;
        assert!(logging.build_logger().is_none());
    }
}
