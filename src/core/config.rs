//! Configuration management for the MCP server.
//!
//! Configuration is assembled once at startup from defaults, an optional
//! `.env` file and `MCP_*` environment variables.

use super::transport::TransportConfig;
use crate::domains::quotes::DEFAULT_QUOTES_BASE_URL;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream quotes service configuration.
    pub upstream: UpstreamConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Upstream quotes service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL; the escaped symbol is appended as the last path segment.
    pub quotes_base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            quotes_base_url: DEFAULT_QUOTES_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Stock Price Lookup Agent".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("MCP_QUOTES_BASE_URL") {
            info!("Quotes base URL overridden: {}", base_url);
            config.upstream.quotes_base_url = base_url;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_upstream() {
        let config = Config::default();
        assert_eq!(
            config.upstream.quotes_base_url,
            "https://api.stockchart.ai/quotes"
        );
        assert_eq!(config.server.name, "Stock Price Lookup Agent");
    }

    #[test]
    fn test_quotes_base_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_QUOTES_BASE_URL", "http://127.0.0.1:4000/quotes");
        }
        let config = Config::from_env();
        assert_eq!(
            config.upstream.quotes_base_url,
            "http://127.0.0.1:4000/quotes"
        );
        unsafe {
            std::env::remove_var("MCP_QUOTES_BASE_URL");
        }
    }

    #[test]
    fn test_server_name_and_level_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "quotes-test");
            std::env::set_var("MCP_LOG_LEVEL", "debug");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "quotes-test");
        assert_eq!(config.logging.level, "debug");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
            std::env::remove_var("MCP_LOG_LEVEL");
        }
    }
}
