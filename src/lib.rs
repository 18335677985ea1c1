//! Stock Price MCP Server Library
//!
//! An MCP (Model Context Protocol) server exposing a single tool,
//! `getStockPrice`, which looks up the latest trading price of a ticker
//! symbol from an upstream quotes API.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and the
//!   transports (HTTP with SSE and streamable HTTP endpoints, or STDIO)
//! - **domains**: business logic
//!   - **quotes**: upstream quote client
//!   - **tools**: MCP tool definitions and the tool registry
//!
//! # Example
//!
//! ```rust,no_run
//! use stock_price_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
