//! Transport layer for the MCP server.
//!
//! This module provides two ways to reach the server:
//! - **HTTP**: `/sse` + `/sse/message` (event stream) and `/mcp`
//!   (streamable HTTP), behind a single router with CORS
//! - **STDIO**: standard input/output, for locally spawned clients
//!
//! Each transport handles the connection lifecycle and delegates
//! message processing to the MCP server handler.

mod config;
mod error;
mod service;

pub mod http;
pub mod stdio;

pub use config::{HttpConfig, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
