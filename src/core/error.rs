//! Error types and handling for the MCP server.
//!
//! Startup and serving failures surface through this type: a quotes client
//! that can't be built, or a transport that fails to bind or serve.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the upstream quotes client.
    #[error("Quote error: {0}")]
    Quote(#[from] crate::domains::quotes::QuoteError),

    /// Error originating from a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
