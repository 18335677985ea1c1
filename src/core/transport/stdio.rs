//! STDIO transport implementation.
//!
//! Serves the same tool registry over stdin/stdout through rmcp's
//! `ServerHandler`, for clients that spawn the server as a subprocess.
//! Logs go to stderr so they never interleave with protocol frames.

use rmcp::{ServiceExt, transport::stdio};
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let name = server.name().to_string();

        let running = server
            .serve(stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;
        info!("{} ready on stdin/stdout", name);

        let reason = running
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("STDIO session ended: {:?}", reason);
        Ok(())
    }
}
