//! HTTP transport implementation.
//!
//! A single axum app answers every request through [`router::route_request`]:
//! preflights short-circuit, known paths go to one of two transport handlers
//! after `Accept` normalization, everything else is a 404. All responses
//! leave with CORS headers.
//!
//! | Path                  | Transport                          |
//! |-----------------------|------------------------------------|
//! | `/sse`, `/sse/message`| event stream ([`SseTransport`])    |
//! | `/mcp`                | streamable HTTP ([`StreamableHttpTransport`]) |

pub mod cors;
pub mod headers;
pub mod jsonrpc;
pub mod router;
pub mod sse;
pub mod streamable;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Router, extract::Request, response::Response};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::McpServer;

pub use router::{RequestClassification, route_request};
pub use sse::SseTransport;
pub use streamable::StreamableHttpTransport;

/// Event-stream endpoint.
pub const SSE_PATH: &str = "/sse";

/// Endpoint receiving client messages for an event-stream session.
pub const SSE_MESSAGE_PATH: &str = "/sse/message";

/// Streamable HTTP endpoint.
pub const MCP_PATH: &str = "/mcp";

/// A transport that turns one HTTP request into one HTTP response.
///
/// Returning `Err` means the transport itself broke; the router answers
/// with a 500.
#[async_trait]
pub trait TransportHandler: Send + Sync {
    async fn handle(&self, request: Request) -> TransportResult<Response>;
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    event_stream: Arc<dyn TransportHandler>,
    unary_stream: Arc<dyn TransportHandler>,
}

impl AppState {
    /// Wire both transports to `server`.
    pub fn new(server: McpServer) -> Self {
        Self {
            event_stream: Arc::new(SseTransport::new(server.clone())),
            unary_stream: Arc::new(StreamableHttpTransport::new(server)),
        }
    }

    /// Build state from explicit handlers.
    pub fn with_handlers(
        event_stream: Arc<dyn TransportHandler>,
        unary_stream: Arc<dyn TransportHandler>,
    ) -> Self {
        Self {
            event_stream,
            unary_stream,
        }
    }
}

/// Build the axum app.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .fallback(route_request)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_app(AppState::new(server));

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {}", addr);
        info!("  → Event stream:    GET {} / POST {}", SSE_PATH, SSE_MESSAGE_PATH);
        info!("  → Streamable HTTP: POST {}", MCP_PATH);

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}
