//! MCP Server implementation and lifecycle management.
//!
//! `McpServer` owns the process-wide tool registry. It is constructed once
//! at startup and cloned cheaply into every transport; nothing in it is
//! mutated after construction.
//!
//! Two dispatch paths share the same registry:
//! - STDIO goes through rmcp's `ServerHandler` and the generated `ToolRouter`
//! - the HTTP transports call [`McpServer::call_tool`] directly

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::quotes::QuoteClient;
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};

/// Usage guidance sent to clients during initialization.
pub const INSTRUCTIONS: &str = "Looks up current stock prices. Only call getStockPrice when the user explicitly asks for the price of a stock.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered tools, shared by every transport.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls over STDIO.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> crate::Result<Self> {
        let quote_client = QuoteClient::new(&config.upstream.quotes_base_url)?;
        let registry = Arc::new(ToolRegistry::new(quote_client));

        Ok(Self {
            tool_router: build_tool_router::<Self>(&registry),
            config: Arc::new(config),
            registry,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transports).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transports).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        self.registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
