//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is built once at startup and shared read-only (behind an
//! `Arc`) by every transport. It owns the upstream quote client, so the
//! connection pool is shared across requests as well.

use std::sync::Arc;

use rmcp::model::Tool;
use tracing::warn;

use super::ToolError;
use super::definitions::GetStockPriceTool;
use crate::domains::quotes::QuoteClient;

/// Tool registry - manages all available tools.
#[derive(Debug)]
pub struct ToolRegistry {
    quote_client: Arc<QuoteClient>,
}

impl ToolRegistry {
    /// Create a new tool registry around the upstream quote client.
    pub fn new(quote_client: QuoteClient) -> Self {
        Self {
            quote_client: Arc::new(quote_client),
        }
    }

    /// The shared upstream quote client.
    pub fn quote_client(&self) -> &Arc<QuoteClient> {
        &self.quote_client
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![GetStockPriceTool::to_tool()]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            GetStockPriceTool::NAME => {
                GetStockPriceTool::http_handler(arguments, self.quote_client.clone()).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
