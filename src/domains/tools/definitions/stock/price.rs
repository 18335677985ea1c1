//! Stock price lookup tool.
//!
//! Looks up the latest trading price for a ticker symbol. Every outcome,
//! upstream failures included, is returned as a single text block so the
//! calling agent can relay it to the user as-is.

use std::fmt::Display;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::domains::quotes::{QuoteClient, QuoteLookup};
use crate::domains::tools::ToolError;

/// Parameters for a stock price lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetStockPriceParams {
    /// The ticker symbol, case-insensitive.
    #[schemars(
        description = "The stock ticker symbol (like AAPL or TSLA). Only call this tool if the user explicitly asks for a stock price, such as 'What is AAPL trading at?' or 'Get price for Tesla.' Do not guess."
    )]
    pub symbol: String,
}

/// Stock price lookup tool implementation.
#[derive(Debug, Clone)]
pub struct GetStockPriceTool;

impl GetStockPriceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getStockPrice";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the current trading price of a stock by its ticker symbol. Returns a one-line summary with the company name, price and currency.";

    /// Run a lookup. Never fails: errors become the text of the result.
    pub async fn execute(client: &QuoteClient, params: &GetStockPriceParams) -> CallToolResult {
        let symbol = params.symbol.as_str();

        if symbol.is_empty() {
            warn!("Rejected stock price lookup with empty symbol");
            return text_result(error_text("symbol must not be empty"));
        }

        info!("Looking up stock price for {}", symbol);

        match client.fetch_quote(symbol).await {
            Ok(lookup) => text_result(describe_quote(symbol, &lookup)),
            Err(e) => {
                error!("Stock price fetch error: {}", e);
                text_result(error_text(e))
            }
        }
    }

    /// HTTP handler for this tool (for the SSE and streamable HTTP transports).
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<QuoteClient>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: GetStockPriceParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(&client, &params).await;

        serde_json::to_value(result).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetStockPriceParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the STDIO transport.
    pub fn create_route<S>(client: Arc<QuoteClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: GetStockPriceParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&client, &params).await)
            }
            .boxed()
        })
    }
}

/// Render a lookup outcome as the sentence returned to the agent.
pub fn describe_quote(symbol: &str, lookup: &QuoteLookup) -> String {
    let upper = symbol.to_uppercase();

    match lookup {
        QuoteLookup::NoData => format!("No price data found for {upper}"),
        QuoteLookup::Found(quote) => format!(
            "{} ({}) is trading at ${} {}",
            quote.name.as_deref().unwrap_or(symbol),
            upper,
            format_price(quote.price),
            quote.currency.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string(),
    }
}

/// Two decimals, with exact ties rounded away from zero.
///
/// Only multiples of 1/8 with an odd numerator sit exactly halfway between
/// two cents; `{:.2}` would round those to even.
fn format_price(price: f64) -> String {
    let eighths = price * 8.0;
    let is_tie = eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if !is_tie {
        return format!("{price:.2}");
    }

    let cents = (price.abs() * 100.0).ceil();
    format!("{:.2}", (cents / 100.0).copysign(price))
}

/// Text returned when a lookup fails.
pub fn error_text(message: impl Display) -> String {
    format!("Error fetching stock price: {message}")
}

fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::quotes::PricedQuote;
    use rmcp::model::RawContent;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn result_text(result: &CallToolResult) -> String {
        assert_eq!(result.content.len(), 1);
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    fn params(symbol: &str) -> GetStockPriceParams {
        GetStockPriceParams {
            symbol: symbol.to_string(),
        }
    }

    async fn upstream(symbol_path: &str, template: ResponseTemplate) -> (MockServer, QuoteClient) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/quotes/{symbol_path}")))
            .respond_with(template)
            .expect(1)
            .mount(&server)
            .await;
        let client = QuoteClient::new(&format!("{}/quotes", server.uri())).unwrap();
        (server, client)
    }

    #[test]
    fn test_describe_found() {
        let lookup = QuoteLookup::Found(PricedQuote {
            price: 193.5,
            name: Some("Apple Inc.".to_string()),
            currency: Some("USD".to_string()),
        });
        assert_eq!(
            describe_quote("aapl", &lookup),
            "Apple Inc. (AAPL) is trading at $193.50 USD"
        );
    }

    #[test]
    fn test_describe_without_name_or_currency() {
        let lookup = QuoteLookup::Found(PricedQuote {
            price: 12.0,
            name: None,
            currency: None,
        });
        let text = describe_quote("tsla", &lookup);
        assert_eq!(text, "tsla (TSLA) is trading at $12.00");
        assert!(!text.ends_with(' '));
    }

    #[test]
    fn test_format_price_rounds_ties_up() {
        assert_eq!(format_price(12.125), "12.13");
        assert_eq!(format_price(0.125), "0.13");
        assert_eq!(format_price(0.625), "0.63");
        assert_eq!(format_price(0.875), "0.88");
        assert_eq!(format_price(-2.375), "-2.38");
    }

    #[test]
    fn test_format_price_non_ties() {
        assert_eq!(format_price(193.5), "193.50");
        assert_eq!(format_price(410.123), "410.12");
        assert_eq!(format_price(0.25), "0.25");
        // 1.005 is stored slightly below the halfway point.
        assert_eq!(format_price(1.005), "1.00");
        assert_eq!(format_price(99.999), "100.00");
    }

    #[test]
    fn test_describe_eighths_price() {
        let lookup = QuoteLookup::Found(PricedQuote {
            price: 12.125,
            name: Some("Acme".to_string()),
            currency: Some("USD".to_string()),
        });
        assert_eq!(
            describe_quote("acme", &lookup),
            "Acme (ACME) is trading at $12.13 USD"
        );
    }

    #[test]
    fn test_describe_no_data() {
        assert_eq!(
            describe_quote("zzzz", &QuoteLookup::NoData),
            "No price data found for ZZZZ"
        );
    }

    #[test]
    fn test_params_require_symbol() {
        assert!(serde_json::from_str::<GetStockPriceParams>("{}").is_err());
        assert!(serde_json::from_str::<GetStockPriceParams>(r#"{"symbol": 42}"#).is_err());
    }

    #[test]
    fn test_to_tool() {
        let tool = GetStockPriceTool::to_tool();
        assert_eq!(tool.name, "getStockPrice");
        let schema = serde_json::Value::Object((*tool.input_schema).clone());
        assert_eq!(schema["required"], serde_json::json!(["symbol"]));
        assert_eq!(schema["properties"]["symbol"]["type"], "string");
    }

    #[tokio::test]
    async fn test_execute_found() {
        let (_server, client) = upstream(
            "aapl",
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "price": 193.5,
                "name": "Apple Inc.",
                "currency": "USD"
            })),
        )
        .await;

        let result = GetStockPriceTool::execute(&client, &params("aapl")).await;
        assert_eq!(
            result_text(&result),
            "Apple Inc. (AAPL) is trading at $193.50 USD"
        );
        assert_ne!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_execute_no_data() {
        let (_server, client) = upstream(
            "zzzz",
            ResponseTemplate::new(200).set_body_json(serde_json::json!({})),
        )
        .await;

        let result = GetStockPriceTool::execute(&client, &params("zzzz")).await;
        assert_eq!(result_text(&result), "No price data found for ZZZZ");
    }

    #[tokio::test]
    async fn test_execute_upstream_error_becomes_text() {
        let (_server, client) = upstream("aapl", ResponseTemplate::new(500)).await;

        let result = GetStockPriceTool::execute(&client, &params("aapl")).await;
        assert_eq!(
            result_text(&result),
            "Error fetching stock price: API error: 500"
        );
        assert_ne!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_execute_malformed_body_becomes_text() {
        let (_server, client) =
            upstream("aapl", ResponseTemplate::new(200).set_body_string("not json")).await;

        let result = GetStockPriceTool::execute(&client, &params("aapl")).await;
        assert!(result_text(&result).starts_with("Error fetching stock price: Invalid JSON response"));
    }

    #[tokio::test]
    async fn test_execute_empty_symbol_skips_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let client = QuoteClient::new(&format!("{}/quotes", server.uri())).unwrap();

        let result = GetStockPriceTool::execute(&client, &params("")).await;
        assert_eq!(
            result_text(&result),
            "Error fetching stock price: symbol must not be empty"
        );
    }

    #[tokio::test]
    async fn test_execute_whitespace_symbol_is_fetched() {
        let (_server, client) = upstream(
            "%20%20",
            ResponseTemplate::new(200).set_body_json(serde_json::json!({})),
        )
        .await;

        let result = GetStockPriceTool::execute(&client, &params("  ")).await;
        assert_eq!(result_text(&result), "No price data found for   ");
    }

    #[tokio::test]
    async fn test_http_handler_shape() {
        let (_server, client) = upstream(
            "msft",
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"price": 410.123})),
        )
        .await;

        let value = GetStockPriceTool::http_handler(
            serde_json::json!({ "symbol": "msft" }),
            Arc::new(client),
        )
        .await
        .unwrap();

        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(
            value["content"][0]["text"],
            "msft (MSFT) is trading at $410.12"
        );
    }

    #[tokio::test]
    async fn test_http_handler_missing_symbol() {
        let client = Arc::new(QuoteClient::new("http://127.0.0.1:9/quotes").unwrap());
        let err = GetStockPriceTool::http_handler(serde_json::json!({}), client)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
