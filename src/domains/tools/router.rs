//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Used by the STDIO transport. Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::ToolRegistry;
use super::definitions::GetStockPriceTool;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(GetStockPriceTool::create_route(
        registry.quote_client().clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::quotes::QuoteClient;

    struct TestServer {}

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(QuoteClient::new("http://127.0.0.1:9/quotes").unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(&test_registry());
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "getStockPrice");
    }

    #[test]
    fn test_registry_matches_router() {
        let registry = test_registry();
        let registry_tools = ToolRegistry::get_all_tools();
        let registry_names: Vec<_> = registry_tools.iter().map(|t| t.name.as_ref()).collect();

        let router: ToolRouter<TestServer> = build_tool_router(&registry);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
