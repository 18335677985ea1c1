//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call to perform
//! specific actions. This server registers exactly one: `getStockPrice`.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - rmcp ToolRouter builder for the STDIO transport
//! - `registry.rs` - Process-wide tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/`
//! 2. Define params, `execute()` and `http_handler()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add the route in `router.rs`
//! 5. Register in `registry.rs` for HTTP dispatch

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
