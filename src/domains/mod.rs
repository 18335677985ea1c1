//! Domains module containing business logic organized by bounded contexts.
//!
//! - **quotes**: the upstream price service client
//! - **tools**: MCP tools exposed to clients, built on top of `quotes`

pub mod quotes;
pub mod tools;
