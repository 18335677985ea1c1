//! Stock market tools module.
//!
//! - `price`: latest trading price for a ticker symbol

pub mod price;

pub use price::{GetStockPriceParams, GetStockPriceTool};
