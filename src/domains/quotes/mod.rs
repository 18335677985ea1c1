//! Quotes domain module.
//!
//! This module talks to the upstream price service. It fetches a single
//! symbol's quote and normalizes the loosely-typed JSON body into a tagged
//! [`QuoteLookup`], so callers match on an outcome instead of null-checking.

mod client;
mod error;
mod model;

pub use client::{DEFAULT_QUOTES_BASE_URL, QuoteClient};
pub use error::{QuoteError, QuoteResult};
pub use model::{PricedQuote, Quote, QuoteLookup};
