//! HTTP client for the upstream quotes API.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Url;
use tracing::{debug, instrument};

use super::{Quote, QuoteError, QuoteLookup, QuoteResult};

/// Base URL of the public quotes endpoint.
pub const DEFAULT_QUOTES_BASE_URL: &str = "https://api.stockchart.ai/quotes";

/// Bytes escaped in a symbol: everything but ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )`, the same set as `encodeURIComponent`.
const SYMBOL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Client for `GET {base_url}/{symbol}`.
///
/// One best-effort attempt per lookup: no retry, no caching, and no timeout
/// beyond whatever the underlying connection pool enforces.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: reqwest::Client,
    base_url: Url,
}

impl QuoteClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: &str) -> QuoteResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| QuoteError::invalid_base_url(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(QuoteError::invalid_base_url(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Build the lookup URL, escaping the symbol as a single path segment.
    pub fn quote_url(&self, symbol: &str) -> Url {
        let segment = utf8_percent_encode(symbol, SYMBOL_ENCODE_SET);
        let mut url = self.base_url.clone();
        let path = format!("{}/{}", url.path().trim_end_matches('/'), segment);
        url.set_path(&path);
        url
    }

    /// Fetch the quote for `symbol`.
    #[instrument(skip(self))]
    pub async fn fetch_quote(&self, symbol: &str) -> QuoteResult<QuoteLookup> {
        let url = self.quote_url(symbol);
        debug!(%url, "Requesting quote");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let quote: Quote = serde_json::from_slice(&body)?;

        Ok(quote.into())
    }
}
