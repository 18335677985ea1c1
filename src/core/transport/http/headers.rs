//! `Accept` header normalization.
//!
//! Some MCP clients omit `Accept` or send only `*/*`, while the streamable
//! HTTP transport refuses requests that don't list both JSON and event-stream
//! media types. Requests that don't declare JSON get a rewritten header
//! before they reach a transport.

use axum::extract::Request;
use http::{HeaderMap, HeaderValue, header::ACCEPT};

/// JSON media type.
pub const APPLICATION_JSON: &str = "application/json";

/// Server-sent events media type.
pub const TEXT_EVENT_STREAM: &str = "text/event-stream";

/// Value written when a request doesn't declare JSON support.
pub const NORMALIZED_ACCEPT: &str = "application/json, text/event-stream";

/// Media ranges listed in every `Accept` header, parameters stripped.
fn media_ranges(headers: &HeaderMap) -> impl Iterator<Item = &str> {
    headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|range| range.split(';').next())
        .map(str::trim)
        .filter(|range| !range.is_empty())
}

/// Whether `Accept` explicitly lists `application/json`.
pub fn declares_json(headers: &HeaderMap) -> bool {
    media_ranges(headers).any(|range| range.eq_ignore_ascii_case(APPLICATION_JSON))
}

/// Whether `Accept` admits `media_type`, directly or through a wildcard.
pub fn accepts(headers: &HeaderMap, media_type: &str) -> bool {
    let top_level = media_type.split('/').next().unwrap_or_default();

    media_ranges(headers).any(|range| {
        range == "*/*"
            || range.eq_ignore_ascii_case(media_type)
            || range
                .strip_suffix("/*")
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(top_level))
    })
}

/// Copy `headers`, overriding `Accept` unless it already declares JSON.
pub fn normalized_headers(headers: &HeaderMap) -> HeaderMap {
    let mut normalized = headers.clone();
    if !declares_json(headers) {
        normalized.insert(ACCEPT, HeaderValue::from_static(NORMALIZED_ACCEPT));
    }
    normalized
}

/// Normalize a request's `Accept` header. Method, URI and body are untouched.
pub fn normalize_accept(request: Request) -> Request {
    let (mut parts, body) = request.into_parts();
    parts.headers = normalized_headers(&parts.headers);
    Request::from_parts(parts, body)
}
