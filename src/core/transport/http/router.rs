//! Request classification and dispatch.

use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use http::{Method, StatusCode};
use tracing::{debug, error};

use super::cors::with_cors;
use super::headers::normalize_accept;
use super::{AppState, MCP_PATH, SSE_MESSAGE_PATH, SSE_PATH, TransportHandler};

/// Where a request goes, derived from its method and path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestClassification {
    /// CORS preflight, answered directly.
    Preflight,
    /// Event-stream transport.
    EventStream,
    /// Streamable HTTP transport.
    UnaryStream,
    NotFound,
}

impl RequestClassification {
    /// Classify a request. `OPTIONS` is a preflight on any path.
    pub fn classify(method: &Method, path: &str) -> Self {
        if method == Method::OPTIONS {
            return Self::Preflight;
        }

        match path {
            SSE_PATH | SSE_MESSAGE_PATH => Self::EventStream,
            MCP_PATH => Self::UnaryStream,
            _ => Self::NotFound,
        }
    }
}

/// Entry point for every HTTP request.
pub async fn route_request(State(state): State<AppState>, request: Request) -> Response {
    let classification = RequestClassification::classify(request.method(), request.uri().path());
    debug!(
        method = %request.method(),
        path = request.uri().path(),
        ?classification,
        "Routing request"
    );

    let response = match classification {
        RequestClassification::Preflight => StatusCode::NO_CONTENT.into_response(),
        RequestClassification::EventStream => delegate(state.event_stream.as_ref(), request).await,
        RequestClassification::UnaryStream => delegate(state.unary_stream.as_ref(), request).await,
        RequestClassification::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
    };

    with_cors(response)
}

async fn delegate(handler: &dyn TransportHandler, request: Request) -> Response {
    match handler.handle(normalize_accept(request)).await {
        Ok(response) => response,
        Err(e) => {
            error!("Transport handler failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
