//! Streamable HTTP transport, stateless mode.
//!
//! Each `POST /mcp` carries one JSON-RPC message and is answered in the
//! same HTTP exchange with an `application/json` body. No session is kept
//! and no standalone server stream is offered, so `GET` is refused.

use async_trait::async_trait;
use axum::{
    Json,
    body::to_bytes,
    extract::Request,
    response::{IntoResponse, Response},
};
use http::{HeaderMap, Method, StatusCode, header::ALLOW, header::CONTENT_TYPE};
use tracing::{debug, warn};

use super::TransportHandler;
use super::headers::{APPLICATION_JSON, TEXT_EVENT_STREAM, accepts};
use super::jsonrpc::{IncomingMessage, JsonRpcResponse, parse_message, process_request};
use crate::core::McpServer;
use crate::core::transport::TransportResult;

/// Largest accepted request body.
const MAX_REQUEST_BYTES: usize = 4 * 1024 * 1024;

/// Transport-level JSON-RPC error code for rejected HTTP requests.
const TRANSPORT_ERROR: i32 = -32000;

/// Streamable HTTP transport handler.
pub struct StreamableHttpTransport {
    server: McpServer,
}

impl StreamableHttpTransport {
    pub fn new(server: McpServer) -> Self {
        Self { server }
    }

    async fn handle_post(&self, request: Request) -> TransportResult<Response> {
        let headers = request.headers();

        if !(accepts(headers, APPLICATION_JSON) && accepts(headers, TEXT_EVENT_STREAM)) {
            warn!("Rejected POST without application/json and text/event-stream in Accept");
            return Ok(rejection(
                StatusCode::NOT_ACCEPTABLE,
                "Not Acceptable: Client must accept both application/json and text/event-stream",
            ));
        }

        if !is_json_content(headers) {
            return Ok(rejection(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Unsupported Media Type: Content-Type must be application/json",
            ));
        }

        let Ok(body) = to_bytes(request.into_body(), MAX_REQUEST_BYTES).await else {
            return Ok(rejection(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large"));
        };

        let request = match parse_message(&body) {
            Ok(IncomingMessage::Request(request)) => request,
            Ok(IncomingMessage::Response) => return Ok(StatusCode::ACCEPTED.into_response()),
            Err(error) => return Ok((StatusCode::BAD_REQUEST, Json(error)).into_response()),
        };

        match process_request(&self.server, request).await {
            Some(response) => Ok(Json(response).into_response()),
            None => {
                debug!("Notification accepted");
                Ok(StatusCode::ACCEPTED.into_response())
            }
        }
    }
}

#[async_trait]
impl TransportHandler for StreamableHttpTransport {
    async fn handle(&self, request: Request) -> TransportResult<Response> {
        if request.method() == Method::POST {
            return self.handle_post(request).await;
        }

        Ok((
            StatusCode::METHOD_NOT_ALLOWED,
            [(ALLOW, "POST")],
            Json(JsonRpcResponse::error(None, TRANSPORT_ERROR, "Method not allowed")),
        )
            .into_response())
    }
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(APPLICATION_JSON))
}

fn rejection(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(JsonRpcResponse::error(None, TRANSPORT_ERROR, message)),
    )
        .into_response()
}
