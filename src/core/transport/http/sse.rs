//! Event-stream transport (HTTP with server-sent events).
//!
//! `GET /sse` opens a stream whose first `endpoint` event tells the client
//! where to POST its messages (`/sse/message?sessionId=...`). Responses to
//! those messages are pushed back on the stream as `message` events; the
//! POST itself only gets `202 Accepted`.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Json,
    body::to_bytes,
    extract::Request,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use futures::{StreamExt, stream};
use http::{Method, StatusCode, header::ALLOW};
use serde::Deserialize;
use tokio::sync::{RwLock, mpsc};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::jsonrpc::{IncomingMessage, parse_message, process_request};
use super::{SSE_MESSAGE_PATH, SSE_PATH, TransportHandler};
use crate::core::McpServer;
use crate::core::transport::{TransportError, TransportResult};

/// Largest accepted message body.
const MAX_MESSAGE_BYTES: usize = 4 * 1024 * 1024;

/// Events buffered per session before senders wait.
const SESSION_BUFFER: usize = 32;

type Sessions = Arc<RwLock<HashMap<String, mpsc::Sender<Event>>>>;

#[derive(Debug, Deserialize)]
struct SessionQuery {
    #[serde(rename = "sessionId")]
    session_id: Option<String>,
}

/// Removes its session from the table when the event stream is dropped.
struct SessionGuard {
    id: String,
    sessions: Sessions,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let id = std::mem::take(&mut self.id);
        let sessions = self.sessions.clone();
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                if sessions.write().await.remove(&id).is_some() {
                    info!(session_id = %id, "SSE session closed");
                }
            });
        }
    }
}

/// Event-stream transport handler.
pub struct SseTransport {
    server: McpServer,
    sessions: Sessions,
}

impl SseTransport {
    pub fn new(server: McpServer) -> Self {
        Self {
            server,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    #[cfg(test)]
    async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn open_stream(&self) -> TransportResult<Response> {
        let session_id = Uuid::new_v4().simple().to_string();
        let (tx, rx) = mpsc::channel(SESSION_BUFFER);
        self.sessions.write().await.insert(session_id.clone(), tx);
        info!(session_id = %session_id, "SSE session opened");

        let endpoint = Event::default()
            .event("endpoint")
            .data(format!("{SSE_MESSAGE_PATH}?sessionId={session_id}"));

        let guard = SessionGuard {
            id: session_id,
            sessions: self.sessions.clone(),
        };
        let events = stream::once(async move { endpoint })
            .chain(ReceiverStream::new(rx))
            .map(move |event| {
                let _session = &guard;
                Ok::<_, Infallible>(event)
            });

        Ok(Sse::new(events)
            .keep_alive(KeepAlive::default())
            .into_response())
    }

    async fn post_message(&self, request: Request) -> TransportResult<Response> {
        let query: SessionQuery = serde_urlencoded::from_str(request.uri().query().unwrap_or_default())
            .unwrap_or(SessionQuery { session_id: None });
        let Some(session_id) = query.session_id.filter(|id| !id.is_empty()) else {
            return Ok((StatusCode::BAD_REQUEST, "Missing sessionId").into_response());
        };

        let Some(sender) = self.sessions.read().await.get(&session_id).cloned() else {
            debug!(session_id = %session_id, "Message for unknown session");
            return Ok((StatusCode::NOT_FOUND, "Session not found").into_response());
        };

        let Ok(body) = to_bytes(request.into_body(), MAX_MESSAGE_BYTES).await else {
            return Ok((StatusCode::BAD_REQUEST, "Invalid message body").into_response());
        };

        let request = match parse_message(&body) {
            Ok(IncomingMessage::Request(request)) => request,
            Ok(IncomingMessage::Response) => {
                return Ok((StatusCode::ACCEPTED, "Accepted").into_response());
            }
            Err(error) => return Ok((StatusCode::BAD_REQUEST, Json(error)).into_response()),
        };

        if let Some(response) = process_request(&self.server, request).await {
            let event = Event::default()
                .event("message")
                .json_data(&response)
                .map_err(|e| TransportError::http(e.to_string()))?;

            if sender.send(event).await.is_err() {
                warn!(session_id = %session_id, "SSE stream gone, dropping session");
                self.sessions.write().await.remove(&session_id);
                return Ok((StatusCode::NOT_FOUND, "Session not found").into_response());
            }
        }

        Ok((StatusCode::ACCEPTED, "Accepted").into_response())
    }
}

#[async_trait]
impl TransportHandler for SseTransport {
    async fn handle(&self, request: Request) -> TransportResult<Response> {
        let path = request.uri().path().to_string();

        match (request.method().clone(), path.as_str()) {
            (Method::GET, SSE_PATH) => self.open_stream().await,
            (Method::POST, SSE_MESSAGE_PATH) => self.post_message(request).await,
            (_, SSE_PATH) => Ok(method_not_allowed("GET")),
            _ => Ok(method_not_allowed("POST")),
        }
    }
}

fn method_not_allowed(allow: &'static str) -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, [(ALLOW, allow)], "Method not allowed").into_response()
}
