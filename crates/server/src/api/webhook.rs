//! Webhook entry point for chat platform messages.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use lunchbot_core::messenger::INVALID_MESSAGE;
use lunchbot_core::{DispatchStatus, ReplyBody};

use crate::state::AppState;

/// POST /webhook - handle an incoming chat platform message.
///
/// HipChat posts JSON; Slack posts form-encoded slash command payloads.
/// Both are decoded into a JSON object and handed to the dispatcher, which
/// picks the messenger matching the payload shape.
pub async fn handle_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(payload) = decode_payload(&headers, &body) else {
        debug!("Webhook body could not be decoded");
        return (StatusCode::BAD_REQUEST, INVALID_MESSAGE).into_response();
    };

    let outcome = state.dispatcher().dispatch(&payload).await;

    let status = match outcome.status {
        DispatchStatus::Ok => StatusCode::OK,
        DispatchStatus::BadRequest => StatusCode::BAD_REQUEST,
    };
    match outcome.body {
        ReplyBody::Message(response) => (status, Json(response)).into_response(),
        ReplyBody::Text(text) => (status, text).into_response(),
    }
}

/// Decode the request body according to its content type. Anything without
/// a form content type is treated as JSON.
fn decode_payload(headers: &HeaderMap, body: &[u8]) -> Option<Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("application/x-www-form-urlencoded") {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body).ok()?;
        Some(Value::Object(
            pairs
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect(),
        ))
    } else {
        serde_json::from_slice(body).ok()
    }
}
