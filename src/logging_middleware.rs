// src/logging_middleware.rs
//! Middleware for logging submitted forms and responses in debug mode

use axum::body::to_bytes;
use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, enabled, Level};

use crate::common::{safe_email_log, safe_phone_log};

/// Largest body that is buffered for logging
const MAX_LOGGED_BODY: usize = 1024 * 1024;

/// Logs request and response bodies at debug level with contact fields masked
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    if !enabled!(Level::DEBUG) {
        return Ok(next.run(request).await);
    }

    let started = Instant::now();
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_LOGGED_BODY)
        .await
        .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;

    if let Some(body) = describe_body(&bytes) {
        debug!(method = %parts.method, uri = %parts.uri, request_body = %body, "📥 Request");
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    debug!(
        status = %parts.status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        response_body = %describe_body(&bytes).unwrap_or_default(),
        "📤 Response"
    );

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

fn describe_body(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let text = std::str::from_utf8(bytes).ok()?;

    match serde_json::from_str::<Value>(text) {
        Ok(mut json) => {
            mask_contact_fields(&mut json);
            Some(json.to_string())
        }
        Err(_) => Some(text.to_string()),
    }
}

fn mask_contact_fields(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, field) in map.iter_mut() {
                let masked = match (key.as_str(), &*field) {
                    ("email", Value::String(email)) => Some(safe_email_log(email)),
                    ("phone", Value::String(phone)) => Some(safe_phone_log(phone)),
                    ("phone", Value::Number(phone)) => Some(safe_phone_log(&phone.to_string())),
                    _ => None,
                };
                match masked {
                    Some(masked) => *field = Value::String(masked),
                    None => mask_contact_fields(field),
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(mask_contact_fields),
        _ => {}
    }
}
