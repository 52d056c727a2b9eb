//! Shared HTTP response helpers for the FAQ API clients.
//!
//! Centralizes status-code checks and error-body interpretation so the
//! collection, vote, and question modules stay focused on request
//! construction and response mapping.

use serde_json::Value;

/// A non-success response, with its body already drained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFailure {
    pub status: u16,
    pub body: String,
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success; otherwise drains the body so
/// callers can pick a message out of it.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, HttpFailure> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    Err(HttpFailure {
        status: resp.status().as_u16(),
        body: resp.text().await.unwrap_or_default(),
    })
}

/// Pick a human-readable message out of an error body.
///
/// - JSON object: first non-empty string among `title`, then `message`;
///   otherwise `generic`.
/// - Not JSON (or JSON `null`): the trimmed raw text, or `generic` if empty.
/// - Any other JSON value: `generic`.
#[must_use]
pub fn extract_error_message(body: &str, generic: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => ["title", "message"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str).filter(|s| !s.is_empty()))
            .map_or_else(|| generic.to_string(), str::to_string),
        Ok(Value::Null) | Err(_) => {
            let raw = body.trim();
            if raw.is_empty() {
                generic.to_string()
            } else {
                raw.to_string()
            }
        }
        Ok(_) => generic.to_string(),
    }
}
