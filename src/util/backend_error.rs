//! Best-effort extraction of a human-readable message from backend errors.
//!
//! ERROR HANDLING
//! ==============
//! The backend rejects mutations with a JSON body of varying shape
//! (`{"message": ...}`, `{"error": {"message": ...}}`, or plain text).
//! Mutation callers show whatever this returns verbatim, so the fallback
//! must always produce something presentable.

#[cfg(test)]
#[path = "backend_error_test.rs"]
mod backend_error_test;

/// Extract the backend's message from a failed response body, falling back
/// to a generic status-code description.
pub fn extract_message(status: u16, body: &str) -> String {
    if let Some(message) = message_from_body(body) {
        return message;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && serde_json::from_str::<serde_json::Value>(trimmed).is_err() {
        return trimmed.to_owned();
    }
    format!("request failed: {status}")
}

fn message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_owned());
    }
    value
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(ToOwned::to_owned)
}
