//! API error type and response-body normalization.

use thiserror::Error;

/// Errors surfaced by [`super::ApiClient`].
///
/// Every variant renders to a string that can be shown in the UI as-is.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status.
    #[error("{0}")]
    Backend(String),

    /// Connection-level failure (DNS, refused, timeout).
    #[error("Cannot reach backend: {0}")]
    Transport(String),

    /// 2xx response whose body did not match the expected shape.
    #[error("Unexpected response from backend: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build a [`ApiError::Backend`] from a status code and raw body.
    ///
    /// Prefers the body's `error` / `message` JSON fields, falls back to the
    /// raw body text, and always carries the HTTP status.
    pub(super) fn from_status(code: u16, body: &str) -> Self {
        ApiError::Backend(format_http_error(code, body))
    }
}

fn format_http_error(code: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return format!("HTTP {code}");
    }

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return format!("HTTP {code}: {body}");
    };

    let message = value
        .get("error")
        .and_then(|v| v.as_str())
        .or_else(|| value.get("message").and_then(|v| v.as_str()));

    match message {
        Some(message) => format!("HTTP {code}: {message}"),
        None => format!("HTTP {code}: {body}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body() {
        assert_eq!(format_http_error(503, "  "), "HTTP 503");
    }

    #[test]
    fn test_plain_text_body() {
        assert_eq!(
            format_http_error(500, "internal failure"),
            "HTTP 500: internal failure"
        );
    }

    #[test]
    fn test_json_error_field_preferred() {
        let body = r#"{"error": "resource not found", "message": "ignored"}"#;
        assert_eq!(format_http_error(404, body), "HTTP 404: resource not found");
    }

    #[test]
    fn test_json_message_fallback() {
        let body = r#"{"message": "validation failed"}"#;
        assert_eq!(format_http_error(422, body), "HTTP 422: validation failed");
    }

    #[test]
    fn test_json_without_known_fields() {
        let body = r#"{"detail": 42}"#;
        assert_eq!(format_http_error(400, body), format!("HTTP 400: {body}"));
    }
}
