//! Error types for the Checkout.com API client.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// Result type alias for Checkout.com operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Checkout.com API operations.
///
/// Every variant is terminal: nothing in this crate retries.
#[derive(Error, Debug)]
pub enum Error {
    /// A required credential is not configured.
    #[error("{0}")]
    ConfigurationMissing(String),

    /// HTTP 401.
    #[error("Authentication failed. Check your API key.")]
    AuthenticationFailed,

    /// HTTP 403.
    #[error("Access denied. Insufficient permissions.")]
    AccessDenied,

    /// HTTP 404.
    #[error("Resource not found.")]
    NotFound,

    /// HTTP 422, carrying the pretty-printed `error_codes` (or whole body).
    #[error("Validation error: {details}")]
    Validation { details: String },

    /// HTTP 429.
    #[error("Rate limit exceeded. {}", retry_hint(.retry_after))]
    RateLimited { retry_after: Option<String> },

    /// HTTP 500.
    #[error("Server error. Please try again later.")]
    Server,

    /// Any other non-success status.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The request was sent but no response arrived (connect failure, timeout,
    /// truncated body).
    #[error("No response from server. Check your connection.")]
    NoResponse(#[source] reqwest::Error),

    /// The request could not be constructed.
    #[error("Request error: {0}")]
    Request(String),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConfigurationMissing,
    AuthenticationFailed,
    AccessDenied,
    NotFound,
    ValidationError,
    RateLimited,
    ServerError,
    GenericApiError,
    NoResponse,
    RequestSetupError,
}

fn retry_hint(retry_after: &Option<String>) -> String {
    match retry_after {
        Some(v) => format!("Retry after {} seconds.", v),
        None => "Retry after an unspecified delay.".to_string(),
    }
}

/// Null, `false`, `0` and `""` count as no error codes.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

impl Error {
    /// Maps a non-success HTTP status and its body to an error.
    ///
    /// `retry_after` is the raw `Retry-After` header value, if any.
    pub fn from_status(status: u16, body: &[u8], retry_after: Option<String>) -> Self {
        match status {
            401 => Error::AuthenticationFailed,
            403 => Error::AccessDenied,
            404 => Error::NotFound,
            422 => {
                let value = body_value(body);
                let details = match value.get("error_codes").filter(|c| !is_blank(c)) {
                    Some(codes) => pretty(codes),
                    None => pretty(&value),
                };
                Error::Validation { details }
            }
            429 => Error::RateLimited { retry_after },
            500 => Error::Server,
            _ => Error::Api {
                status,
                body: pretty(&body_value(body)),
            },
        }
    }

    /// Maps a transport-level failure.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Error::Request(err.to_string())
        } else {
            Error::NoResponse(err)
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ConfigurationMissing(_) => ErrorKind::ConfigurationMissing,
            Error::AuthenticationFailed => ErrorKind::AuthenticationFailed,
            Error::AccessDenied => ErrorKind::AccessDenied,
            Error::NotFound => ErrorKind::NotFound,
            Error::Validation { .. } => ErrorKind::ValidationError,
            Error::RateLimited { .. } => ErrorKind::RateLimited,
            Error::Server => ErrorKind::ServerError,
            Error::Api { .. } => ErrorKind::GenericApiError,
            Error::NoResponse(_) => ErrorKind::NoResponse,
            Error::Request(_) => ErrorKind::RequestSetupError,
        }
    }

    /// Returns the HTTP status that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::AuthenticationFailed => Some(401),
            Error::AccessDenied => Some(403),
            Error::NotFound => Some(404),
            Error::Validation { .. } => Some(422),
            Error::RateLimited { .. } => Some(429),
            Error::Server => Some(500),
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the server-advertised delay for a rate-limit error.
    ///
    /// Only the delta-seconds form of `Retry-After` is understood.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::RateLimited {
                retry_after: Some(v),
            } => v.trim().parse::<u64>().ok().map(Duration::from_secs),
            _ => None,
        }
    }

    /// Returns true if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Error::RateLimited { .. })
    }
}

/// Decodes a response body leniently: JSON when possible, the raw text
/// otherwise, `null` when empty.
pub(crate) fn body_value(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            Error::from_status(401, br#"{"message":"ignored"}"#, None).to_string(),
            "Authentication failed. Check your API key."
        );
        assert_eq!(
            Error::from_status(403, b"", None).to_string(),
            "Access denied. Insufficient permissions."
        );
        assert_eq!(Error::from_status(404, b"", None).to_string(), "Resource not found.");
        assert_eq!(
            Error::from_status(500, b"boom", None).to_string(),
            "Server error. Please try again later."
        );
    }

    #[test]
    fn test_validation_uses_error_codes() {
        let body = br#"{"request_id":"r1","error_type":"request_invalid","error_codes":["amount_required"]}"#;
        let err = Error::from_status(422, body, None);
        assert_eq!(err.kind(), ErrorKind::ValidationError);
        let msg = err.to_string();
        assert!(msg.starts_with("Validation error: "));
        assert!(msg.contains("amount_required"));
        assert!(!msg.contains("request_id"));
    }

    #[test]
    fn test_validation_falls_back_to_body() {
        let err = Error::from_status(422, br#"{"error_type":"request_invalid"}"#, None);
        assert!(err.to_string().contains("\"error_type\": \"request_invalid\""));

        for codes in ["null", "false", "0", "\"\""] {
            let body = format!(r#"{{"error_type":"request_invalid","error_codes":{}}}"#, codes);
            let err = Error::from_status(422, body.as_bytes(), None);
            assert!(
                err.to_string().contains("\"error_type\": \"request_invalid\""),
                "error_codes={} should fall back to the body",
                codes
            );
        }
    }

    #[test]
    fn test_rate_limited() {
        let err = Error::from_status(429, b"", Some("5".to_string()));
        assert!(err.is_rate_limit());
        assert!(err.to_string().contains('5'));
        assert_eq!(err.retry_after(), Some(Duration::from_secs(5)));

        let err = Error::from_status(429, b"", None);
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn test_generic_status() {
        let err = Error::from_status(409, br#"{"error_type":"conflict"}"#, None);
        assert_eq!(err.kind(), ErrorKind::GenericApiError);
        assert_eq!(err.status(), Some(409));
        let msg = err.to_string();
        assert!(msg.starts_with("API error (409): "));
        assert!(msg.contains("conflict"));
    }

    #[test]
    fn test_body_value() {
        assert_eq!(body_value(b""), Value::Null);
        assert_eq!(body_value(b" \n"), Value::Null);
        assert_eq!(body_value(b"plain"), Value::String("plain".to_string()));
        assert_eq!(body_value(br#"{"a":1}"#)["a"], 1);
    }
}
