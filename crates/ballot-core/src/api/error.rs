//! Backend client errors.

use std::fmt;

use serde_json::Value;

/// Categories of backend failures.
///
/// The sign-in flows only distinguish "the server answered with an error"
/// from "we never got a usable answer".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Non-2xx HTTP status.
    HttpStatus,
    /// Connection refused, timeout, or request could not be sent.
    Transport,
    /// Response body could not be decoded.
    Parse,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::HttpStatus => write!(f, "http_status"),
            ApiErrorKind::Transport => write!(f, "transport"),
            ApiErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Structured error from the backend client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display.
    pub message: String,
    /// HTTP status, for `HttpStatus` errors.
    pub status: Option<u16>,
    /// `message` field of the error body, when the server provided one.
    server_message: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            server_message: None,
        }
    }

    /// Creates an HTTP status error, pulling `message` out of a JSON body.
    pub fn http_status(status: u16, body: &str) -> Self {
        let server_message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| {
                json.get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            });
        let message = match &server_message {
            Some(msg) => format!("HTTP {status}: {msg}"),
            None => format!("HTTP {status}"),
        };
        Self {
            kind: ApiErrorKind::HttpStatus,
            message,
            status: Some(status),
            server_message,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Transport, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Parse, message)
    }

    /// The server-provided `message`, verbatim.
    pub fn server_message(&self) -> Option<&str> {
        self.server_message.as_deref()
    }

    pub fn is_http_status(&self) -> bool {
        self.kind == ApiErrorKind::HttpStatus
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Classifies a send-side reqwest failure.
pub fn classify_reqwest_error(e: &reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::transport(format!("Request timed out: {e}"))
    } else if e.is_connect() {
        ApiError::transport(format!("Connection failed: {e}"))
    } else if e.is_decode() {
        ApiError::parse(format!("Invalid response body: {e}"))
    } else {
        ApiError::transport(format!("Network error: {e}"))
    }
}

/// Result type for backend operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
