use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure of a backend call, as seen by the screens
///
/// Every variant except `Unauthorized` is handled locally by the calling screen.
/// `Unauthorized` has already cleared the session and redirected to login by the
/// time the caller receives it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized: {}", .message.as_deref().unwrap_or("session is no longer valid"))]
    Unauthorized { message: Option<String> },

    #[error("backend returned {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Backend {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid client configuration: {0}")]
    Config(String),

    #[error("'{0}' is not a valid resource id")]
    InvalidId(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Creates a backend error from a status and optional message
    pub fn backend(status: StatusCode, message: Option<String>) -> Self {
        Self::Backend { status, message }
    }

    /// HTTP status of the failed response, when one was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            ApiError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Structured message supplied by the backend, if any
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message } | ApiError::Backend { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// Text to show the user: the backend message, or `fallback`
    ///
    /// Network and timeout failures carry no structured message and always
    /// fall back.
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::Config(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Extracts the backend's `detail` message from an error body
///
/// `detail` is either a string or a list of validation items whose `msg`
/// fields are joined with `"; "`.
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
