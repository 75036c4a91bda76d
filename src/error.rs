//! Unified SDK error types.
//!
//! The taxonomy the rest of the crate relies on:
//! - **transport** failures — the backend never answered (`HttpError::Transport`, `HttpError::Timeout`),
//! - **network** failures — the backend answered with a non-2xx status,
//! - **validation** failures — caught before a request is made (`SdkError::Validation`),
//! - **invalid responses** — a 2xx body that does not convert to a domain type
//!   (`SdkError::InvalidResponse`).

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// The backend answered with a non-2xx status.
    pub fn is_network(&self) -> bool {
        matches!(self, SdkError::Http(e) if e.is_network())
    }

    /// The backend could not be reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, SdkError::Http(e) if e.is_transport())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SdkError::Validation(_))
    }

    pub fn is_invalid_response(&self) -> bool {
        matches!(self, SdkError::InvalidResponse(_))
    }

    /// HTTP status of a network error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Message suitable for an error banner in a view.
    pub fn user_message(&self) -> String {
        match self {
            SdkError::Http(HttpError::NotFound(msg)) if !msg.is_empty() => msg.clone(),
            SdkError::Http(HttpError::NotFound(_)) => "Not found".to_string(),
            SdkError::Http(e) if e.is_transport() => {
                "Could not reach the server. Is the backend running?".to_string()
            }
            SdkError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Timeout")]
    Timeout,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },
}

impl HttpError {
    /// Map a non-2xx status and its body to an error variant.
    pub fn from_status(status: u16, body: String) -> Self {
        let message = detail_message(&body);
        match status {
            401 => HttpError::Unauthorized,
            404 => HttpError::NotFound(message),
            409 => HttpError::Conflict(message),
            422 => HttpError::Unprocessable(message),
            429 => HttpError::RateLimited {
                retry_after_ms: None,
            },
            400..=499 => HttpError::BadRequest(message),
            _ => HttpError::ServerError {
                status,
                body: message,
            },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Unauthorized => Some(401),
            HttpError::NotFound(_) => Some(404),
            HttpError::Conflict(_) => Some(409),
            HttpError::Unprocessable(_) => Some(422),
            HttpError::RateLimited { .. } => Some(429),
            HttpError::BadRequest(_) => Some(400),
            HttpError::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        self.status().is_some()
    }

    pub fn is_transport(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            HttpError::Transport(e) => e.status().is_none(),
            HttpError::Timeout => true,
            _ => false,
        }
    }
}

/// FastAPI wraps error messages as `{"detail": "..."}`; fall back to the raw body.
fn detail_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| match v.get("detail") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        })
        .unwrap_or_else(|| body.to_string())
}
