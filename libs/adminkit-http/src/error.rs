use http::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single request issued through a [`RequestExecutor`].
///
/// Every variant carries a human-readable `Display` text except
/// [`TransportError::Rejected`], which stands for a failure value that is
/// not error-like (for example a bare JSON payload handed back by a custom
/// executor). Use [`TransportError::user_message`] to obtain display text.
///
/// [`RequestExecutor`]: crate::RequestExecutor
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransportError {
    /// Backend answered with a non-2xx status.
    #[error("{message}")]
    Status {
        status: StatusCode,
        /// Backend-provided message, or the canonical status text.
        message: String,
        /// Backend error code, when the body carried one.
        code: Option<String>,
        /// Backend error details, when the body carried them.
        details: Option<String>,
    },

    /// Request did not complete within the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Network or connection failure
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// TLS setup failure
    #[error("TLS error: {0}")]
    Tls(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// URL could not be resolved or is not allowed
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Query parameters could not be flattened into key/value pairs
    #[error("Invalid query parameter '{key}': nested objects are not supported")]
    InvalidQuery { key: String },

    /// Response body exceeded the configured limit
    #[error("Response body too large: limit {limit} bytes")]
    BodyTooLarge { limit: usize },

    /// Request building failed
    #[error("Failed to build request: {0}")]
    RequestBuild(#[from] http::Error),

    /// JSON encoding or decoding failed
    #[error("JSON processing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure value without a message
    #[error("request rejected")]
    Rejected(serde_json::Value),
}

impl TransportError {
    /// Status failure with an explicit message.
    #[must_use]
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
            code: None,
            details: None,
        }
    }

    /// Build a status failure from a raw error response body.
    ///
    /// Understands the backend's `{"error": {"code", "message", "details"}}`
    /// envelope and falls back to the canonical status text otherwise.
    #[must_use]
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let info = serde_json::from_slice::<RemoteErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.error);

        let (message, code, details) = match info {
            Some(info) => (info.message, info.code, info.details),
            None => (None, None, None),
        };

        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| canonical_message(status));

        Self::Status {
            status,
            message,
            code,
            details,
        }
    }

    /// Text intended for direct display, if this failure carries any.
    ///
    /// Returns `None` for [`TransportError::Rejected`] and for blank messages.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        if matches!(self, Self::Rejected(_)) {
            return None;
        }
        let message = self.to_string();
        if message.trim().is_empty() {
            None
        } else {
            Some(message)
        }
    }

    /// HTTP status of the failure, when the backend answered.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(StatusCode::NOT_FOUND)
    }
}

fn canonical_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("HTTP {}: {reason}", status.as_u16()),
        None => format!("HTTP {}", status.as_u16()),
    }
}

#[derive(Deserialize)]
struct RemoteErrorEnvelope {
    error: Option<RemoteErrorInfo>,
}

#[derive(Deserialize)]
struct RemoteErrorInfo {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
}
