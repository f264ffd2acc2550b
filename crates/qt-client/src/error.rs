//! Error types for server communication.

use thiserror::Error;

/// Errors that can occur while talking to the server.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClientError {
    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// The server did not answer within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout {
        /// Requested URL.
        url: String,
    },

    /// The server answered with a non-success status code.
    #[error("{url} returned HTTP {code}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Requested URL.
        url: String,
    },

    /// The response body was not the expected JSON document.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// A configured base URL is unusable.
    #[error("invalid server URL: {0}")]
    InvalidUrl(String),

    /// The server processed a mutation but reported failure.
    #[error("server rejected {operation}")]
    Rejected {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

impl ClientError {
    /// Returns a user-friendly error message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not connect to the Quality-time server.",
            Self::Timeout { .. } => "The Quality-time server did not respond in time.",
            Self::Status { code: 404, .. } => "The requested item does not exist.",
            Self::Status { .. } => "The Quality-time server returned an error.",
            Self::JsonParse(_) => "The server response could not be read.",
            Self::InvalidUrl(_) => "The configured server URL is invalid.",
            Self::Rejected { .. } => "The server refused the change.",
        }
    }

    /// Returns whether the failed request is worth retrying.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout { .. } => true,
            Self::Status { code, .. } => *code >= 500,
            Self::JsonParse(_) | Self::InvalidUrl(_) | Self::Rejected { .. } => false,
        }
    }

    pub(crate) fn from_reqwest(err: &reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else if err.is_decode() {
            Self::JsonParse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                code: status.as_u16(),
                url: url.to_string(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

impl From<qt_model::ModelError> for ClientError {
    fn from(err: qt_model::ModelError) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
