//! Error types for decoding server documents.

use thiserror::Error;

/// Errors raised while decoding documents received from the server.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// The document was not valid JSON or did not match the expected shape.
    #[error("invalid {document} document: {reason}")]
    InvalidDocument {
        /// Kind of document being decoded ("report", "datamodel", ...).
        document: &'static str,
        /// Decoder message.
        reason: String,
    },
}

impl ModelError {
    pub(crate) fn invalid(document: &'static str, err: &serde_json::Error) -> Self {
        Self::InvalidDocument {
            document,
            reason: err.to_string(),
        }
    }
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
