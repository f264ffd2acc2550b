//! GUI-specific error types.
//!
//! Errors here are shown to the user in the dismissible banner at the top of
//! the window, together with a suggestion for resolving them.

use qt_client::ClientError;
use thiserror::Error;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// The report list could not be fetched.
    #[error("Failed to load reports: {reason}")]
    ReportLoad {
        /// Description of what went wrong.
        reason: String,
        /// Whether retrying could help.
        retryable: bool,
    },

    /// The data model catalog could not be fetched.
    #[error("Failed to load the data model: {reason}")]
    DataModelLoad {
        /// Description of what went wrong.
        reason: String,
        /// Whether retrying could help.
        retryable: bool,
    },

    /// A metric record could not be fetched.
    #[error("Failed to load metric '{metric}': {reason}")]
    MetricLoad {
        /// Metric id.
        metric: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// Adding, copying, or moving a subject failed.
    #[error("Failed to {operation}: {reason}")]
    Mutation {
        /// The attempted operation, e.g. "copy subject".
        operation: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// Settings file could not be read.
    #[error("Failed to load settings: {reason}")]
    SettingsLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// Settings file could not be written.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ReportLoad { retryable: true, .. }
            | Self::DataModelLoad { retryable: true, .. } => {
                Some("Check that the Quality-time server is running, then reload.")
            }
            Self::ReportLoad { .. } | Self::DataModelLoad { .. } => {
                Some("Check the server URL in the settings file.")
            }
            Self::MetricLoad { .. } => Some("Use the retry button on the metric card."),
            Self::Mutation { .. } => Some("Reload the report and try again."),
            Self::SettingsLoad { .. } => {
                Some("Settings will be reset to defaults if the file is corrupted.")
            }
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
        }
    }

    /// Whether reloading the report could clear this error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ReportLoad {
                retryable: true,
                ..
            } | Self::DataModelLoad {
                retryable: true,
                ..
            }
        )
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Create a report load error from a client error.
    pub fn report_load(err: &ClientError) -> Self {
        Self::ReportLoad {
            reason: err.user_message().to_string(),
            retryable: err.is_retryable(),
        }
    }

    /// Create a data model load error from a client error.
    pub fn datamodel_load(err: &ClientError) -> Self {
        Self::DataModelLoad {
            reason: err.user_message().to_string(),
            retryable: err.is_retryable(),
        }
    }

    /// Create a metric load error.
    pub fn metric_load(metric: impl Into<String>, err: &ClientError) -> Self {
        Self::MetricLoad {
            metric: metric.into(),
            reason: err.user_message().to_string(),
        }
    }

    /// Create a mutation error.
    pub fn mutation(operation: impl Into<String>, err: &ClientError) -> Self {
        Self::Mutation {
            operation: operation.into(),
            reason: err.user_message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_report_load() {
        let err = GuiError::report_load(&ClientError::Network("refused".into()));
        assert!(err.is_retryable());
        assert_eq!(
            err.suggestion(),
            Some("Check that the Quality-time server is running, then reload.")
        );
    }

    #[test]
    fn test_invalid_url_is_not_retryable() {
        let err = GuiError::datamodel_load(&ClientError::InvalidUrl("ftp://x".into()));
        assert!(!err.is_retryable());
        assert_eq!(
            err.suggestion(),
            Some("Check the server URL in the settings file.")
        );
    }

    #[test]
    fn test_mutation_message() {
        let err = GuiError::mutation(
            "copy subject",
            &ClientError::Rejected {
                operation: "copy subject",
            },
        );
        assert_eq!(
            err.to_string(),
            "Failed to copy subject: The server refused the change."
        );
    }
}
