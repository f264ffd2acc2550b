//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and events flow through these message types.

pub mod metrics;
pub mod report;
pub mod subjects;

use iced::keyboard;

pub use metrics::MetricsMessage;
pub use report::{ReportChoice, ReportMessage};
pub use subjects::{SubjectMutation, SubjectsMessage};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Report loading, selection, and tabs
    Report(ReportMessage),

    /// Subjects view messages
    Subjects(SubjectsMessage),

    /// Metrics view messages
    Metrics(MetricsMessage),

    // =========================================================================
    // Global
    // =========================================================================
    /// Close the error banner
    DismissError,

    /// Copy the current report link, view options included, to the clipboard
    CopyLink,

    /// Keyboard shortcut
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation
    Noop,
}

impl From<ReportMessage> for Message {
    fn from(msg: ReportMessage) -> Self {
        Self::Report(msg)
    }
}

impl From<SubjectsMessage> for Message {
    fn from(msg: SubjectsMessage) -> Self {
        Self::Subjects(msg)
    }
}

impl From<MetricsMessage> for Message {
    fn from(msg: MetricsMessage) -> Self {
        Self::Metrics(msg)
    }
}
