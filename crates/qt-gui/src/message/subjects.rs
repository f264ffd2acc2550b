//! Subjects view messages.

use qt_client::{ClientError, MutationResponse};
use qt_model::{ReportId, SubjectId, SubjectOption};

use crate::state::MountId;

/// Messages for the subjects view.
#[derive(Debug, Clone)]
pub enum SubjectsMessage {
    /// The reveal delay of the given mount elapsed
    RevealElapsed(MountId),
    /// Setter: replace the hidden columns
    SetHiddenColumns(Vec<String>),
    /// Setter: replace the hide-metrics flag
    SetHideMetricsNotRequiringAction(bool),
    /// Add a new subject to the current report
    Add,
    /// Copy the chosen subject into the current report
    Copy(SubjectOption),
    /// Move the chosen subject into the current report
    Move(SubjectOption),
    /// A mutation finished
    MutationDone {
        operation: &'static str,
        result: Result<MutationResponse, ClientError>,
    },
}

/// A change to a report's subjects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectMutation {
    Add {
        report: ReportId,
    },
    Copy {
        subject: SubjectId,
        report: ReportId,
    },
    Move {
        subject: SubjectId,
        report: ReportId,
    },
}

impl SubjectMutation {
    /// Human-readable name, used in logs and error messages.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add subject",
            Self::Copy { .. } => "copy subject",
            Self::Move { .. } => "move subject",
        }
    }
}
