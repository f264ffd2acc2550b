//! Menu options for copying and moving subjects between reports.

use std::fmt;

use crate::datamodel::DataModel;
use crate::ids::{ReportId, SubjectId};
use crate::report::Report;

/// One entry of the copy or move subject menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectOption {
    /// Subject to copy or move.
    pub subject_uuid: SubjectId,
    /// Report the subject currently lives in.
    pub report_uuid: ReportId,
    /// Menu label: `<report title> ⯈ <subject name>`.
    pub text: String,
}

impl fmt::Display for SubjectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Build the options for a copy or move subject menu.
///
/// Lists every subject of every report, sorted by label. Subjects of
/// `exclude_report` are left out; the move menu passes the current report so
/// a subject cannot be moved onto itself.
pub fn subject_options(
    reports: &[Report],
    datamodel: &DataModel,
    exclude_report: Option<&ReportId>,
) -> Vec<SubjectOption> {
    let mut options: Vec<SubjectOption> = reports
        .iter()
        .filter(|report| Some(&report.report_uuid) != exclude_report)
        .flat_map(|report| {
            report
                .subjects
                .iter()
                .map(move |(subject_uuid, subject)| SubjectOption {
                    subject_uuid: subject_uuid.clone(),
                    report_uuid: report.report_uuid.clone(),
                    text: format!("{} ⯈ {}", report.title, subject.display_name(datamodel)),
                })
        })
        .collect();
    options.sort_by(|a, b| a.text.cmp(&b.text));
    options
}
