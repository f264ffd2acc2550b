//! Report-level messages.

use std::fmt;

use qt_client::ClientError;
use qt_model::{DataModel, Report, ReportId, Reports};

use crate::state::{MountId, Tab};

/// Messages for loading and selecting reports.
#[derive(Debug, Clone)]
pub enum ReportMessage {
    /// Fetch the reports and the data model again
    Reload,
    /// Reports fetch finished
    ReportsLoaded {
        generation: MountId,
        result: Result<Reports, ClientError>,
    },
    /// Data model fetch finished
    DataModelLoaded {
        generation: MountId,
        result: Result<DataModel, ClientError>,
    },
    /// Switch to another report
    Select(ReportChoice),
    /// Switch between the subjects and metrics views
    ShowTab(Tab),
}

/// Entry of the report selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportChoice {
    pub report_uuid: ReportId,
    pub title: String,
}

impl ReportChoice {
    pub fn from_report(report: &Report) -> Self {
        Self {
            report_uuid: report.report_uuid.clone(),
            title: report.title.clone(),
        }
    }
}

impl fmt::Display for ReportChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
