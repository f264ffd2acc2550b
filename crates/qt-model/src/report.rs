//! Reports as served by the Quality-time API.
//!
//! A report groups subjects; a subject groups metrics; a metric is fed by one
//! or more sources. Each level is an [`OrderedMap`] so the order in which the
//! server lists items is the order in which they are shown.

use serde::{Deserialize, Serialize};

use crate::datamodel::DataModel;
use crate::error::{ModelError, Result};
use crate::ids::{MetricId, ReportId, SourceId, SubjectId};
use crate::ordered::OrderedMap;
use crate::status::{self, MetricStatus};

/// The `{ "reports": [...] }` document returned by the reports endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reports {
    #[serde(default)]
    pub reports: Vec<Report>,
}

impl Reports {
    /// Decode a reports document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ModelError::invalid("reports", &e))
    }

    /// Find a report by id.
    pub fn find(&self, report_uuid: &ReportId) -> Option<&Report> {
        self.reports.iter().find(|r| &r.report_uuid == report_uuid)
    }
}

/// A report: an ordered collection of subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub report_uuid: ReportId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub subjects: OrderedMap<SubjectId, Subject>,
}

impl Report {
    /// Decode a single report document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ModelError::invalid("report", &e))
    }

    /// Number of metrics across all subjects.
    pub fn metric_count(&self) -> usize {
        self.subjects.values().map(|s| s.metrics.len()).sum()
    }

    /// All metric ids in display order.
    pub fn metric_ids(&self) -> Vec<MetricId> {
        self.subjects
            .values()
            .flat_map(|s| s.metrics.keys().cloned())
            .collect()
    }
}

/// A named grouping of metrics within a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "type", default)]
    pub subject_type: String,

    #[serde(default)]
    pub metrics: OrderedMap<MetricId, Metric>,
}

impl Subject {
    /// Display name, falling back to the subject type's name.
    pub fn display_name<'a>(&'a self, datamodel: &'a DataModel) -> &'a str {
        display_name(
            self.name.as_deref(),
            datamodel.subject_type_name(&self.subject_type),
            "Unnamed subject",
        )
    }
}

/// A measured quality attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "type", default)]
    pub metric_type: String,

    /// Status of the latest measurement.
    #[serde(default)]
    pub status: Option<MetricStatus>,

    /// Scale the value and target are expressed in ("count", "percentage", ...).
    #[serde(default)]
    pub scale: Option<String>,

    /// Latest measured value, as rendered by the server.
    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub target: Option<String>,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub sources: OrderedMap<SourceId, Source>,
}

impl Metric {
    /// Display name, falling back to the metric type's name.
    pub fn display_name<'a>(&'a self, datamodel: &'a DataModel) -> &'a str {
        display_name(
            self.name.as_deref(),
            datamodel.metric_type_name(&self.metric_type),
            "Unnamed metric",
        )
    }

    /// Whether the metric needs attention given its current status.
    pub fn requires_action(&self) -> bool {
        status::requires_action(self.status)
    }
}

/// A data provider feeding measurements into a metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "type", default)]
    pub source_type: String,
}

impl Source {
    /// Display name, falling back to the source type's name.
    pub fn display_name<'a>(&'a self, datamodel: &'a DataModel) -> &'a str {
        display_name(
            self.name.as_deref(),
            datamodel.source_type_name(&self.source_type),
            "Unnamed source",
        )
    }
}

fn display_name<'a>(
    name: Option<&'a str>,
    type_name: Option<&'a str>,
    fallback: &'static str,
) -> &'a str {
    name.filter(|n| !n.is_empty())
        .or(type_name)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"{
        "report_uuid": "r1",
        "title": "Quality report",
        "subjects": {
            "s2": {"type": "software", "metrics": {
                "m1": {"name": "Coverage", "type": "test_coverage", "status": "target_met"},
                "m2": {"type": "violations", "status": null}
            }},
            "s1": {"name": "Backend", "type": "software", "metrics": {}}
        }
    }"#;

    fn datamodel() -> DataModel {
        DataModel::from_json(
            r#"{"subjects": {"software": {"name": "Software"}},
                "metrics": {"violations": {"name": "Violations"}}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_subject_order_follows_document() {
        let report = Report::from_json(REPORT).unwrap();
        let ids: Vec<&str> = report.subjects.keys().map(SubjectId::as_str).collect();
        assert_eq!(ids, ["s2", "s1"]);
        assert_eq!(report.metric_count(), 2);
        assert_eq!(
            report.metric_ids(),
            vec![MetricId::new("m1"), MetricId::new("m2")]
        );
    }

    #[test]
    fn test_display_names_fall_back_to_type() {
        let report = Report::from_json(REPORT).unwrap();
        let dm = datamodel();
        let s2 = report.subjects.get(&SubjectId::new("s2")).unwrap();
        let s1 = report.subjects.get(&SubjectId::new("s1")).unwrap();
        assert_eq!(s2.display_name(&dm), "Software");
        assert_eq!(s1.display_name(&dm), "Backend");

        let m2 = s2.metrics.get(&MetricId::new("m2")).unwrap();
        assert_eq!(m2.display_name(&dm), "Violations");
        assert!(m2.requires_action());
        let m1 = s2.metrics.get(&MetricId::new("m1")).unwrap();
        assert!(!m1.requires_action());
    }

    #[test]
    fn test_invalid_document_is_reported() {
        let err = Report::from_json("{\"title\": 3}").unwrap_err();
        assert!(err.to_string().starts_with("invalid report document"));
    }
}
