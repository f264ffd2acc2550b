//! A single metric record and the search filter applied to it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, Result};

/// The `{ measurement, metric, source }` document served for one metric.
///
/// The three parts are kept as raw JSON and handed to the measurement view
/// unmodified. Only `metric.name` is inspected here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde(default)]
    pub measurement: Value,
    #[serde(default)]
    pub metric: Value,
    #[serde(default)]
    pub source: Value,
}

impl MetricRecord {
    /// Decode a record document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ModelError::invalid("metric record", &e))
    }

    /// The metric's `name` field, when present and a string.
    pub fn metric_name(&self) -> Option<&str> {
        self.metric.get("name").and_then(Value::as_str)
    }

    /// Whether the record passes the search filter.
    ///
    /// A record without a metric name only passes an absent or empty search.
    pub fn matches_search(&self, search: Option<&str>) -> bool {
        matches_search(self.metric_name().unwrap_or_default(), search)
    }
}

/// Case-insensitive substring filter.
///
/// An absent or empty search string matches everything.
pub fn matches_search(name: &str, search: Option<&str>) -> bool {
    match search {
        None => true,
        Some(s) if s.is_empty() => true,
        Some(s) => name.to_lowercase().contains(&s.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str) -> MetricRecord {
        MetricRecord {
            measurement: json!({"value": "42"}),
            metric: json!({"name": name}),
            source: json!({"type": "sonarqube"}),
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        assert!(record("Code Coverage").matches_search(Some("cov")));
        assert!(record("Code Coverage").matches_search(Some("CODE c")));
        assert!(!record("Test Count").matches_search(Some("cov")));
    }

    #[test]
    fn test_absent_or_empty_search_matches() {
        assert!(record("Test Count").matches_search(None));
        assert!(record("Test Count").matches_search(Some("")));
    }

    #[test]
    fn test_missing_name_only_matches_empty_search() {
        let nameless = MetricRecord {
            metric: json!({"type": "violations"}),
            ..MetricRecord::default()
        };
        assert_eq!(nameless.metric_name(), None);
        assert!(nameless.matches_search(None));
        assert!(!nameless.matches_search(Some("v")));
    }

    #[test]
    fn test_decodes_record_document() {
        let record = MetricRecord::from_json(
            r#"{"measurement": {"value": "10"}, "metric": {"name": "Security"}, "source": {}}"#,
        )
        .unwrap();
        assert_eq!(record.metric_name(), Some("Security"));
        assert_eq!(record.measurement["value"], "10");
        assert!(MetricRecord::from_json("not json").is_err());
    }
}
