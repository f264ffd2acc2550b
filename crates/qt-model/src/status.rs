//! Metric status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Evaluation of a metric's latest measurement against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    TargetMet,
    NearTargetMet,
    DebtTargetMet,
    TargetNotMet,
    Informative,
    #[serde(other)]
    Unknown,
}

impl MetricStatus {
    /// All statuses in display order.
    pub const ALL: [MetricStatus; 6] = [
        Self::TargetNotMet,
        Self::NearTargetMet,
        Self::DebtTargetMet,
        Self::TargetMet,
        Self::Informative,
        Self::Unknown,
    ];

    /// Whether a metric with this status needs someone to act on it.
    pub fn requires_action(self) -> bool {
        matches!(
            self,
            Self::TargetNotMet | Self::NearTargetMet | Self::Unknown
        )
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TargetMet => "Target met",
            Self::NearTargetMet => "Near target met",
            Self::DebtTargetMet => "Technical debt target met",
            Self::TargetNotMet => "Target not met",
            Self::Informative => "Informative",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a metric with an optional status requires action.
///
/// A metric that has never been measured has no status and counts as unknown.
pub fn requires_action(status: Option<MetricStatus>) -> bool {
    status.unwrap_or(MetricStatus::Unknown).requires_action()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_action_table() {
        assert!(MetricStatus::TargetNotMet.requires_action());
        assert!(MetricStatus::NearTargetMet.requires_action());
        assert!(MetricStatus::Unknown.requires_action());
        assert!(!MetricStatus::TargetMet.requires_action());
        assert!(!MetricStatus::DebtTargetMet.requires_action());
        assert!(!MetricStatus::Informative.requires_action());
        assert!(requires_action(None));
    }

    #[test]
    fn test_unrecognized_status_is_unknown() {
        let status: MetricStatus = serde_json::from_str("\"something_new\"").unwrap();
        assert_eq!(status, MetricStatus::Unknown);
        let status: MetricStatus = serde_json::from_str("\"debt_target_met\"").unwrap();
        assert_eq!(status, MetricStatus::DebtTargetMet);
    }
}
