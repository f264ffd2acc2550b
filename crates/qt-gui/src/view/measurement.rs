//! Measurement view: the body of a metric card.
//!
//! Receives the record's `measurement`, `metric`, and `source` documents as
//! fetched and picks out what it displays.

use iced::widget::{column, row, text};
use iced::{Alignment, Element};
use serde_json::Value;

use qt_model::MetricStatus;

use crate::message::Message;
use crate::theme::{SPACING_SM, SPACING_XS, text_muted, text_status};

/// Scale used when the metric document does not name one.
const DEFAULT_SCALE: &str = "count";

/// The displayed parts of a measurement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementSummary {
    pub metric_name: String,
    pub value: Option<String>,
    pub unit: Option<String>,
    pub status: Option<MetricStatus>,
    pub source_name: Option<String>,
    pub measured_at: Option<String>,
}

impl MeasurementSummary {
    pub fn new(measurement: &Value, metric: &Value, source: &Value) -> Self {
        let scale = str_field(metric, "scale").unwrap_or(DEFAULT_SCALE);
        let scaled = measurement.get(scale);
        let value = scaled
            .and_then(|m| m.get("value"))
            .or_else(|| measurement.get("value"))
            .and_then(value_text);
        let status = scaled
            .and_then(|m| m.get("status"))
            .or_else(|| measurement.get("status"))
            .and_then(|s| serde_json::from_value(s.clone()).ok());

        Self {
            metric_name: str_field(metric, "name")
                .unwrap_or("Unnamed metric")
                .to_string(),
            value,
            unit: str_field(metric, "unit").map(str::to_string),
            status,
            source_name: str_field(source, "name")
                .or_else(|| str_field(source, "type"))
                .map(str::to_string),
            measured_at: str_field(measurement, "end").map(str::to_string),
        }
    }

    /// Value followed by the unit, or `?` when there is no value.
    pub fn value_label(&self) -> String {
        match (&self.value, &self.unit) {
            (Some(value), Some(unit)) => format!("{value} {unit}"),
            (Some(value), None) => value.clone(),
            (None, _) => "?".to_string(),
        }
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Render a measurement.
pub fn view_measurement<'a>(
    measurement: &'a Value,
    metric: &'a Value,
    source: &'a Value,
) -> Element<'a, Message> {
    let summary = MeasurementSummary::new(measurement, metric, source);
    let status_label = summary
        .status
        .map_or("Unknown", MetricStatus::label)
        .to_string();

    let mut content = column![
        text(summary.metric_name.clone()).size(16),
        row![
            text(summary.value_label()).size(24),
            text(status_label).size(13).style(text_status(summary.status)),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::End),
    ]
    .spacing(SPACING_XS);

    if let Some(source_name) = summary.source_name {
        content = content.push(text(format!("Source: {source_name}")).size(12).style(text_muted));
    }
    if let Some(measured_at) = summary.measured_at {
        content = content.push(text(format!("Measured: {measured_at}")).size(12).style(text_muted));
    }

    content.into()
}
