//! Subject view: title, column controls, and the metric table.
//!
//! A subject receives the report's view options and the two setters that
//! change them. Changing an option here changes it for every subject.

use iced::widget::{Column, Row, Space, button, column, container, row, text, toggler};
use iced::{Alignment, Element, Length};

use qt_model::{Column as MetricColumn, DataModel, Metric, SubjectSlot, ViewOptions};

use crate::message::Message;
use crate::theme::{
    METRIC_NAME_WIDTH, SPACING_MD, SPACING_SM, SPACING_XS, button_chip, container_card,
    container_table_header, text_muted, text_status,
};

/// Everything a subject view receives from its owner.
pub struct SubjectProps<'a> {
    pub slot: SubjectSlot<'a>,
    pub options: &'a ViewOptions,
    pub datamodel: &'a DataModel,
    pub set_hidden_columns: fn(Vec<String>) -> Message,
    pub set_hide_metrics_not_requiring_action: fn(bool) -> Message,
}

/// Label describing where the subject sits in the report.
pub fn position_label(slot: &SubjectSlot<'_>) -> String {
    match (slot.first_subject, slot.last_subject) {
        (true, true) => "Only subject".to_string(),
        (true, false) => "First subject".to_string(),
        (false, true) => "Last subject".to_string(),
        (false, false) => format!("Subject {}", slot.index + 1),
    }
}

/// Text of one table cell.
pub fn cell_text(column: MetricColumn, metric: &Metric, datamodel: &DataModel) -> String {
    let with_unit = |value: &str| match &metric.unit {
        Some(unit) => format!("{value} {unit}"),
        None => value.to_string(),
    };
    match column {
        MetricColumn::Trend => metric.scale.clone().unwrap_or_default(),
        MetricColumn::Status => metric
            .status
            .map_or("Unknown", |status| status.label())
            .to_string(),
        MetricColumn::Measurement => metric
            .value
            .as_deref()
            .map_or_else(|| "?".to_string(), with_unit),
        MetricColumn::Target => metric.target.as_deref().map(with_unit).unwrap_or_default(),
        MetricColumn::Source => metric
            .sources
            .values()
            .map(|source| source.display_name(datamodel))
            .collect::<Vec<_>>()
            .join(", "),
        MetricColumn::Comment => metric.comment.clone().unwrap_or_default(),
        MetricColumn::Tags => metric.tags.join(", "),
    }
}

/// Render one subject.
pub fn view_subject(props: SubjectProps<'_>) -> Element<'_, Message> {
    let SubjectProps {
        slot,
        options,
        datamodel,
        set_hidden_columns,
        set_hide_metrics_not_requiring_action,
    } = props;
    let subject = slot.subject;

    let header = row![
        column![
            text(subject.display_name(datamodel).to_string()).size(20),
            text(
                datamodel
                    .subject_type_name(&subject.subject_type)
                    .unwrap_or_default()
                    .to_string()
            )
            .size(12)
            .style(text_muted),
        ]
        .spacing(2.0),
        Space::new().width(Length::Fill),
        text(position_label(&slot)).size(12).style(text_muted),
    ]
    .align_y(Alignment::Center);

    let column_chips = MetricColumn::ALL.into_iter().fold(
        Row::new()
            .spacing(SPACING_XS)
            .align_y(Alignment::Center)
            .push(text("Columns").size(12).style(text_muted)),
        |chips, column| {
            chips.push(
                button(text(column.label()).size(12))
                    .on_press(set_hidden_columns(options.toggled_column(column)))
                    .padding([2.0, 8.0])
                    .style(button_chip(!options.is_column_hidden(column))),
            )
        },
    );

    let toolbar = row![
        column_chips,
        Space::new().width(Length::Fill),
        toggler(options.hide_metrics_not_requiring_action)
            .on_toggle(set_hide_metrics_not_requiring_action),
        text("Hide metrics not requiring action").size(12),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let columns = options.visible_columns();
    let table_header = container(
        columns.iter().fold(
            Row::new()
                .spacing(SPACING_SM)
                .push(text("Metric").size(12).width(Length::Fixed(METRIC_NAME_WIDTH))),
            |header, column| header.push(text(column.label()).size(12).width(Length::Fill)),
        ),
    )
    .padding([4.0, 8.0])
    .width(Length::Fill)
    .style(container_table_header);

    let rows: Vec<Element<'_, Message>> = subject
        .metrics
        .values()
        .filter(|metric| options.shows_metric(metric))
        .map(|metric| metric_row(metric, &columns, datamodel))
        .collect();

    let table: Element<'_, Message> = if rows.is_empty() {
        text("No metrics to show").size(13).style(text_muted).into()
    } else {
        Column::with_children(rows).spacing(2.0).into()
    };

    container(
        column![header, toolbar, table_header, table]
            .spacing(SPACING_SM)
            .width(Length::Fill),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(container_card)
    .into()
}

fn metric_row<'a>(
    metric: &'a Metric,
    columns: &[MetricColumn],
    datamodel: &'a DataModel,
) -> Element<'a, Message> {
    let name = text(metric.display_name(datamodel).to_string())
        .size(13)
        .width(Length::Fixed(METRIC_NAME_WIDTH));

    columns
        .iter()
        .fold(Row::new().spacing(SPACING_SM).push(name), |row, column| {
            let cell = text(cell_text(*column, metric, datamodel))
                .size(13)
                .width(Length::Fill);
            let cell = if *column == MetricColumn::Status {
                cell.style(text_status(metric.status))
            } else {
                cell
            };
            row.push(cell)
        })
        .padding([4.0, 8.0])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qt_model::{MetricStatus, Report, StagedReveal};

    fn metric() -> Metric {
        serde_json::from_str(
            r#"{
                "name": "Violations", "type": "violations", "status": "near_target_met",
                "scale": "count", "value": "7", "unit": "violations", "target": "5",
                "comment": "Legacy code", "tags": ["security", "backend"],
                "sources": {"src-1": {"name": "SonarQube", "type": "sonarqube"}, "src-2": {"type": "gitlab"}}
            }"#,
        )
        .unwrap()
    }

    fn datamodel() -> DataModel {
        DataModel::from_json(
            r#"{"subjects": {}, "metrics": {}, "sources": {"gitlab": {"name": "GitLab"}}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_cells() {
        let metric = metric();
        let datamodel = datamodel();
        let cell = |column| cell_text(column, &metric, &datamodel);
        assert_eq!(cell(MetricColumn::Trend), "count");
        assert_eq!(cell(MetricColumn::Status), MetricStatus::NearTargetMet.label());
        assert_eq!(cell(MetricColumn::Measurement), "7 violations");
        assert_eq!(cell(MetricColumn::Target), "5 violations");
        assert_eq!(cell(MetricColumn::Source), "SonarQube, GitLab");
        assert_eq!(cell(MetricColumn::Comment), "Legacy code");
        assert_eq!(cell(MetricColumn::Tags), "security, backend");
    }

    #[test]
    fn test_empty_metric_cells() {
        let metric = Metric::default();
        let datamodel = DataModel::default();
        assert_eq!(cell_text(MetricColumn::Measurement, &metric, &datamodel), "?");
        assert_eq!(cell_text(MetricColumn::Status, &metric, &datamodel), "Unknown");
        assert_eq!(cell_text(MetricColumn::Target, &metric, &datamodel), "");
    }

    #[test]
    fn test_position_labels() {
        let report = Report::from_json(
            r#"{"report_uuid": "r", "title": "R", "subjects": {
                "a": {"type": "software", "metrics": {}},
                "b": {"type": "software", "metrics": {}},
                "c": {"type": "software", "metrics": {}}
            }}"#,
        )
        .unwrap();
        let mut reveal = StagedReveal::new();
        reveal.reveal();
        let labels: Vec<String> = reveal.slots(&report).iter().map(position_label).collect();
        assert_eq!(labels, ["First subject", "Subject 2", "Last subject"]);

        let single = Report::from_json(
            r#"{"report_uuid": "r", "title": "R", "subjects": {"a": {"type": "software", "metrics": {}}}}"#,
        )
        .unwrap();
        let slots = reveal.slots(&single);
        assert_eq!(position_label(&slots[0]), "Only subject");
    }
}
