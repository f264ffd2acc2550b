//! Subjects view.
//!
//! Renders the subjects that the staged reveal lets through, each with the
//! shared view options, followed by the edit controls.

use iced::widget::{Column, container, row, scrollable};
use iced::{Element, Length};

use qt_model::{Report, subject_options};

use crate::component::{add_button, copy_button, move_button, read_only_or_editable};
use crate::message::{Message, SubjectsMessage};
use crate::state::{AppState, SubjectsState};
use crate::theme::{SPACING_LG, SPACING_SM};

use super::subject::{SubjectProps, view_subject};

/// Render the mounted subjects view for `report`.
pub fn view_subjects<'a>(
    state: &'a AppState,
    subjects: &'a SubjectsState,
    report: &'a Report,
) -> Element<'a, Message> {
    let options = subjects.options();

    let list = subjects
        .slots(report)
        .into_iter()
        .fold(Column::new().spacing(SPACING_LG), |list, slot| {
            list.push(view_subject(SubjectProps {
                slot,
                options,
                datamodel: &state.datamodel,
                set_hidden_columns: |columns| {
                    Message::from(SubjectsMessage::SetHiddenColumns(columns))
                },
                set_hide_metrics_not_requiring_action: |hide| {
                    Message::from(SubjectsMessage::SetHideMetricsNotRequiringAction(hide))
                },
            }))
        })
        .push(read_only_or_editable(state.settings.permissions, || {
            subject_edit_controls(state, report)
        }));

    scrollable(container(list).padding(SPACING_LG).width(Length::Fill))
        .height(Length::Fill)
        .into()
}

fn subject_edit_controls<'a>(state: &'a AppState, report: &'a Report) -> Element<'a, Message> {
    let copy_options = subject_options(&state.reports, &state.datamodel, None);
    let move_options = subject_options(
        &state.reports,
        &state.datamodel,
        Some(&report.report_uuid),
    );

    row![
        add_button("subject", Message::from(SubjectsMessage::Add)),
        copy_button("subject", copy_options, |option| {
            Message::from(SubjectsMessage::Copy(option))
        }),
        move_button("subject", move_options, |option| {
            Message::from(SubjectsMessage::Move(option))
        }),
    ]
    .spacing(SPACING_SM)
    .into()
}
