//! Subjects view message handler.
//!
//! Handles:
//! - The reveal timer of the mounted view
//! - The two view option setters
//! - Add, copy, and move subject actions, followed by a reload

use iced::Task;

use super::MessageHandler;
use crate::error::GuiError;
use crate::message::{Message, ReportMessage, SubjectMutation, SubjectsMessage};
use crate::service::mutate_subject;
use crate::state::{AppState, ViewState};

/// Handler for subjects view messages.
pub struct SubjectsHandler;

impl MessageHandler<SubjectsMessage> for SubjectsHandler {
    fn handle(&self, state: &mut AppState, msg: SubjectsMessage) -> Task<Message> {
        match msg {
            SubjectsMessage::RevealElapsed(mount) => {
                match &mut state.view {
                    ViewState::Subjects(subjects) => {
                        if subjects.on_reveal_elapsed(mount) {
                            tracing::debug!(%mount, "Revealed remaining subjects");
                        }
                    }
                    _ => tracing::debug!(%mount, "Reveal timer fired after unmount"),
                }
                Task::none()
            }

            SubjectsMessage::SetHiddenColumns(hidden_columns) => {
                if let ViewState::Subjects(subjects) = &mut state.view {
                    subjects.set_hidden_columns(hidden_columns, &mut state.location);
                }
                Task::none()
            }

            SubjectsMessage::SetHideMetricsNotRequiringAction(hide) => {
                if let ViewState::Subjects(subjects) = &mut state.view {
                    subjects.set_hide_metrics_not_requiring_action(hide, &mut state.location);
                }
                Task::none()
            }

            SubjectsMessage::Add => match state.report_uuid.clone() {
                Some(report) => mutate(state, SubjectMutation::Add { report }),
                None => Task::none(),
            },

            SubjectsMessage::Copy(option) => match state.report_uuid.clone() {
                Some(report) => mutate(
                    state,
                    SubjectMutation::Copy {
                        subject: option.subject_uuid,
                        report,
                    },
                ),
                None => Task::none(),
            },

            SubjectsMessage::Move(option) => match state.report_uuid.clone() {
                Some(report) => mutate(
                    state,
                    SubjectMutation::Move {
                        subject: option.subject_uuid,
                        report,
                    },
                ),
                None => Task::none(),
            },

            SubjectsMessage::MutationDone { operation, result } => match result {
                Ok(_) => Task::done(Message::from(ReportMessage::Reload)),
                Err(error) => {
                    state.show_error(GuiError::mutation(operation, &error));
                    Task::none()
                }
            },
        }
    }
}

fn mutate(state: &mut AppState, mutation: SubjectMutation) -> Task<Message> {
    if !state.settings.permissions.can_edit() {
        tracing::warn!(operation = mutation.operation(), "Editing is not permitted");
        return Task::none();
    }
    let Some(client) = state.client.clone() else {
        return Task::none();
    };
    let operation = mutation.operation();
    tracing::info!(?mutation, "Applying subject mutation");
    Task::perform(mutate_subject(client, mutation), move |result| {
        Message::from(SubjectsMessage::MutationDone { operation, result })
    })
}
