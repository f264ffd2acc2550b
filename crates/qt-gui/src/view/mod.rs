//! Views.
//!
//! Pure functions from state to elements; every interaction is a [`Message`].

pub mod header;
pub mod measurement;
pub mod metric_card;
pub mod metrics;
pub mod subject;
pub mod subjects;

use iced::widget::{column, container};
use iced::{Element, Length};
use iced_fonts::lucide;

use crate::component::{EmptyState, error_banner, loading_state};
use crate::message::{Message, ReportMessage};
use crate::state::{AppState, ViewState};
use crate::theme::SPACING_SM;

pub use header::view_header;
pub use measurement::{MeasurementSummary, view_measurement};
pub use metric_card::view_metric_card;
pub use metrics::view_metrics;
pub use subject::{SubjectProps, view_subject};
pub use subjects::view_subjects;

/// Render the whole window.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let mut layout = column![view_header(state)];

    if let Some(error) = &state.error {
        let retry = error
            .is_retryable()
            .then(|| Message::from(ReportMessage::Reload));
        layout = layout.push(
            container(error_banner(error, Message::DismissError, retry)).padding(SPACING_SM),
        );
    }

    layout
        .push(
            container(view_content(state))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn view_content(state: &AppState) -> Element<'_, Message> {
    match (&state.view, state.current_report()) {
        (ViewState::Subjects(subjects), Some(report)) => {
            view_subjects(state, subjects, report)
        }
        (ViewState::Metrics(metrics), Some(_)) => view_metrics(metrics),
        (ViewState::NoReports, _) => EmptyState::new(lucide::folder().size(48), "No reports")
            .description("The server has no reports yet")
            .action("Reload", Message::from(ReportMessage::Reload))
            .centered()
            .view(),
        _ if state.is_loading => loading_state("Loading report"),
        _ => EmptyState::new(lucide::database().size(48), "No report loaded")
            .description(format!("Server: {}", state.settings.client.api_url))
            .action("Reload", Message::from(ReportMessage::Reload))
            .centered()
            .view(),
    }
}
