//! Metric card view.

use iced::Element;
use iced::widget::container;

use crate::component::ErrorState;
use crate::error::GuiError;
use crate::message::{Message, MetricsMessage};
use crate::state::{CardContent, MetricCard};
use crate::theme::{SPACING_MD, container_card};

use super::measurement::view_measurement;

/// Render a card, or nothing when [`MetricCard::content`] says so.
pub fn view_metric_card<'a>(
    card: &'a MetricCard,
    search: Option<&str>,
) -> Option<Element<'a, Message>> {
    let body: Element<'a, Message> = match card.content(search) {
        CardContent::Nothing => return None,
        CardContent::Failed(error) => {
            let error = GuiError::metric_load(card.metric_uuid().as_str(), error);
            let mut state = ErrorState::new(error.to_string())
                .retry(Message::from(MetricsMessage::Retry(card.mount_id())));
            if let Some(suggestion) = error.suggestion() {
                state = state.message(suggestion);
            }
            state.view()
        }
        CardContent::Record(record) => {
            view_measurement(&record.measurement, &record.metric, &record.source)
        }
    };

    Some(
        container(body)
            .padding(SPACING_MD)
            .width(iced::Length::Fill)
            .style(container_card)
            .into(),
    )
}
