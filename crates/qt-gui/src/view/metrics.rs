//! Metrics view: a search box above one card per metric.

use iced::widget::{Column, column, container, scrollable};
use iced::{Element, Length};
use iced_fonts::lucide;

use crate::component::{EmptyState, loading_state, search_box};
use crate::message::{Message, MetricsMessage};
use crate::state::{LoadState, MetricsState};
use crate::theme::{METRIC_CARD_WIDTH, SPACING_LG, SPACING_MD};

use super::metric_card::view_metric_card;

/// Render the mounted metrics view.
pub fn view_metrics(metrics: &MetricsState) -> Element<'_, Message> {
    let search = container(search_box(
        metrics.search(),
        "Search metrics...",
        |search| Message::from(MetricsMessage::SearchChanged(search)),
        Message::from(MetricsMessage::SearchCleared),
    ))
    .max_width(METRIC_CARD_WIDTH * 2.0);

    let cards: Vec<Element<'_, Message>> = metrics
        .cards()
        .iter()
        .filter_map(|card| view_metric_card(card, metrics.search_filter()))
        .collect();

    let body: Element<'_, Message> = if !cards.is_empty() {
        scrollable(Column::with_children(cards).spacing(SPACING_MD))
            .height(Length::Fill)
            .into()
    } else if metrics
        .cards()
        .iter()
        .any(|card| card.state() == &LoadState::Loading)
    {
        loading_state("Loading metrics")
    } else if metrics.cards().is_empty() {
        EmptyState::new(lucide::list().size(48), "No metrics")
            .description("This report has no metrics yet")
            .centered()
            .view()
    } else {
        EmptyState::new(lucide::search().size(48), "No matching metrics")
            .description("No metric name contains the search text")
            .action("Clear search", Message::from(MetricsMessage::SearchCleared))
            .centered()
            .view()
    };

    container(column![search, body].spacing(SPACING_MD))
        .padding(SPACING_LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
