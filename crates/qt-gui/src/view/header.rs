//! Header bar: report selector, tabs, and report-level actions.

use iced::widget::{Space, button, column, container, pick_list, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::message::{Message, ReportChoice, ReportMessage};
use crate::state::{AppState, Tab};
use crate::theme::{
    SPACING_MD, SPACING_SM, SPACING_XS, button_chip, button_ghost, button_secondary,
    container_header, text_muted,
};

/// Render the header.
pub fn view_header(state: &AppState) -> Element<'_, Message> {
    let choices: Vec<ReportChoice> = state.reports.iter().map(ReportChoice::from_report).collect();
    let selected = state.current_report().map(ReportChoice::from_report);

    let selector = pick_list(choices, selected, |choice| {
        Message::from(ReportMessage::Select(choice))
    })
    .placeholder("Select a report")
    .text_size(14);

    let tabs = Tab::ALL.into_iter().fold(row![].spacing(SPACING_XS), |tabs, tab| {
        tabs.push(
            button(text(tab.label()).size(13))
                .on_press(Message::from(ReportMessage::ShowTab(tab)))
                .padding([6.0, 14.0])
                .style(button_chip(state.tab == tab)),
        )
    });

    let updated = match state.loaded_at {
        _ if state.is_loading => "Loading...".to_string(),
        Some(at) => format!("Updated {}", at.format("%H:%M:%S")),
        None => String::new(),
    };

    let copy_link = button(
        row![lucide::link().size(14), text("Copy link").size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::CopyLink)
    .padding([6.0, 10.0])
    .style(button_ghost);

    let reload = button(lucide::refresh_cw().size(14))
        .on_press_maybe((!state.is_loading).then(|| Message::from(ReportMessage::Reload)))
        .padding([6.0, 10.0])
        .style(button_secondary);

    let top = row![
        text("Quality-time").size(18),
        selector,
        tabs,
        Space::new().width(Length::Fill),
        text(updated).size(12).style(text_muted),
        copy_link,
        reload,
    ]
    .spacing(SPACING_MD)
    .align_y(Alignment::Center);

    container(
        column![top, text(state.location.href()).size(11).style(text_muted)]
            .spacing(SPACING_XS),
    )
    .padding([SPACING_SM, SPACING_MD])
    .width(Length::Fill)
    .style(container_header)
    .into()
}
