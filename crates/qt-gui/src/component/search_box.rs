//! Search box component.
//!
//! A text input with search icon and clear button.

use iced::widget::{button, container, row, text_input};
use iced::{Alignment, Border, Element, Length, Padding, Theme};
use iced_fonts::lucide;

use crate::theme::{BORDER_RADIUS_SM, SPACING_XS, button_ghost, text_muted};

/// Creates a search input with clear button.
///
/// The clear button is only shown while there is text.
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(Padding::new(6.0).left(4.0))
        .width(Length::Fill);

    let mut content = row![
        container(lucide::search().size(14).style(text_muted)).padding([0.0, 8.0]),
        input,
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    if !value.is_empty() {
        content = content.push(
            button(lucide::x().size(14))
                .on_press(on_clear)
                .padding([4.0, 8.0])
                .style(button_ghost),
        );
    }

    container(content)
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            iced::widget::container::Style {
                background: Some(palette.background.base.color.into()),
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: BORDER_RADIUS_SM.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
