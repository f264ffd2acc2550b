//! Add, copy, and move buttons for report items.
//!
//! Copy and move are drop-down menus listing the items that can be copied or
//! moved; choosing one sends the message built by `on_select`.

use iced::widget::{button, pick_list, row, text};
use iced::{Alignment, Element};
use iced_fonts::lucide;

use crate::theme::{SPACING_XS, button_secondary};

/// Button that adds a new item.
pub fn add_button<'a, M: Clone + 'a>(item_type: &str, on_press: M) -> Element<'a, M> {
    button(
        row![lucide::plus().size(14), text(format!("Add {item_type}")).size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(on_press)
    .padding([6.0, 12.0])
    .style(button_secondary)
    .into()
}

/// Menu that copies one of `options` into the current container.
pub fn copy_button<'a, T, M>(
    item_type: &str,
    options: Vec<T>,
    on_select: impl Fn(T) -> M + 'a,
) -> Element<'a, M>
where
    T: ToString + PartialEq + Clone + 'a,
    M: Clone + 'a,
{
    menu_button(format!("Copy {item_type}"), options, on_select)
}

/// Menu that moves one of `options` into the current container.
pub fn move_button<'a, T, M>(
    item_type: &str,
    options: Vec<T>,
    on_select: impl Fn(T) -> M + 'a,
) -> Element<'a, M>
where
    T: ToString + PartialEq + Clone + 'a,
    M: Clone + 'a,
{
    menu_button(format!("Move {item_type}"), options, on_select)
}

fn menu_button<'a, T, M>(
    placeholder: String,
    options: Vec<T>,
    on_select: impl Fn(T) -> M + 'a,
) -> Element<'a, M>
where
    T: ToString + PartialEq + Clone + 'a,
    M: Clone + 'a,
{
    pick_list(options, None::<T>, on_select)
        .placeholder(placeholder)
        .text_size(13)
        .padding([6.0, 12.0])
        .into()
}
