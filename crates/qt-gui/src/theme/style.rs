//! Theme and widget styles.
//!
//! Styles read their colors from the active theme's extended palette so the
//! light and dark themes need no separate code paths.

use iced::theme::Palette;
use iced::widget::{button, container, text};
use iced::{Border, Color, Shadow, Theme, Vector};

use qt_model::MetricStatus;

use super::spacing::{BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_THIN};

/// Build the application theme.
pub fn quality_theme(dark_mode: bool) -> Theme {
    let palette = if dark_mode {
        Palette {
            background: Color::from_rgb(0.11, 0.12, 0.14),
            text: Color::from_rgb(0.92, 0.92, 0.94),
            primary: Color::from_rgb(0.35, 0.60, 0.95),
            success: Color::from_rgb(0.30, 0.75, 0.45),
            warning: Color::from_rgb(0.95, 0.70, 0.20),
            danger: Color::from_rgb(0.90, 0.35, 0.35),
        }
    } else {
        Palette {
            background: Color::from_rgb(0.98, 0.98, 0.99),
            text: Color::from_rgb(0.10, 0.10, 0.12),
            primary: Color::from_rgb(0.13, 0.45, 0.85),
            success: Color::from_rgb(0.20, 0.65, 0.35),
            warning: Color::from_rgb(0.95, 0.65, 0.05),
            danger: Color::from_rgb(0.85, 0.25, 0.25),
        }
    };
    let name = if dark_mode { "Quality-time Dark" } else { "Quality-time Light" };
    Theme::custom(name.to_string(), palette)
}

/// Color of a metric status.
pub fn status_color(theme: &Theme, status: Option<MetricStatus>) -> Color {
    let palette = theme.extended_palette();
    match status {
        Some(MetricStatus::TargetMet) => palette.success.base.color,
        Some(MetricStatus::NearTargetMet) => palette.warning.base.color,
        Some(MetricStatus::TargetNotMet) => palette.danger.base.color,
        Some(MetricStatus::DebtTargetMet) => Color::from_rgb(0.55, 0.55, 0.60),
        Some(MetricStatus::Informative) => palette.primary.base.color,
        Some(MetricStatus::Unknown) | None => palette.background.strong.color,
    }
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Active => palette.primary.base.color,
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        button::Status::Disabled => palette.background.strong.color,
    };
    button::Style {
        background: Some(background.into()),
        text_color: palette.primary.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

/// Secondary button style - less prominent actions.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.weak.color,
        button::Status::Active | button::Status::Disabled => palette.background.base.color,
    };
    button::Style {
        background: Some(background.into()),
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: BORDER_WIDTH_THIN,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Ghost button style - icon buttons and links.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(palette.background.weak.color.into())
            }
            button::Status::Active | button::Status::Disabled => None,
        },
        text_color: palette.primary.base.color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// Chip style for on/off toggles such as column visibility.
pub fn button_chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if selected {
            button_primary(theme, status)
        } else {
            button_secondary(theme, status)
        }
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - subjects and metric cards.
pub fn container_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: BORDER_WIDTH_THIN,
            color: palette.background.strong.color,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Header bar style.
pub fn container_header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        ..Default::default()
    }
}

/// Error banner style.
pub fn container_error(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.danger.weak.color.into()),
        text_color: Some(palette.danger.weak.text),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: BORDER_WIDTH_THIN,
            color: palette.danger.base.color,
        },
        ..Default::default()
    }
}

/// Table header row style.
pub fn container_table_header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        ..Default::default()
    }
}

// =============================================================================
// TEXT STYLES
// =============================================================================

/// Muted text - secondary labels and timestamps.
pub fn text_muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}

/// Status text in the status color.
pub fn text_status(status: Option<MetricStatus>) -> impl Fn(&Theme) -> text::Style {
    move |theme| text::Style {
        color: Some(status_color(theme, status)),
    }
}
