//! Empty, loading, and error state components.
//!
//! ```rust,ignore
//! EmptyState::new(lucide::folder().size(48), "No reports")
//!     .description("The server has no reports yet")
//!     .action("Reload", Message::Report(ReportMessage::Reload))
//!     .centered()
//!     .view()
//!
//! ErrorState::new("Could not load metric")
//!     .message(error.user_message())
//!     .retry(MetricsMessage::Retry(mount).into())
//!     .view()
//! ```

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::error::GuiError;
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, button_ghost, button_primary, container_error, text_muted,
};

// =============================================================================
// EMPTY STATE
// =============================================================================

/// Empty state with icon, title, description, and optional action.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
    action: Option<(String, M)>,
    centered: bool,
}

impl<'a, M: Clone + 'a> EmptyState<'a, M> {
    /// Create a new empty state with icon and title.
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
            action: None,
            centered: false,
        }
    }

    /// Add a description below the title.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Add an action button.
    pub fn action(mut self, label: impl Into<String>, message: M) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    /// Center the content in a full-size container.
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let mut content = column![self.icon, Space::new().height(SPACING_MD)]
            .push(text(self.title).size(16));

        if let Some(desc) = self.description {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(text(desc).size(13).style(text_muted));
        }

        if let Some((label, message)) = self.action {
            content = content.push(Space::new().height(SPACING_LG)).push(
                button(text(label).size(14))
                    .on_press(message)
                    .padding([10.0, 24.0])
                    .style(button_primary),
            );
        }

        let content = container(content.align_x(Alignment::Center))
            .width(Length::Fill)
            .center_x(Length::Fill);

        if self.centered {
            content.height(Length::Fill).center_y(Length::Fill).into()
        } else {
            content.into()
        }
    }
}

// =============================================================================
// LOADING STATE
// =============================================================================

/// Loading indicator with a title.
pub fn loading_state<'a, M: 'a>(title: impl Into<String>) -> Element<'a, M> {
    container(
        column![
            lucide::loader().size(40),
            Space::new().height(SPACING_LG),
            text(title.into()).size(16),
        ]
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

// =============================================================================
// ERROR STATE
// =============================================================================

/// Inline error with message and optional retry action.
pub struct ErrorState<M> {
    title: String,
    message: Option<String>,
    retry: Option<M>,
}

impl<M: Clone> ErrorState<M> {
    /// Create a new error state with title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            retry: None,
        }
    }

    /// Set the error message.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message = Some(msg.into());
        self
    }

    /// Add a retry button.
    pub fn retry(mut self, message: M) -> Self {
        self.retry = Some(message);
        self
    }

    /// Build the element.
    pub fn view<'a>(self) -> Element<'a, M>
    where
        M: 'a,
    {
        let mut content = column![
            row![
                lucide::circle_alert().size(16).style(|theme: &Theme| {
                    iced::widget::text::Style {
                        color: Some(theme.extended_palette().danger.base.color),
                    }
                }),
                text(self.title).size(14),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center)
        ]
        .spacing(SPACING_SM);

        if let Some(msg) = self.message {
            content = content.push(text(msg).size(12).style(text_muted));
        }

        if let Some(retry_msg) = self.retry {
            content = content.push(
                button(
                    row![lucide::refresh_cw().size(14), text("Retry").size(14)]
                        .spacing(SPACING_SM)
                        .align_y(Alignment::Center),
                )
                .on_press(retry_msg)
                .padding([6.0, 16.0])
                .style(button_primary),
            );
        }

        content.into()
    }
}

// =============================================================================
// ERROR BANNER
// =============================================================================

/// Dismissible banner showing a [`GuiError`] and its suggestion.
pub fn error_banner<'a, M: Clone + 'a>(
    error: &GuiError,
    on_dismiss: M,
    on_retry: Option<M>,
) -> Element<'a, M> {
    let mut details = column![text(error.to_string()).size(14)].spacing(2.0);
    if let Some(suggestion) = error.suggestion() {
        details = details.push(text(suggestion).size(12));
    }

    let mut content = row![
        lucide::triangle_alert().size(18),
        container(details).width(Length::Fill),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    if let Some(retry) = on_retry {
        content = content.push(
            button(text("Reload").size(13))
                .on_press(retry)
                .padding([4.0, 12.0])
                .style(button_primary),
        );
    }

    content = content.push(
        button(lucide::x().size(16))
            .on_press(on_dismiss)
            .padding([4.0, 8.0])
            .style(button_ghost),
    );

    container(content)
        .padding(SPACING_SM)
        .width(Length::Fill)
        .style(container_error)
        .into()
}
