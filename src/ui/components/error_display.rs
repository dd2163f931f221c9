// SPDX-License-Identifier: MPL-2.0
//! Reusable error display with consistent styling.
//!
//! Shows a severity icon, a title, a user-friendly message, an optional
//! action button, and optionally the raw technical details behind a toggle.

use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, rule, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl Severity {
    pub fn color(&self) -> Color {
        match self {
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
        }
    }
}

/// Builder for the error panel.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: Severity,
    title: String,
    message: String,
    details: Option<String>,
    details_visible: bool,
    toggle_details: Option<Message>,
    toggle_label: String,
    action: Option<(String, Message)>,
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::default(),
            title: title.into(),
            message: message.into(),
            details: None,
            details_visible: false,
            toggle_details: None,
            toggle_label: String::new(),
            action: None,
        }
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Raw technical details, rendered behind a toggle.
    #[must_use]
    pub fn details(
        mut self,
        details: impl Into<String>,
        visible: bool,
        toggle_label: impl Into<String>,
        on_toggle: Message,
    ) -> Self {
        self.details = Some(details.into());
        self.details_visible = visible;
        self.toggle_label = toggle_label.into();
        self.toggle_details = Some(on_toggle);
        self
    }

    /// Action button below the message.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    /// Renders the panel, centered in its container.
    pub fn view(self) -> Element<'static, Message> {
        let accent = self.severity.color();

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(icons::sized(
                icons::tinted(icons::warning(), accent),
                sizing::ICON_XL,
            ))
            .push(
                Text::new(self.title)
                    .size(typography::TITLE_MD)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent),
                    }),
            )
            .push(Text::new(self.message).size(typography::BODY).center());

        if let Some((label, message)) = self.action {
            content = content.push(
                Container::new(
                    button(Text::new(label))
                        .on_press(message)
                        .padding([spacing::XS, spacing::LG])
                        .style(styles::button::destructive),
                )
                .padding(spacing::XS),
            );
        }

        if let (Some(details), Some(on_toggle)) = (self.details, self.toggle_details) {
            content = content.push(
                button(Text::new(self.toggle_label).size(typography::CAPTION))
                    .on_press(on_toggle)
                    .style(styles::button::bare),
            );

            if self.details_visible {
                let details_text =
                    Text::new(details)
                        .size(typography::CAPTION)
                        .style(|theme: &Theme| text::Style {
                            color: Some(theme.extended_palette().secondary.base.text),
                        });
                content = content.push(
                    Column::new()
                        .spacing(spacing::XS)
                        .width(Length::Fill)
                        .push(rule::horizontal(1))
                        .push(details_text),
                );
            }
        }

        Container::new(
            Container::new(content)
                .max_width(480.0)
                .padding(spacing::LG)
                .style(move |theme: &Theme| container::Style {
                    background: Some(iced::Background::Color(
                        theme.extended_palette().background.weak.color,
                    )),
                    border: iced::Border {
                        color: accent,
                        width: 1.0,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
        Toggle,
    }

    #[test]
    fn builder_collects_fields() {
        let display = ErrorDisplay::new("Generation Failed", "rate limited")
            .severity(Severity::Error)
            .details("HTTP 429", false, "Show details", TestMessage::Toggle)
            .action("Try Again", TestMessage::Retry);

        assert_eq!(display.severity, Severity::Error);
        assert_eq!(display.title, "Generation Failed");
        assert_eq!(display.message, "rate limited");
        assert_eq!(display.details.as_deref(), Some("HTTP 429"));
        assert!(!display.details_visible);
        assert_eq!(
            display.action,
            Some(("Try Again".to_string(), TestMessage::Retry))
        );
    }

    #[test]
    fn severity_colors_differ() {
        assert_ne!(Severity::Error.color(), Severity::Warning.color());
    }
}
