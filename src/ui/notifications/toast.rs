// SPDX-License-Identifier: MPL-2.0
//! Toast rendering: small severity-accented cards stacked bottom-right.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::I18n;
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders all visible toasts, anchored to the bottom-right corner.
///
/// Returns a zero-size element when there is nothing to show so the overlay
/// never intercepts input.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> = manager
        .visible()
        .map(|notification| view_toast(notification, i18n))
        .collect();

    if toasts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    Container::new(
        Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Bottom)
    .padding(spacing::MD)
    .into()
}

fn view_toast<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let message_text = if notification.message_args().is_empty() {
        i18n.tr(notification.message_key())
    } else {
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &args)
    };

    let dismiss = button(icons::sized(icons::themed(icons::cross()), sizing::ICON_SM))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(styles::button::bare);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(
            icons::tinted(severity_icon(notification.severity()), accent),
            sizing::ICON_MD,
        ))
        .push(
            Container::new(text(message_text).size(typography::BODY)).width(Length::Fill),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_style(theme, accent))
        .into()
}

fn severity_icon(severity: Severity) -> Svg<'static> {
    match severity {
        Severity::Success => icons::checkmark(),
        Severity::Info => icons::info(),
        Severity::Warning | Severity::Error => icons::warning(),
    }
}

fn toast_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            color: accent,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        shadow: shadow::MD,
        ..Default::default()
    }
}
