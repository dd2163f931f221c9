// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the header, the controls column (uploader + prompt), and the
//! result panel, with the toast overlay stacked on top.

use super::Message;
use crate::i18n::I18n;
use crate::studio;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications;
use crate::ui::styles;
use crate::ui::{header, icon_display, prompt_controls, uploader};
use iced::widget::{scrollable, Column, Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub studio: &'a studio::State,
    pub notifications: &'a notifications::Manager,
    pub spinner_rotation: f32,
    pub error_details_visible: bool,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controls = scrollable(
        Column::new()
            .spacing(spacing::LG)
            .push(
                uploader::view(uploader::ViewContext {
                    i18n: ctx.i18n,
                    styles: ctx.studio.styles(),
                })
                .map(Message::Uploader),
            )
            .push(
                prompt_controls::view(prompt_controls::ViewContext {
                    i18n: ctx.i18n,
                    prompt: ctx.studio.prompt(),
                    content: ctx.studio.content(),
                    is_ready: ctx.studio.is_ready_to_generate(),
                    is_generating: ctx.studio.is_generating(),
                })
                .map(Message::PromptControls),
            )
            .padding(spacing::MD),
    );

    let result = icon_display::view(icon_display::ViewContext {
        i18n: ctx.i18n,
        outcome: ctx.studio.outcome(),
        spinner_rotation: ctx.spinner_rotation,
        error_details_visible: ctx.error_details_visible,
    })
    .map(Message::IconDisplay);

    let columns = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(
            Container::new(controls)
                .width(Length::FillPortion(1))
                .height(Length::Fill)
                .style(styles::container::panel),
        )
        .push(
            Container::new(result)
                .width(Length::FillPortion(1))
                .height(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::panel),
        );

    let page = Column::new()
        .push(header::view(ctx.i18n))
        .push(columns)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts =
        notifications::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(page).push(toasts).into()
}
