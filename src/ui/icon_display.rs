// SPDX-License-Identifier: MPL-2.0
//! Result panel: a pure function of the generation outcome.
//!
//! `InFlight` renders the busy spinner, `Failed` the error panel with a
//! try-again action, `Ready` the generated icon with save and start-over
//! actions, and `Idle` the initial placeholder. The panel holds no state of
//! its own beyond what it is given.

use crate::i18n::I18n;
use crate::studio::Outcome;
use crate::ui::components::ErrorDisplay;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, text, Column, Container, Row};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    /// Save the generated icon to disk.
    SaveRequested,
    /// Full reset: clears uploads, prompt, and outcome.
    ResetRequested,
    ToggleErrorDetails,
}

/// Snapshot required to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub outcome: &'a Outcome,
    /// Current spinner angle, advanced by the app tick while in flight.
    pub spinner_rotation: f32,
    pub error_details_visible: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let body: Element<'_, Message> = match ctx.outcome {
        Outcome::Idle => idle_view(i18n),
        Outcome::InFlight(_) => loading_view(i18n, ctx.spinner_rotation),
        Outcome::Ready { .. } => ready_view(i18n, ctx.outcome),
        Outcome::Failed(error) => {
            let toggle_label = if ctx.error_details_visible {
                i18n.tr("error-details-hide")
            } else {
                i18n.tr("error-details-show")
            };
            ErrorDisplay::new(i18n.tr("display-error-title"), i18n.tr(error.i18n_key()))
                .details(
                    format!("{error}"),
                    ctx.error_details_visible,
                    toggle_label,
                    Message::ToggleErrorDetails,
                )
                .action(i18n.tr("display-try-again"), Message::ResetRequested)
                .view()
        }
    };

    Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("display-section-title")).size(typography::TITLE_SM))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::result_well),
        )
        .height(Length::Fill)
        .into()
}

fn idle_view(i18n: &I18n) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(
            icons::tinted(icons::image(), palette::GRAY_400),
            sizing::ICON_XL,
        ))
        .push(
            text(i18n.tr("display-empty-title"))
                .size(typography::TITLE_SM)
                .color(palette::GRAY_200),
        )
        .push(
            text(i18n.tr("display-empty-subtitle"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .into()
}

fn loading_view(i18n: &I18n, rotation: f32) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(AnimatedSpinner::new(palette::PRIMARY_400, rotation, sizing::ICON_XL).into_element())
        .push(
            text(i18n.tr("display-loading-title"))
                .size(typography::TITLE_SM)
                .color(palette::GRAY_200),
        )
        .push(
            text(i18n.tr("display-loading-subtitle"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .into()
}

fn ready_view<'a>(i18n: &'a I18n, outcome: &'a Outcome) -> Element<'a, Message> {
    let Outcome::Ready { handle, .. } = outcome else {
        unreachable!("ready_view is only called with Outcome::Ready");
    };

    let preview = iced::widget::image::Image::new(handle.clone())
        .width(Length::Fixed(sizing::RESULT_MAX))
        .height(Length::Fixed(sizing::RESULT_MAX))
        .content_fit(ContentFit::Contain);

    let save = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(
                icons::tinted(icons::download(), palette::WHITE),
                sizing::ICON_SM,
            ))
            .push(text(i18n.tr("display-save")).size(typography::BODY)),
    )
    .on_press(Message::SaveRequested)
    .padding([spacing::XS, spacing::LG])
    .style(styles::button::primary);

    let start_over = button(text(i18n.tr("display-start-over")).size(typography::BODY))
        .on_press(Message::ResetRequested)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::subtle);

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(preview)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(save)
                .push(start_over),
        )
        .into()
}
