// SPDX-License-Identifier: MPL-2.0
//! Prompt panel: optional subject reference, prompt text, generate action.

use crate::i18n::I18n;
use crate::reference::ReferenceImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Row, Stack};
use iced::{alignment, ContentFit, Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    /// Open the single-file picker for the subject reference.
    PickContentFile,
    /// Drop the subject reference.
    ClearContent,
    PromptChanged(String),
    GenerateRequested,
}

/// Snapshot required to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub prompt: &'a str,
    pub content: Option<&'a ReferenceImage>,
    /// Readiness predicate: prompt non-empty and style set non-empty.
    pub is_ready: bool,
    pub is_generating: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("content-section-title")).size(typography::TITLE_SM))
        .push(secondary_text(i18n.tr("content-hint")))
        .push(content_slot(ctx.i18n, ctx.content))
        .push(text(i18n.tr("prompt-section-title")).size(typography::TITLE_SM))
        .push(secondary_text(i18n.tr("prompt-hint")))
        .push(
            text_input(&i18n.tr("prompt-placeholder"), ctx.prompt)
                .on_input(Message::PromptChanged)
                .padding(spacing::SM)
                .size(typography::BODY),
        )
        .push(generate_button(ctx.i18n, ctx.is_ready, ctx.is_generating))
        .into()
}

fn content_slot<'a>(i18n: &'a I18n, content: Option<&'a ReferenceImage>) -> Element<'a, Message> {
    match content {
        Some(image) => {
            let preview = Container::new(
                iced::widget::image::Image::new(image.handle())
                    .width(Length::Fixed(sizing::CONTENT_PREVIEW))
                    .height(Length::Fixed(sizing::CONTENT_PREVIEW))
                    .content_fit(ContentFit::Cover),
            )
            .style(styles::container::preview_frame);

            let clear = Container::new(
                button(icons::sized(
                    icons::tinted(icons::trash(), crate::ui::design_tokens::palette::WHITE),
                    sizing::ICON_SM,
                ))
                .on_press(Message::ClearContent)
                .padding(spacing::XXS)
                .style(styles::button::destructive),
            )
            .width(Length::Fixed(sizing::CONTENT_PREVIEW))
            .align_x(alignment::Horizontal::Right)
            .padding(spacing::XXS);

            Stack::new().push(preview).push(clear).into()
        }
        None => button(
            Container::new(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::sized(icons::themed(icons::image()), sizing::ICON_MD))
                    .push(text(i18n.tr("content-pick")).size(typography::BODY)),
            )
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .style(styles::container::drop_zone),
        )
        .on_press(Message::PickContentFile)
        .padding(0.0)
        .style(styles::button::bare)
        .into(),
    }
}

fn generate_button(i18n: &I18n, is_ready: bool, is_generating: bool) -> Element<'_, Message> {
    let label = if is_generating {
        i18n.tr("generate-button-busy")
    } else {
        i18n.tr("generate-button")
    };

    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(
            icons::tinted(icons::wand(), crate::ui::design_tokens::palette::WHITE),
            sizing::ICON_SM,
        ))
        .push(text(label).size(typography::BODY));

    // The control is the serialization point: disabled while a request is in
    // flight or the readiness predicate fails.
    let action = (is_ready && !is_generating).then_some(Message::GenerateRequested);

    Container::new(
        button(
            Container::new(content)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .on_press_maybe(action)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary),
    )
    .padding([spacing::SM, 0.0])
    .into()
}

fn secondary_text<'a>(content: String) -> iced::widget::Text<'a> {
    text(content)
        .size(typography::CAPTION)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        })
}
