// SPDX-License-Identifier: MPL-2.0
//! Style-set panel: the drop zone and the uploaded reference grid.
//!
//! Stateless view over the studio snapshot; interactions bubble up as
//! [`Message`] values for the application root to act on.

use crate::i18n::I18n;
use crate::reference::ReferenceImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Thumbnails per grid row.
const GRID_COLUMNS: usize = 4;

#[derive(Debug, Clone)]
pub enum Message {
    /// Open the multi-file picker for style references.
    PickFiles,
    /// Remove the style reference at this position.
    Remove(usize),
}

/// Snapshot required to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub styles: &'a [ReferenceImage],
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("uploader-section-title")).size(typography::TITLE_SM))
        .push(secondary_text(i18n.tr("uploader-hint")))
        .push(drop_zone(i18n));

    if !ctx.styles.is_empty() {
        column = column
            .push(text(i18n.tr("uploader-set-title")).size(typography::BODY))
            .push(thumbnail_grid(ctx.styles));
    }

    column.into()
}

fn drop_zone(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(icons::themed(icons::upload()), sizing::ICON_XL))
        .push(text(i18n.tr("uploader-drop-zone")).size(typography::BODY))
        .push(secondary_text(i18n.tr("uploader-drop-hint")));

    button(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .style(styles::container::drop_zone),
    )
    .on_press(Message::PickFiles)
    .padding(0.0)
    .style(styles::button::bare)
    .into()
}

fn thumbnail_grid(styles: &[ReferenceImage]) -> Element<'_, Message> {
    let mut grid = Column::new().spacing(spacing::XS);

    for (row_index, chunk) in styles.chunks(GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::XS);
        for (col_index, image) in chunk.iter().enumerate() {
            row = row.push(thumbnail(row_index * GRID_COLUMNS + col_index, image));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn thumbnail(index: usize, image: &ReferenceImage) -> Element<'_, Message> {
    let preview = Container::new(
        iced::widget::image::Image::new(image.handle())
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .content_fit(ContentFit::Cover),
    )
    .style(styles::container::preview_frame);

    let remove = Container::new(
        button(icons::sized(
            icons::tinted(icons::trash(), crate::ui::design_tokens::palette::WHITE),
            sizing::ICON_SM,
        ))
        .on_press(Message::Remove(index))
        .padding(spacing::XXS)
        .style(styles::button::destructive),
    )
    .width(Length::Fixed(sizing::THUMBNAIL))
    .align_x(alignment::Horizontal::Right)
    .padding(spacing::XXS);

    Stack::new().push(preview).push(remove).into()
}

fn secondary_text(content: String) -> iced::widget::Text<'static> {
    text(content)
        .size(typography::CAPTION)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        })
}
