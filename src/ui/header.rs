// SPDX-License-Identifier: MPL-2.0
//! Application header: branding and tagline.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{rule, text, Column, Row};
use iced::{alignment, Element, Length, Theme};

pub fn view<Message: 'static>(i18n: &I18n) -> Element<'_, Message> {
    let brand = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(
            icons::tinted(icons::sparkles(), palette::PRIMARY_400),
            sizing::ICON_MD + 8.0,
        ))
        .push(
            Column::new()
                .push(text(i18n.tr("header-title")).size(typography::TITLE_LG))
                .push(
                    text(i18n.tr("header-subtitle"))
                        .size(typography::BODY)
                        .style(|theme: &Theme| iced::widget::text::Style {
                            color: Some(theme.extended_palette().secondary.base.text),
                        }),
                ),
        );

    Column::new()
        .push(
            iced::widget::Container::new(brand)
                .width(Length::Fill)
                .padding([spacing::MD, spacing::LG]),
        )
        .push(rule::horizontal(1))
        .into()
}
