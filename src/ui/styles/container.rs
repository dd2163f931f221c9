// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Card-like panel grouping one section of the workspace.
pub fn panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Bordered target inviting a click or a file drop.
pub fn drop_zone(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: palette::GRAY_400,
            width: 2.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Frame around a preview thumbnail.
pub fn preview_frame(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Dark well the generated result sits in.
pub fn result_well(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        border: Border {
            color: palette::GRAY_700,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::GRAY_100),
        ..Default::default()
    }
}
