// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are single-color SVGs embedded at compile time via `include_bytes!`;
//! handles are cached with `OnceLock` so each asset is parsed once. Use
//! [`tinted`] to recolor an icon for the current theme or severity.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `trash` not `remove_style`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    sparkles,
    "sparkles.svg",
    "Sparkles icon: one large and two small four-point stars."
);
define_icon!(
    upload,
    "upload.svg",
    "Upload icon: arrow rising out of a tray."
);
define_icon!(
    download,
    "download.svg",
    "Download icon: arrow descending into a tray."
);
define_icon!(
    image,
    "image.svg",
    "Image icon: framed landscape with a sun."
);
define_icon!(trash, "trash.svg", "Trash icon: waste bin with a lid.");
define_icon!(
    wand,
    "wand.svg",
    "Magic wand icon: diagonal wand with sparks."
);
define_icon!(
    warning,
    "warning.svg",
    "Warning icon: triangle with an exclamation mark."
);
define_icon!(cross, "cross.svg", "Cross icon: diagonal X.");
define_icon!(checkmark, "checkmark.svg", "Checkmark icon: single tick.");
define_icon!(info, "info.svg", "Info icon: circled lowercase i.");

/// Constrains an icon to a square of the given size.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Recolors an icon with a fixed color, regardless of theme.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

/// Recolors an icon with the theme's base text color.
pub fn themed(icon: Svg<'static>) -> Svg<'static> {
    icon.style(|theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(theme.palette().text),
    })
}
