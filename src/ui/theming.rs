// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use serde::{Deserialize, Serialize};

/// User-selectable theme mode, persisted in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the operating system preference.
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the mode into a concrete Iced theme.
    ///
    /// `System` queries the OS preference; when detection is unavailable or
    /// unspecified the dark theme is used, matching the result-well styling.
    #[must_use]
    pub fn resolve(self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => iced::Theme::Light,
                _ => iced::Theme::Dark,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn explicit_modes_resolve_directly() {
        assert!(matches!(ThemeMode::Light.resolve(), iced::Theme::Light));
        assert!(matches!(ThemeMode::Dark.resolve(), iced::Theme::Dark));
    }

    #[test]
    fn serde_uses_kebab_case() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }

        let serialized = toml::to_string(&Wrapper {
            mode: ThemeMode::System,
        })
        .expect("serialize");
        assert!(serialized.contains("\"system\""));

        let parsed: Wrapper = toml::from_str("mode = \"dark\"").expect("deserialize");
        assert_eq!(parsed.mode, ThemeMode::Dark);
    }
}
