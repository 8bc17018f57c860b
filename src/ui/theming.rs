// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes, and the user's theme preference.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub accent: Color,
    pub error: Color,

    // Media overlays (badges, control bar, hover veil)
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::STONE_50,
            surface_secondary: palette::STONE_100,

            text_primary: palette::STONE_900,
            text_secondary: palette::STONE_600,
            text_muted: palette::STONE_400,

            accent: palette::ACCENT_600,
            error: palette::ERROR_500,

            overlay_background: Color {
                a: opacity::OVERLAY,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::STONE_950,
            surface_secondary: palette::STONE_800,

            text_primary: palette::STONE_100,
            text_secondary: palette::STONE_400,
            text_muted: palette::STONE_600,

            accent: palette::ACCENT_400,
            error: palette::ERROR_500,

            overlay_background: Color {
                a: opacity::OVERLAY,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }
}

/// Theme preference stored in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Dark on detection error.
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Resolved theme: the preference and the colors it selects.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };
        Self { colors, mode, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// The built-in iced theme used as the base for widget styles.
    #[must_use]
    pub fn iced_theme(&self) -> iced::Theme {
        if self.dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        assert!(ColorScheme::light().surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        assert!(ColorScheme::dark().surface_primary.r < 0.2);
    }

    #[test]
    fn explicit_modes_resolve_without_detection() {
        assert!(!AppTheme::new(ThemeMode::Light).is_dark());
        assert!(AppTheme::new(ThemeMode::Dark).is_dark());
        // System mode depends on the desktop; only check it resolves.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn iced_theme_follows_resolved_mode() {
        assert_eq!(AppTheme::new(ThemeMode::Dark).iced_theme(), iced::Theme::Dark);
        assert_eq!(AppTheme::new(ThemeMode::Light).iced_theme(), iced::Theme::Light);
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let text = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .unwrap();
        assert_eq!(text.trim(), "mode = \"dark\"");
    }
}
