// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Category chip in the filter bar. The active chip is filled.
pub fn chip(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_light = matches!(theme, Theme::Light);
        let (fill, text) = if is_light {
            (palette::STONE_900, palette::STONE_600)
        } else {
            (palette::STONE_100, palette::STONE_400)
        };
        let hovered = matches!(status, button::Status::Hovered);

        let (background, text_color, border_color) = match (active, hovered) {
            (true, _) => (Some(Background::Color(fill)), surface_of(is_light), fill),
            (false, true) => (None, fill, fill),
            (false, false) => (None, text, palette::STONE_400),
        };

        button::Style {
            background,
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Transparent button with a dark backdrop, drawn over media.
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::BACKDROP,
        _ => opacity::OVERLAY,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: palette::WHITE,
        border: Border {
            color: Color {
                a: opacity::VEIL,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Text-only link, e.g. the close action of the detail view.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let text_color = match (status, is_light) {
        (button::Status::Hovered, _) => palette::ACCENT_500,
        (_, true) => palette::STONE_600,
        (_, false) => palette::STONE_400,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

fn surface_of(is_light: bool) -> Color {
    if is_light {
        palette::STONE_50
    } else {
        palette::STONE_950
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_chip_is_filled() {
        let style = chip(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::STONE_100))
        );
    }

    #[test]
    fn inactive_chip_has_no_fill() {
        let style = chip(false)(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.text_color, palette::STONE_600);
    }

    #[test]
    fn overlay_darkens_on_hover() {
        let idle = overlay(&Theme::Dark, button::Status::Active);
        let hovered = overlay(&Theme::Dark, button::Status::Hovered);
        let alpha = |style: button::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha(hovered) > alpha(idle));
    }
}
