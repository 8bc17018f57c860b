// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn veil(alpha: f32) -> Background {
    Background::Color(Color {
        a: alpha,
        ..palette::BLACK
    })
}

/// Page background following the active theme.
pub fn page(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Backdrop behind the project detail view.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(veil(opacity::BACKDROP)),
        ..Default::default()
    }
}

/// Surface of the project detail view.
pub fn sheet(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder surface while an image loads or after it failed.
pub fn placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Darkening veil over a hovered gallery card.
pub fn hover_veil(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(veil(opacity::VEIL)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Small pill drawn over media ("Before", "After", hints).
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(veil(opacity::OVERLAY)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bottom bar holding the video controls.
pub fn control_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(veil(opacity::OVERLAY)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Error affordance inside the media panel.
pub fn error(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.danger.base.color),
        border: Border {
            color: palette.danger.base.color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
