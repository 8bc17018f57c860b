// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.

use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Video progress scrubber: accent fill on a translucent white rail.
pub fn progress(_theme: &Theme, status: slider::Status) -> slider::Style {
    let handle_radius = match status {
        slider::Status::Hovered | slider::Status::Dragged => sizing::SCRUBBER_THUMB / 2.0 + 1.0,
        slider::Status::Active => sizing::SCRUBBER_THUMB / 2.0,
    };
    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::ACCENT_500),
                Background::Color(Color {
                    a: opacity::VEIL,
                    ..palette::WHITE
                }),
            ),
            width: sizing::TIMELINE_TRACK,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: (sizing::TIMELINE_TRACK / 2.0).into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: handle_radius,
            },
            background: Background::Color(palette::WHITE),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        },
    }
}
