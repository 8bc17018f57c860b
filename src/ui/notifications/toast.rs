// SPDX-License-Identifier: MPL-2.0
//! Toast rendering: small cards with a severity-colored border.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, row, text};
use iced::{Color, Element, Length, Theme};

/// Width of one toast.
const TOAST_WIDTH: f32 = 320.0;

fn view<'a>(notification: &'a Notification, i18n: &I18n) -> Element<'a, Message> {
    let message = if notification.message_args().is_empty() {
        i18n.tr(notification.message_key())
    } else {
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &args)
    };

    let dismiss = button(text("×").size(typography::TITLE_SM))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(styles::button::link);

    let accent = notification.severity().color();
    container(
        row![
            container(text(message).size(typography::BODY)).width(Length::Fill),
            dismiss
        ]
        .spacing(spacing::SM)
        .align_y(Vertical::Center),
    )
    .width(Length::Fixed(TOAST_WIDTH))
    .padding(spacing::SM)
    .style(move |theme: &Theme| toast_style(theme, accent))
    .into()
}

/// Renders the visible toasts stacked in the bottom-right corner.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &I18n) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> = manager
        .visible()
        .map(|notification| view(notification, i18n))
        .collect();

    container(
        column(toasts)
            .spacing(spacing::XS)
            .align_x(Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom)
    .padding(spacing::MD)
    .into()
}

fn toast_style(theme: &Theme, accent: Color) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(palette.background.base.text),
        border: iced::Border {
            color: accent,
            width: 2.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn toast_style_uses_accent_color() {
        let style = toast_style(&Theme::Dark, palette::ERROR_500);
        assert_eq!(style.border.color, palette::ERROR_500);
        assert!(style.background.is_some());
    }
}
