// SPDX-License-Identifier: MPL-2.0
//! Video playback controls UI.
//!
//! A bar with play/pause, a progress scrubber, the time display and a mute
//! toggle, drawn over the bottom edge of the video panel.

use crate::domain::viewer::{Playback, ProgressFraction};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::Message;
use iced::widget::{button, container, row, slider, text};
use iced::{Alignment, Element, Length};

/// Scrubber step as a fraction of the duration.
const SLIDER_STEP: f64 = 0.001;

/// View context for rendering video controls.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Values the controls display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlsState {
    pub playback: Playback,
    /// Slider position: the drag preview while scrubbing, else the progress.
    pub displayed_progress: ProgressFraction,
    pub duration_secs: f64,
    /// `false` until the source is confirmed playable.
    pub enabled: bool,
}

/// Renders the video controls bar.
pub fn view<'a>(ctx: ViewContext<'a>, state: ControlsState) -> Element<'a, Message> {
    let play_label = if state.playback.is_playing {
        ctx.i18n.tr("viewer-pause")
    } else {
        ctx.i18n.tr("viewer-play")
    };
    let mute_label = if state.playback.is_muted {
        ctx.i18n.tr("viewer-unmute")
    } else {
        ctx.i18n.tr("viewer-mute")
    };

    let play_button = button(text(play_label).size(typography::CAPTION))
        .on_press_maybe(state.enabled.then_some(Message::TogglePlayback))
        .padding([spacing::XXS, spacing::SM])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::overlay);

    let mute_button = button(text(mute_label).size(typography::CAPTION))
        .on_press(Message::ToggleMute)
        .padding([spacing::XXS, spacing::SM])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::overlay);

    // on_change previews, on_release commits the seek.
    let timeline = slider(
        0.0..=1.0,
        state.displayed_progress.value(),
        Message::SeekPreview,
    )
    .on_release(Message::SeekCommit)
    .step(SLIDER_STEP)
    .width(Length::Fill)
    .style(styles::slider::progress);

    let position_secs = state.displayed_progress.position_in(state.duration_secs);
    let time_display = text(ctx.i18n.tr_with_args(
        "viewer-time",
        &[
            ("current", &format_time(position_secs)),
            ("total", &format_time(state.duration_secs)),
        ],
    ))
    .size(typography::CAPTION);

    let controls = row![play_button, timeline, time_display, mute_button]
        .spacing(spacing::SM)
        .padding(spacing::XS)
        .align_y(Alignment::Center);

    container(controls)
        .width(Length::Fill)
        .style(styles::container::control_bar)
        .into()
}

/// Formats seconds as `mm:ss`, or `hh:mm:ss` past one hour.
fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() {
        seconds.max(0.0) as u64
    } else {
        0
    };
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
